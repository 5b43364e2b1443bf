use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::Record;
use std::io;

/// Keeps the "persisted" collection in memory. Counts saves and can be told
/// to fail them, so callers' error paths can be exercised without a disk.
#[derive(Debug, Clone)]
pub struct InMemoryStore<R> {
    records: Vec<R>,
    saves: usize,
    fail_saves: bool,
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            saves: 0,
            fail_saves: false,
        }
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records,
            ..Self::new()
        }
    }

    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl<R: Record> DataStore<R> for InMemoryStore<R> {
    fn load(&mut self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[R]) -> Result<()> {
        if self.fail_saves {
            return Err(RosterError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Contact, ContactDraft, Task, TaskDraft, TaskPatch};

    pub struct StoreFixture<R> {
        pub store: InMemoryStore<R>,
    }

    impl<R: Record> Default for StoreFixture<R> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<R: Record> StoreFixture<R> {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn next_id(&self) -> u64 {
            self.store.records.len() as u64 + 1
        }
    }

    impl StoreFixture<Contact> {
        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            let contact =
                Contact::create(self.next_id(), ContactDraft::new(name, phone)).unwrap();
            self.store.records.push(contact);
            self
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for _ in 0..count {
                let n = self.next_id();
                self = self.with_contact(&format!("Contact {}", n), &format!("{:010}", n));
            }
            self
        }
    }

    impl StoreFixture<Task> {
        pub fn with_task(mut self, description: &str, priority: &str) -> Self {
            let task =
                Task::create(self.next_id(), TaskDraft::new(description, priority)).unwrap();
            self.store.records.push(task);
            self
        }

        pub fn with_completed_task(mut self, description: &str, priority: &str) -> Self {
            let mut task =
                Task::create(self.next_id(), TaskDraft::new(description, priority)).unwrap();
            task.update(&TaskPatch {
                completed: Some(true),
                ..Default::default()
            })
            .unwrap();
            self.store.records.push(task);
            self
        }
    }
}
