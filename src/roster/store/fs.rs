use super::{decode, encode, DataStore};
use crate::error::Result;
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

/// JSON flat-file store for one record kind.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn write_atomic(&self, content: &[u8]) -> Result<()> {
        self.ensure_parent()?;
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("roster");
        let tmp = self
            .path
            .with_file_name(format!(".{}-{}.tmp", stem, Uuid::new_v4()));

        fs::write(&tmp, content)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl<R: Record> DataStore<R> for FileStore {
    fn load(&mut self) -> Result<Vec<R>> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "creating empty {} file", R::KIND.to_lowercase());
            self.write_atomic(b"[]")?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        match decode::<R>(&content) {
            Some(records) => {
                let records = records?;
                info!(path = %self.path.display(), count = records.len(), "loaded");
                Ok(records)
            }
            None => {
                warn!(path = %self.path.display(), "discarding unreadable file");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, records: &[R]) -> Result<()> {
        let content = encode(records)?;
        self.write_atomic(&content)?;
        info!(path = %self.path.display(), count = records.len(), "saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;
    use crate::error::ErrorKind;
    use crate::model::{Contact, ContactDraft, Task, TaskDraft};
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_created_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("contacts.json");
        let mut store = FileStore::new(&path);

        let records: Vec<Contact> = store.load().unwrap();
        assert!(records.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn corrupt_file_loads_empty_and_is_left_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "[{oops").unwrap();

        let mut store = FileStore::new(&path);
        let records: Vec<Task> = store.load().unwrap();
        assert!(records.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[{oops");
    }

    #[test]
    fn invalid_row_aborts_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(
            &path,
            r#"[{"task_id": 1, "description": "x", "is_completed": false, "priority_level": "Urgent"}]"#,
        )
        .unwrap();

        let mut store = FileStore::new(&path);
        let err = DataStore::<Task>::load(&mut store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        let mut store = FileStore::new(&path);

        let mut book: Book<Contact> = Book::new();
        book.add(ContactDraft::new("Ann", "1111111111").with_email("ann@mail.com"))
            .unwrap();
        book.add(ContactDraft::new("Bob", "2222222222")).unwrap();
        book.add(ContactDraft::new("Cy", "3333333333")).unwrap();
        book.delete_by_id(2).unwrap();
        store.save(book.records()).unwrap();

        let loaded: Vec<Contact> = store.load().unwrap();
        assert_eq!(loaded, book.records());
        assert_eq!(loaded[1].id(), 2);
        assert_eq!(loaded[1].name(), "Cy");
    }

    #[test]
    fn save_writes_stored_field_names_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = FileStore::new(&path);

        let task = Task::create(1, TaskDraft::new("Write docs", "medium")).unwrap();
        store.save(&[task]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"task_id\": 1"));
        assert!(text.contains("\"is_completed\": false"));
        assert!(text.contains("\"priority_level\": \"Medium\""));

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn load_keeps_stored_ids_for_the_book_to_renumber() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(
            &path,
            r#"[
     {"contact_id": 4, "name": "Ann", "phone": "1111111111", "email": null},
     {"contact_id": 9, "name": "Bob", "phone": "2222222222", "email": "b@x.io"}
]"#,
        )
        .unwrap();

        let mut store = FileStore::new(&path);
        let loaded: Vec<Contact> = store.load().unwrap();
        assert_eq!(loaded[0].id(), 4);

        let book = Book::from_records(loaded);
        let ids: Vec<_> = book.records().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(book.next_id(), 3);
    }
}
