//! # The Record Book
//!
//! [`Book`] owns an ordered collection of records and keeps four invariants
//! true after every call:
//!
//! 1. Ids are exactly `1..=len`, in collection order.
//! 2. No two records share a unique key (a contact's phone).
//! 3. Every record passed validation on the way in.
//! 4. `next_id == len + 1`.
//!
//! Every mutating method either succeeds completely or returns an error and
//! leaves the book untouched. There are no partial writes to roll back.
//!
//! ## Name-based operations
//!
//! Names are not unique. `update_by_name` and `delete_by_name` only act when
//! the name resolves to exactly one record; with several candidates they
//! return [`NameMatch::Ambiguous`] and the caller re-dispatches by id.
//!
//! ## Id reassignment
//!
//! Removal renumbers the survivors through [`reassign`], an explicit pass run
//! only after structural changes (delete, purge, load, save). Ids are handles
//! into the current listing, not keys to hold on to.

use crate::error::{Lookup, Result, RosterError};
use crate::model::{Record, RecordId, SearchField, Task, TaskPatch};
use crate::query::{StatusFilter, View};
use crate::validate::{is_numeric, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Whether a record's own unique key counts as a collision when it is
/// updated.
///
/// `IncludeSelf` scans the whole collection, so re-submitting a contact's
/// current phone is reported as a duplicate. `ExcludeSelf` skips the record
/// being updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    #[default]
    IncludeSelf,
    ExcludeSelf,
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "include-self" => Ok(DuplicatePolicy::IncludeSelf),
            "exclude-self" => Ok(DuplicatePolicy::ExcludeSelf),
            other => Err(format!(
                "Invalid duplicate policy: {} (expected include-self or exclude-self)",
                other
            )),
        }
    }
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicatePolicy::IncludeSelf => write!(f, "include-self"),
            DuplicatePolicy::ExcludeSelf => write!(f, "exclude-self"),
        }
    }
}

/// Outcome of a name-based mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch<R> {
    /// Exactly one record matched and the operation was applied to it.
    Unique(R),
    /// Several records matched; nothing was changed.
    Ambiguous(Vec<R>),
}

/// A name resolved to a single id, or the records it could mean.
enum Resolved<R> {
    One(RecordId),
    Many(Vec<R>),
}

/// Result of marking a task complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Marked(Task),
    AlreadyCompleted(Task),
}

/// Renumbers `records` to `1..=len` in place and returns the next free id.
pub fn reassign<R: Record>(records: &mut [R]) -> RecordId {
    let mut next = 1;
    for record in records.iter_mut() {
        record.set_id(next);
        next += 1;
    }
    next
}

#[derive(Debug, Clone)]
pub struct Book<R> {
    records: Vec<R>,
    next_id: RecordId,
    policy: DuplicatePolicy,
}

impl<R: Record> Default for Book<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Book<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            policy: DuplicatePolicy::default(),
        }
    }

    /// Builds a book from already-validated records (e.g. freshly loaded),
    /// renumbering them so the id invariant holds.
    pub fn from_records(mut records: Vec<R>) -> Self {
        let next_id = reassign(&mut records);
        Self {
            records,
            next_id,
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    pub fn add(&mut self, draft: R::Draft) -> Result<&R> {
        if let Some(key) = R::draft_key(&draft) {
            self.check_duplicate(key, None)?;
        }
        let record = R::create(self.next_id, draft)?;
        debug!(kind = R::KIND, id = record.id(), "added record");

        self.records.push(record);
        self.next_id += 1;
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Case-insensitive exact match on the trimmed name.
    pub fn get_by_name(&self, name: &str) -> Vec<&R> {
        let wanted = name.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| r.label().to_lowercase() == wanted)
            .collect()
    }

    pub fn update_by_id(&mut self, id: RecordId, patch: &R::Patch) -> Result<&R> {
        let pos = self.position(id)?;
        if let Some(key) = R::patch_key(patch) {
            let skip = match self.policy {
                DuplicatePolicy::IncludeSelf => None,
                DuplicatePolicy::ExcludeSelf => Some(id),
            };
            self.check_duplicate(key, skip)?;
        }

        let record = &mut self.records[pos];
        record.update(patch)?;
        debug!(kind = R::KIND, id, "updated record");
        Ok(&self.records[pos])
    }

    pub fn update_by_name(&mut self, name: &str, patch: &R::Patch) -> Result<NameMatch<R>> {
        match self.resolve_name(name)? {
            Resolved::One(id) => {
                let updated = self.update_by_id(id, patch)?.clone();
                Ok(NameMatch::Unique(updated))
            }
            Resolved::Many(candidates) => Ok(NameMatch::Ambiguous(candidates)),
        }
    }

    /// Removes the record and renumbers the rest. The returned record keeps
    /// the id it had before removal.
    pub fn delete_by_id(&mut self, id: RecordId) -> Result<R> {
        let pos = self.position(id)?;
        let removed = self.records.remove(pos);
        self.reassign();
        debug!(kind = R::KIND, id, remaining = self.len(), "deleted record");
        Ok(removed)
    }

    pub fn delete_by_name(&mut self, name: &str) -> Result<NameMatch<R>> {
        match self.resolve_name(name)? {
            Resolved::One(id) => Ok(NameMatch::Unique(self.delete_by_id(id)?)),
            Resolved::Many(candidates) => Ok(NameMatch::Ambiguous(candidates)),
        }
    }

    /// Substring search. Phone queries must be all digits.
    pub fn search(&self, query: &str, field: SearchField) -> Result<Vec<&R>> {
        let needle = match field {
            SearchField::Name => query.to_lowercase(),
            SearchField::Phone => {
                if !is_numeric(query) {
                    return Err(ValidationError::NotNumeric.into());
                }
                query.to_string()
            }
        };

        let matches: Vec<&R> = self
            .records
            .iter()
            .filter(|r| match (field, r.field(field)) {
                (SearchField::Name, Some(value)) => value.to_lowercase().contains(&needle),
                (SearchField::Phone, Some(value)) => value.contains(&needle),
                (_, None) => false,
            })
            .collect();

        if matches.is_empty() {
            return Err(RosterError::NoMatch {
                field,
                query: query.to_string(),
            });
        }
        Ok(matches)
    }

    pub fn view(&self, status: StatusFilter) -> View<'_, R> {
        View::by_status(&self.records, status)
    }

    pub fn reassign(&mut self) {
        self.next_id = reassign(&mut self.records);
    }

    fn position(&self, id: RecordId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(RosterError::NotFound {
                kind: R::KIND,
                lookup: Lookup::Id(id),
            })
    }

    fn resolve_name(&self, name: &str) -> Result<Resolved<R>> {
        let found = self.get_by_name(name);
        match found.as_slice() {
            [] => Err(RosterError::NotFound {
                kind: R::KIND,
                lookup: Lookup::Name(name.to_string()),
            }),
            [only] => Ok(Resolved::One(only.id())),
            many => {
                debug!(kind = R::KIND, label = name, candidates = many.len(), "ambiguous name");
                Ok(Resolved::Many(many.iter().map(|r| (*r).clone()).collect()))
            }
        }
    }

    fn check_duplicate(&self, key: &str, skip: Option<RecordId>) -> Result<()> {
        let taken = self
            .records
            .iter()
            .filter(|r| Some(r.id()) != skip)
            .any(|r| r.unique_key() == Some(key));
        if taken {
            return Err(RosterError::Duplicate {
                phone: key.to_string(),
            });
        }
        Ok(())
    }
}

impl Book<Task> {
    pub fn complete(&mut self, id: RecordId) -> Result<Completion> {
        let pos = self.position(id)?;
        let task = &mut self.records[pos];
        if task.completed() {
            return Ok(Completion::AlreadyCompleted(task.clone()));
        }
        task.update(&TaskPatch {
            completed: Some(true),
            ..Default::default()
        })?;
        debug!(id, "completed task");
        Ok(Completion::Marked(task.clone()))
    }

    /// Drops every completed task, renumbering once. Returns what was removed.
    pub fn purge_completed(&mut self) -> Vec<Task> {
        let (done, open): (Vec<Task>, Vec<Task>) =
            self.records.drain(..).partition(|t| t.completed());
        self.records = open;
        if !done.is_empty() {
            self.reassign();
            debug!(removed = done.len(), "purged completed tasks");
        }
        done
    }
}
