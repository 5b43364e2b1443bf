//! # Records
//!
//! A record is one validated entity held by a [`Book`](crate::book::Book).
//! Two kinds exist, [`Contact`] and [`Task`]; they share the mechanism and
//! differ only in fields, so the book is written once against the [`Record`]
//! trait.
//!
//! ## Lifecycle
//!
//! - **Created** only through [`Record::create`], which validates every field.
//!   There is no default-then-populate path.
//! - **Mutated** only through [`Record::update`] with a patch whose `None`
//!   fields mean "leave unchanged". A patch is all-or-nothing.
//! - **Destroyed** only by the book's delete paths, which renumber survivors.
//!
//! ## Identity
//!
//! The `id` is a positional handle, not a stable key: after any removal the
//! book renumbers the remaining records `1..=count` in their current order.
//!
//! ## Persistence shape
//!
//! Each record has a flat `Row` type with the on-disk field names. Rows are
//! what `serde` reads and writes; turning a row back into a record goes
//! through [`Record::from_row`], which re-runs validation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

pub mod contact;
pub mod task;

pub use contact::{Contact, ContactDraft, ContactPatch, ContactRow};
pub use task::{Priority, Task, TaskDraft, TaskPatch, TaskRow};

use crate::error::Result;

/// Positional record identity. Always `>= 1` once inside a book.
pub type RecordId = u64;

/// Which field a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Phone,
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Name => write!(f, "name"),
            SearchField::Phone => write!(f, "phone number"),
        }
    }
}

pub trait Record: Clone + fmt::Debug + fmt::Display {
    /// Validated input for a new record.
    type Draft;
    /// Partial update; `None` fields are left untouched.
    type Patch;
    /// On-disk representation.
    type Row: Serialize + DeserializeOwned;

    /// Human label for messages ("Contact", "Task").
    const KIND: &'static str;
    const PLURAL: &'static str;
    /// What the whole collection is called ("contact book").
    const COLLECTION: &'static str;

    fn create(id: RecordId, draft: Self::Draft) -> Result<Self>;

    /// Applies a patch atomically: either every supplied field passes
    /// validation and is written, or nothing changes.
    fn update(&mut self, patch: &Self::Patch) -> Result<()>;

    fn id(&self) -> RecordId;

    /// Only the book calls this, from the reassignment pass.
    fn set_id(&mut self, id: RecordId);

    /// The text matched by name lookups and name searches.
    fn label(&self) -> &str;

    /// Short description used in command messages.
    fn summary(&self) -> String {
        self.label().to_string()
    }

    /// The value that must be unique across the book, if this kind has one.
    fn unique_key(&self) -> Option<&str> {
        None
    }

    fn draft_key(_draft: &Self::Draft) -> Option<&str> {
        None
    }

    fn patch_key(_patch: &Self::Patch) -> Option<&str> {
        None
    }

    /// Completion flag, for kinds that track one.
    fn is_completed(&self) -> Option<bool> {
        None
    }

    fn to_row(&self) -> Self::Row;

    fn from_row(row: Self::Row) -> Result<Self>;

    /// The searchable text for `field`, or `None` if this kind lacks it.
    fn field(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Name => Some(self.label()),
            SearchField::Phone => self.unique_key(),
        }
    }
}
