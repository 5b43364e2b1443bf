//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence boundary for a
//! [`Book`](crate::book::Book). A store hands back a full collection on
//! `load` and overwrites with a full collection on `save`; there is no
//! per-record I/O.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per record kind
//!   - a missing file is created holding `[]`
//!   - a file that is not JSON is discarded (logged, not surfaced)
//!   - valid JSON that is not an array of well-formed, valid rows aborts
//!     the load
//!   - writes go to a temporary sibling and are renamed into place
//!
//! - [`memory::InMemoryStore`]: keeps the collection in a `Vec`, for tests
//!
//! ## Storage Format
//!
//! ```text
//! $ROSTER_HOME/
//! ├── config.json      # RosterConfig
//! ├── contacts.json    # [{contact_id, name, phone, email}, ...]
//! └── tasks.json       # [{task_id, description, is_completed, priority_level}, ...]
//! ```
//!
//! Rows are written as the record's `Row` type and read back through
//! [`Record::from_row`], so a hand-edited file is re-validated on the way in.

use crate::error::Result;
use crate::model::Record;
use serde::Serialize;

pub mod fs;
pub mod memory;

/// Abstract interface for loading and saving one record collection.
pub trait DataStore<R: Record> {
    /// Reads the whole collection. Ids are returned as stored; the book
    /// renumbers them.
    fn load(&mut self) -> Result<Vec<R>>;

    /// Replaces the stored collection. Callers pass records that are
    /// already contiguously numbered, which `Book::records` always is.
    fn save(&mut self, records: &[R]) -> Result<()>;
}

/// Five-space indent, matching the files the applications have always
/// written.
const INDENT: &[u8] = b"     ";

/// Serializes `records` as a pretty JSON array of rows.
pub fn encode<R: Record>(records: &[R]) -> Result<Vec<u8>> {
    let rows: Vec<R::Row> = records.iter().map(Record::to_row).collect();
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    rows.serialize(&mut ser)?;
    Ok(buf)
}

/// Parses a JSON array of rows.
///
/// Returns `None` only when the text is not JSON. Once it parses, a
/// non-array document or a row of the wrong shape is a `Serialization`
/// error, and rows are rebuilt through the validating constructor with the
/// first failure returned.
pub fn decode<R: Record>(content: &str) -> Option<Result<Vec<R>>> {
    let value: serde_json::Value = serde_json::from_str(content).ok()?;
    Some(rows_from_value(value))
}

fn rows_from_value<R: Record>(value: serde_json::Value) -> Result<Vec<R>> {
    let rows: Vec<R::Row> = serde_json::from_value(value)?;
    rows.into_iter().map(R::from_row).collect()
}
