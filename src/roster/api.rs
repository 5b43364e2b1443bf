//! # API Facade
//!
//! [`RosterApi`] binds one [`Book`] to the [`DataStore`] it was loaded from
//! and is the single entry point for front ends. It:
//!
//! - **Loads** the collection once, on [`RosterApi::open`]
//! - **Normalizes inputs**: raw selector text becomes a [`Selector`], raw id
//!   text is validated
//! - **Dispatches** to the command modules and returns their `CmdResult`
//! - **Saves** only when asked, through [`RosterApi::save`]
//!
//! It does no printing and never exits the process. A failed save is
//! returned to the caller; the in-memory book stays authoritative and the
//! caller may retry.
//!
//! `RosterApi<R, S>` is generic over the record kind and the store:
//! production uses `FileStore`, tests use `InMemoryStore`. Operations that
//! only make sense for one kind (contact updates, task completion) live in
//! kind-specific `impl` blocks.

use crate::book::{Book, DuplicatePolicy};
use crate::commands::{self, CmdResult, RosterPaths, Selector};
use crate::error::Result;
use crate::model::{Contact, ContactPatch, Record, SearchField, Task};
use crate::query::StatusFilter;
use crate::store::DataStore;
use crate::validate::{validate_id, validate_name};
use tracing::{debug, warn};

pub struct RosterApi<R: Record, S: DataStore<R>> {
    book: Book<R>,
    store: S,
}

impl<R: Record, S: DataStore<R>> RosterApi<R, S> {
    pub fn open(mut store: S, policy: DuplicatePolicy) -> Result<Self> {
        let records = store.load()?;
        let book = Book::from_records(records).with_policy(policy);
        debug!(kind = R::KIND, count = book.len(), "opened");
        Ok(Self { book, store })
    }

    pub fn book(&self) -> &Book<R> {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Renumbers and writes the whole collection.
    pub fn save(&mut self) -> Result<()> {
        self.book.reassign();
        if let Err(e) = self.store.save(self.book.records()) {
            warn!(kind = R::KIND, error = %e, "save failed");
            return Err(e);
        }
        Ok(())
    }

    pub fn add(&mut self, draft: R::Draft) -> Result<CmdResult<R>> {
        commands::add::run(&mut self.book, draft)
    }

    pub fn show(&self, selector: &str) -> Result<CmdResult<R>> {
        let selector = parse_selector(selector)?;
        commands::show::run(&self.book, &selector)
    }

    pub fn delete(&mut self, selector: &str) -> Result<CmdResult<R>> {
        let selector = parse_selector(selector)?;
        commands::delete::run(&mut self.book, &selector)
    }

    pub fn search(&self, query: &str, field: SearchField) -> Result<CmdResult<R>> {
        commands::search::run(&self.book, query, field)
    }

    pub fn list(&self, status: StatusFilter) -> Result<CmdResult<R>> {
        commands::list::run(&self.book, status)
    }
}

impl<S: DataStore<Contact>> RosterApi<Contact, S> {
    pub fn update(&mut self, selector: &str, patch: ContactPatch) -> Result<CmdResult<Contact>> {
        let selector = parse_selector(selector)?;
        commands::update::run(&mut self.book, &selector, patch)
    }
}

impl<S: DataStore<Task>> RosterApi<Task, S> {
    pub fn complete(&mut self, id: &str) -> Result<CmdResult<Task>> {
        let id = validate_id(id)?;
        commands::complete::run(&mut self.book, id)
    }

    pub fn purge_completed(&mut self) -> Result<CmdResult<Task>> {
        commands::purge::run(&mut self.book)
    }
}

pub fn config<R>(paths: &RosterPaths, action: ConfigAction) -> Result<CmdResult<R>> {
    commands::config::run(paths, action)
}

pub fn init<R>(paths: &RosterPaths) -> Result<CmdResult<R>> {
    commands::init::run(paths)
}

/// Anything that parses as an integer is an id (and must be positive);
/// everything else is a name.
pub fn parse_selector(raw: &str) -> Result<Selector> {
    let raw = raw.trim();
    if raw.parse::<i64>().is_ok() {
        return Ok(Selector::Id(validate_id(raw)?));
    }
    Ok(Selector::Name(validate_name(raw)?.to_string()))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel};
