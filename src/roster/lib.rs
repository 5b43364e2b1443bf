//! # Roster Architecture
//!
//! Roster is a **validated record store**: an ordered, in-memory collection of
//! records that keeps its ids contiguous, rejects duplicate phone numbers,
//! and persists to a plain JSON file between runs. Two record kinds share the
//! engine: contacts and tasks. They differ only in fields.
//!
//! The crate is a library first. The `roster` binary is one thin client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, sets the exit code     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads a Book from a DataStore, saves on request          │
//! │  - Turns raw selector text into ids or names                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation each, returns CmdResult                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Book (book.rs) over Records (model/) and validators        │
//! │  - Owns the collection and the id counter                   │
//! │  - Enforces uniqueness, resolves names, reassigns ids       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (JSON file), InMemoryStore (tests)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ids Are Positions
//!
//! A record's id is its 1-based position in the collection. Deleting a
//! record renumbers everything after it, so an id is only meaningful until
//! the next structural change. Front ends should re-list after a delete.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values. It
//! never writes to stdout or stderr and never exits the process. Diagnostics
//! go through `tracing`; installing a subscriber is the binary's job
//! (see [`logging`]).
//!
//! ## Testing Strategy
//!
//! 1. **Book and validators**: the invariants (contiguous ids, unique phones,
//!    all-or-nothing updates, ambiguous names) are tested where they live.
//! 2. **Commands**: messages and result shapes, against in-memory books.
//! 3. **API**: dispatch and selector parsing, against `InMemoryStore`.
//! 4. **CLI** (`tests/`): the binary end to end, in a temporary data dir.
//!
//! ## Module Overview

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;
pub mod validate;
