//! # CLI Layer
//!
//! One possible client for roster. This is the only place that:
//! - parses arguments (`setup`)
//! - knows about stdout and stderr (`print`)
//! - decides when a mutation is written back (`commands`)
//!
//! Handlers call the API facade and print the returned `CmdResult`. They
//! contain no record logic.

mod commands;
mod print;
pub mod setup;

pub use commands::run;
