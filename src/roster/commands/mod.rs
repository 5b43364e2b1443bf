//! # Commands
//!
//! One module per user-facing operation. A command takes a [`Book`] (or the
//! data paths, for `config` and `init`), performs one operation and returns
//! a [`CmdResult`]: the records it touched, the records it wants shown, and
//! leveled messages. Commands never print.
//!
//! Failures that leave the book untouched come back as `Err`; outcomes that
//! are not failures but still need the user's attention (an ambiguous name,
//! an already completed task) come back as `Ok` with a warning message.
//!
//! [`Book`]: crate::book::Book

use crate::config::RosterConfig;
use crate::model::RecordId;
use std::fmt;
use std::path::PathBuf;

pub mod action;
pub mod add;
pub mod complete;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod purge;
pub mod search;
pub mod show;
pub mod update;

#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub data_dir: PathBuf,
}

impl RosterPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

/// How the user picked a record: by positional id or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(RecordId),
    Name(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "ID {}", id),
            Selector::Name(name) => write!(f, "Name {}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug)]
pub struct CmdResult<R> {
    /// Records created, changed or removed by the command.
    pub affected: Vec<R>,
    /// Records the caller should display.
    pub listed: Vec<R>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl<R> Default for CmdResult<R> {
    fn default() -> Self {
        Self {
            affected: Vec::new(),
            listed: Vec::new(),
            config: None,
            messages: Vec::new(),
        }
    }
}

impl<R> CmdResult<R> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, records: Vec<R>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<R>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when something in the book changed and should be saved.
    pub fn is_mutation(&self) -> bool {
        !self.affected.is_empty()
    }
}
