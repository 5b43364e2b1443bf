use crate::model::{RecordId, SearchField};
use crate::validate::ValidationError;
use thiserror::Error;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Id(RecordId),
    Name(String),
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "ID {}", id),
            Lookup::Name(name) => write!(f, "Name {}", name),
        }
    }
}

/// Coarse classification of a [`RosterError`], for callers that branch on
/// the failure family rather than on the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Duplicate,
    NoMatch,
    Io,
    Serialization,
    Config,
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{kind} with {lookup} not found.")]
    NotFound { kind: &'static str, lookup: Lookup },

    #[error("Phone number: {phone} already exists.")]
    Duplicate { phone: String },

    #[error("Not found any {field} match with {query}.")]
    NoMatch { field: SearchField, query: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::Validation(_) => ErrorKind::Validation,
            RosterError::NotFound { .. } => ErrorKind::NotFound,
            RosterError::Duplicate { .. } => ErrorKind::Duplicate,
            RosterError::NoMatch { .. } => ErrorKind::NoMatch,
            RosterError::Io(_) => ErrorKind::Io,
            RosterError::Serialization(_) => ErrorKind::Serialization,
            RosterError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
