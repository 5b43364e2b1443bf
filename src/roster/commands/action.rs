//! Menu words for a prompt-driven front end.
//!
//! The input is trimmed and lowercased, must be purely alphabetic, and must
//! belong to the closed set of the menu it answers.

use crate::query::StatusFilter;
use crate::validate::ValidationError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    View,
    Add,
    Search,
    Delete,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    View,
    Add,
    Complete,
    Delete,
    Exit,
}

impl FromStr for ContactAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(ContactAction::View),
            "add" => Ok(ContactAction::Add),
            "search" => Ok(ContactAction::Search),
            "delete" => Ok(ContactAction::Delete),
            "exit" => Ok(ContactAction::Exit),
            _ => Err(ValidationError::InvalidChoice {
                what: "action",
                choices: "View/Add/Search/Delete/Exit",
            }),
        }
    }
}

impl FromStr for TaskAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(TaskAction::View),
            "add" => Ok(TaskAction::Add),
            "complete" => Ok(TaskAction::Complete),
            "delete" => Ok(TaskAction::Delete),
            "exit" => Ok(TaskAction::Exit),
            _ => Err(ValidationError::InvalidChoice {
                what: "action",
                choices: "View/Add/Complete/Delete/Exit",
            }),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "completed" => Ok(StatusFilter::Completed),
            "incomplete" => Ok(StatusFilter::Incomplete),
            _ => Err(ValidationError::InvalidChoice {
                what: "status",
                choices: "All/Completed/Incomplete",
            }),
        }
    }
}

/// Normalizes a menu word and parses it into `A`.
///
/// ```
/// use roster::commands::action::{parse_action, TaskAction};
///
/// assert_eq!(parse_action::<TaskAction>("  Complete "), Ok(TaskAction::Complete));
/// assert!(parse_action::<TaskAction>("search").is_err());
/// ```
pub fn parse_action<A>(raw: &str) -> Result<A, ValidationError>
where
    A: FromStr<Err = ValidationError>,
{
    let word = raw.trim().to_lowercase();
    if word.is_empty() {
        return Err(ValidationError::Empty("Action"));
    }
    // Every menu word is alphabetic, so anything else falls through to the
    // set's own InvalidChoice error.
    word.parse()
}
