//! Field validation for roster records.
//!
//! Every function here is pure: it takes a raw value, returns the normalized
//! value on success, or the first rule it breaks. Records run these at
//! construction and on update; the CLI runs them directly so it can reject
//! bad input before touching the store.
//!
//! | Field       | Rules                                                         |
//! |-------------|---------------------------------------------------------------|
//! | phone       | non-empty, digits only, exactly 10 characters                 |
//! | email       | optional; contains `@`, last `.` not before the first `@`      |
//! | id          | an integer, greater than zero                                 |
//! | name        | non-empty after trimming                                      |
//! | description | non-empty after trimming                                      |
//! | priority    | `High`, `Medium` or `Low`, case-insensitive                    |

use crate::model::{Priority, RecordId};

pub const PHONE_LENGTH: usize = 10;

/// Error type for field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Phone number contains a non-digit character
    NotNumeric,
    /// Phone number is not exactly [`PHONE_LENGTH`] digits
    WrongLength,
    /// Email has no `@`
    MissingAt,
    /// Email has no `.` at or after the `@`
    MissingOrMisplacedDot,
    /// Id input is not an integer
    NotInteger,
    /// Id is zero or negative
    NotPositive,
    /// A required field is empty (blank after trimming, for text fields)
    Empty(&'static str),
    /// Priority is not one of High, Medium, Low
    InvalidPriority(String),
    /// A menu word (action, status) outside its closed set
    InvalidChoice {
        what: &'static str,
        choices: &'static str,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotNumeric => {
                write!(f, "Phone number must be a series of numbers.")
            }
            ValidationError::WrongLength => write!(
                f,
                "Phone number length must be {} digits.",
                PHONE_LENGTH
            ),
            ValidationError::MissingAt => {
                write!(f, "Invalid email: Missing '@' (at) character.")
            }
            ValidationError::MissingOrMisplacedDot => write!(
                f,
                "Invalid email: Missing or misplaced '.' (dot) after '@'."
            ),
            ValidationError::NotInteger => write!(f, "ID must be an integer."),
            ValidationError::NotPositive => write!(f, "ID must be greater than zero."),
            ValidationError::Empty(field) => write!(f, "{} cannot be empty.", field),
            ValidationError::InvalidPriority(raw) => write!(
                f,
                "Priority must be High, Medium, or Low (got '{}').",
                raw
            ),
            ValidationError::InvalidChoice { what, choices } => {
                write!(f, "Invalid {}. Please choose from ({}).", what, choices)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a phone number. The value is returned as given, without
/// normalization.
///
/// # Examples
/// ```
/// use roster::validate::{validate_phone, ValidationError};
///
/// assert!(validate_phone("5551234567").is_ok());
/// assert_eq!(validate_phone(""), Err(ValidationError::Empty("Phone number")));
/// assert_eq!(validate_phone("555-123-45"), Err(ValidationError::NotNumeric));
/// assert_eq!(validate_phone("555123"), Err(ValidationError::WrongLength));
/// ```
pub fn validate_phone(phone: &str) -> Result<&str, ValidationError> {
    if phone.is_empty() {
        return Err(ValidationError::Empty("Phone number"));
    }
    if !is_numeric(phone) {
        return Err(ValidationError::NotNumeric);
    }
    if phone.chars().count() != PHONE_LENGTH {
        return Err(ValidationError::WrongLength);
    }
    Ok(phone)
}

/// Validates an optional email. `None` means "not provided" and is valid.
///
/// Only two things are checked: there is an `@`, and the last `.` in the
/// whole string sits after the first `@`.
pub fn validate_email(email: Option<&str>) -> Result<Option<&str>, ValidationError> {
    let Some(email) = email else {
        return Ok(None);
    };

    let at_index = email.find('@').ok_or(ValidationError::MissingAt)?;
    match email.rfind('.') {
        Some(dot_index) if dot_index >= at_index => Ok(Some(email)),
        _ => Err(ValidationError::MissingOrMisplacedDot),
    }
}

/// Parses and validates a record id typed by a user.
pub fn validate_id(raw: &str) -> Result<RecordId, ValidationError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotInteger)?;
    check_id(value)
}

/// Applies the positivity rule to an id that is already an integer.
pub fn check_id(value: i64) -> Result<RecordId, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NotPositive);
    }
    Ok(value as RecordId)
}

/// [`check_id`] for an id that is already a [`RecordId`]. Values past
/// `i64::MAX` cannot be stored and are rejected.
pub fn check_record_id(id: RecordId) -> Result<RecordId, ValidationError> {
    let value = i64::try_from(id).map_err(|_| ValidationError::NotPositive)?;
    check_id(value)
}

pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    non_blank(name, "Name")
}

pub fn validate_description(description: &str) -> Result<&str, ValidationError> {
    non_blank(description, "Description")
}

/// Validates a priority level, accepting any casing ("high", "HIGH", "hIgH").
pub fn validate_priority(raw: &str) -> Result<Priority, ValidationError> {
    match capitalize(raw.trim()).as_str() {
        "High" => Ok(Priority::High),
        "Medium" => Ok(Priority::Medium),
        "Low" => Ok(Priority::Low),
        _ => Err(ValidationError::InvalidPriority(raw.to_string())),
    }
}

/// True when `s` is non-empty and made only of ASCII digits.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn non_blank<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(trimmed)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
