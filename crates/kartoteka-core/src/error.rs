use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The contact field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    MiddleName,
    LastName,
    BirthDate,
    Email,
    Phone,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "first name",
            Field::MiddleName => "middle name",
            Field::LastName => "last name",
            Field::BirthDate => "birth date",
            Field::Email => "email",
            Field::Phone => "phone number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    #[error("does not match the expected format")]
    Format,
    #[error("not a real calendar date")]
    Range,
    #[error("lies in the future")]
    FutureDate,
}

/// A single field failed its rule; the record it belongs to is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: Field, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("index {index} out of range for {len} contacts")]
    IndexOutOfRange { index: usize, len: usize },
}
