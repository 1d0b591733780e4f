// File: src/result.rs
// Purpose: Validation outcome and the per-field error map

use crate::record::TaskRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which kind of rule a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Required,
    TooShort,
    TooLong,
    FormatMismatch,
    InvalidEnum,
    PastDate,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Required => "required",
            ErrorKind::TooShort => "tooShort",
            ErrorKind::TooLong => "tooLong",
            ErrorKind::FormatMismatch => "formatMismatch",
            ErrorKind::InvalidEnum => "invalidEnum",
            ErrorKind::PastDate => "pastDate",
        };
        f.write_str(name)
    }
}

/// First rule a field violated, with the message to show next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Field name to its single error
///
/// A field is either in the map or individually valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, FieldError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field's error. A field keeps its first error.
    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.0.entry(field.into()).or_insert(error);
    }

    /// Replace or clear a single field's entry
    pub fn set(&mut self, field: &str, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.0.insert(field.to_string(), error);
            }
            None => {
                self.0.remove(field);
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    /// Message for a field, exactly as it should be displayed
    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|e| e.message.as_str())
    }

    pub fn kind(&self, field: &str) -> Option<ErrorKind> {
        self.0.get(field).map(|e| e.kind)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Outcome of validating a task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "camelCase")]
pub enum ValidationResult {
    Valid(TaskRecord),
    Invalid(ErrorMap),
}

impl ValidationResult {
    /// Build the outcome from a record and whatever errors were collected
    pub fn from_errors(record: TaskRecord, errors: ErrorMap) -> Self {
        if errors.is_empty() {
            ValidationResult::Valid(record)
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }

    /// First error for a specific field, if any
    pub fn get_error(&self, field: &str) -> Option<&FieldError> {
        self.errors().and_then(|errors| errors.get(field))
    }

    /// Convert into a `Result`, for callers that prefer `?`
    pub fn into_result(self) -> Result<TaskRecord, ErrorMap> {
        match self {
            ValidationResult::Valid(record) => Ok(record),
            ValidationResult::Invalid(errors) => Err(errors),
        }
    }
}
