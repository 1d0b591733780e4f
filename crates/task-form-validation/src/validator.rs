// File: src/validator.rs
// Purpose: Entry points that validate a task record against the default schema

use crate::record::{Field, TaskRecord};
use crate::result::{FieldError, ValidationResult};
use crate::schema::{Schema, SchemaSettings};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

static TASK_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::task(&SchemaSettings::default()).expect("default task schema settings are valid")
});

/// The task schema built from default settings
pub fn task_schema() -> &'static Schema {
    &TASK_SCHEMA
}

/// Validate a task record against the default schema
///
/// `today` is the caller's current local date. Passing the same record and
/// date always yields the same result.
pub fn validate(record: TaskRecord, today: NaiveDate) -> ValidationResult {
    TASK_SCHEMA.validate(record, today)
}

/// Validate a single field of a task record against the default schema
pub fn validate_field(record: &TaskRecord, field: Field, today: NaiveDate) -> Option<FieldError> {
    TASK_SCHEMA.check_field(record, field.as_str(), today)
}
