//! Task Form Validation
//!
//! Pure validation engine for the task form. A candidate [`TaskRecord`] is
//! checked against a [`Schema`] of per-field rules and the outcome is returned
//! as data: either the record unchanged or one message per failing field.
//!
//! ```rust,ignore
//! use task_form_validation::{validate, today_local, TaskRecord};
//!
//! let record: TaskRecord = serde_json::from_str(input)?;
//! match validate(record, today_local()) {
//!     ValidationResult::Valid(task) => save(task),
//!     ValidationResult::Invalid(errors) => render(errors),
//! }
//! ```
//!
//! "Today" is always an argument. The engine never reads the clock itself.

pub mod date;
pub mod messages;
pub mod record;
pub mod result;
pub mod rules;
pub mod schema;
pub mod validator;

pub use date::{is_not_past, parse_due_date, today_local, CalendarPolicy};
pub use record::{Field, FieldValue, Record, TaskRecord, PRIORITIES};
pub use result::{ErrorKind, ErrorMap, FieldError, ValidationResult};
pub use rules::Rule;
pub use schema::{FieldSchema, Schema, SchemaError, SchemaSettings};
pub use validator::{task_schema, validate, validate_field};
