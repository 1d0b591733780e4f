// Task Form - headless form state around the task validation engine
// Holds field values and visible errors, decides when to re-validate, and
// resets after a successful submission.

pub mod config;
pub mod event;
pub mod form;
pub mod mode;

pub use config::{Config, FormConfig};
pub use event::{FormEvent, InputValue};
pub use form::{default_record, TaskForm};
pub use mode::{Mode, RevalidateMode};

// Re-export the engine so callers need a single dependency
pub use task_form_validation as validation;
pub use task_form_validation::{ErrorMap, Field, TaskRecord, ValidationResult};
