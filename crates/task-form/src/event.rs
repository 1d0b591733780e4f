// File: src/event.rs
// Purpose: Input events a UI layer feeds into the form

use serde::{Deserialize, Serialize};
use task_form_validation::Field;

/// Raw value captured from an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Bool(bool),
    Text(String),
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Text(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::Text(value)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Bool(value)
    }
}

/// Something that happened to the form
///
/// ```json
/// {"event": "change", "field": "name", "value": "Faire les courses"}
/// {"event": "blur", "field": "name"}
/// {"event": "submit"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum FormEvent {
    /// A field's value changed. A `null` value unsets the field.
    Change {
        field: Field,
        #[serde(default)]
        value: Option<InputValue>,
    },
    Blur {
        field: Field,
    },
    Submit,
    Reset,
}
