// File: src/record.rs
// Purpose: Candidate task record and the per-field view rules evaluate against

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of priority values accepted by the task form
pub const PRIORITIES: [&str; 3] = ["Basse", "Moyenne", "Elevée"];

/// Candidate task as submitted by the form
///
/// Every field is optional so that a missing key can be told apart from an
/// empty one. JSON keys use the form's camelCase names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl TaskRecord {
    /// Create a record with all four fields present
    pub fn new(
        name: impl Into<String>,
        due_date: impl Into<String>,
        priority: impl Into<String>,
        is_completed: bool,
    ) -> Self {
        Self {
            name: Some(name.into()),
            due_date: Some(due_date.into()),
            priority: Some(priority.into()),
            is_completed: Some(is_completed),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = Some(is_completed);
        self
    }

    /// Remove a field entirely, making it absent rather than empty
    pub fn without(mut self, field: Field) -> Self {
        match field {
            Field::Name => self.name = None,
            Field::DueDate => self.due_date = None,
            Field::Priority => self.priority = None,
            Field::IsCompleted => self.is_completed = None,
        }
        self
    }
}

/// Value of a single field as seen by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Absent,
    Text(&'a str),
    Bool(bool),
}

impl<'a> FieldValue<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Text)
    }
}

impl From<Option<bool>> for FieldValue<'_> {
    fn from(value: Option<bool>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Bool)
    }
}

/// Anything a [`Schema`](crate::Schema) can read field values from
pub trait Record {
    fn value(&self, field: &str) -> FieldValue<'_>;
}

impl Record for TaskRecord {
    fn value(&self, field: &str) -> FieldValue<'_> {
        match Field::from_str(field) {
            Ok(Field::Name) => self.name.as_deref().into(),
            Ok(Field::DueDate) => self.due_date.as_deref().into(),
            Ok(Field::Priority) => self.priority.as_deref().into(),
            Ok(Field::IsCompleted) => self.is_completed.into(),
            Err(_) => FieldValue::Absent,
        }
    }
}

/// The four fields of a task record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    DueDate,
    Priority,
    IsCompleted,
}

impl Field {
    /// All fields in declaration order
    pub const ALL: [Field; 4] = [Field::Name, Field::DueDate, Field::Priority, Field::IsCompleted];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::DueDate => "dueDate",
            Field::Priority => "priority",
            Field::IsCompleted => "isCompleted",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_keys_deserialize_as_absent() {
        let record: TaskRecord = serde_json::from_str(r#"{"name": "ValidTask"}"#).unwrap();
        assert_eq!(record.value("name"), FieldValue::Text("ValidTask"));
        assert_eq!(record.value("dueDate"), FieldValue::Absent);
        assert_eq!(record.value("isCompleted"), FieldValue::Absent);
    }

    #[test]
    fn test_camel_case_keys() {
        let record = TaskRecord::new("ValidTask", "01/01/2030", "Basse", false);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "ValidTask",
                "dueDate": "01/01/2030",
                "priority": "Basse",
                "isCompleted": false
            })
        );
    }

    #[test]
    fn test_false_is_a_value() {
        let record = TaskRecord::default().with_completed(false);
        assert_eq!(record.value("isCompleted"), FieldValue::Bool(false));
        assert!(!record.value("isCompleted").is_absent());
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert!("urgency".parse::<Field>().is_err());
    }

    #[test]
    fn test_unknown_field_is_absent() {
        let record = TaskRecord::new("ValidTask", "01/01/2030", "Basse", true);
        assert_eq!(record.value("owner"), FieldValue::Absent);
    }
}
