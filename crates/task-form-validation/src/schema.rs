// File: src/schema.rs
// Purpose: Field schemas, the task schema and its settings

use crate::date::{is_not_past, parse_due_date, CalendarPolicy, DUE_DATE_REGEX};
use crate::messages;
use crate::record::{Field, Record, TaskRecord, PRIORITIES};
use crate::result::{ErrorKind, ErrorMap, FieldError, ValidationResult};
use crate::rules::Rule;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Errors raised while building a schema
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid length bounds: min {min} is greater than max {max}")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),
}

/// Tunable parts of the task schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSettings {
    #[serde(default = "default_name_min_length")]
    pub name_min_length: usize,

    #[serde(default = "default_name_max_length")]
    pub name_max_length: usize,

    #[serde(default)]
    pub calendar: CalendarPolicy,
}

fn default_name_min_length() -> usize {
    8
}

fn default_name_max_length() -> usize {
    15
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            name_min_length: default_name_min_length(),
            name_max_length: default_name_max_length(),
            calendar: CalendarPolicy::default(),
        }
    }
}

/// Ordered rules for one field
#[derive(Debug, Clone)]
pub struct FieldSchema {
    name: String,
    rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule. Rules run in the order they are added.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a pattern rule compiled from `pattern`
    pub fn pattern(self, pattern: &str, message: impl Into<String>) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            field: self.name.clone(),
            source,
        })?;
        Ok(self.rule(Rule::pattern(regex, message)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule this field's value violates, if any
    pub fn check<R: Record + ?Sized>(&self, record: &R, today: NaiveDate) -> Option<FieldError> {
        let value = record.value(&self.name);
        self.rules
            .iter()
            .find_map(|rule| rule.check(value, today).err())
    }
}

/// A set of field schemas evaluated independently of each other
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// Schema for the task form
    pub fn task(settings: &SchemaSettings) -> Result<Self, SchemaError> {
        let SchemaSettings {
            name_min_length: min,
            name_max_length: max,
            calendar,
        } = *settings;

        if min > max {
            return Err(SchemaError::InvalidLengthBounds { min, max });
        }

        let name = FieldSchema::new(Field::Name.as_str())
            .rule(Rule::required(messages::NAME_REQUIRED))
            .rule(Rule::length(
                Some(min),
                Some(max),
                messages::name_too_short(min),
                messages::name_too_long(max),
            ));

        let mut due_date = FieldSchema::new(Field::DueDate.as_str())
            .rule(Rule::required(messages::DUE_DATE_REQUIRED))
            .rule(Rule::pattern(DUE_DATE_REGEX.clone(), messages::DUE_DATE_FORMAT));
        if calendar == CalendarPolicy::Strict {
            due_date = due_date.rule(Rule::custom(
                "isCalendarDate",
                ErrorKind::FormatMismatch,
                messages::DUE_DATE_FORMAT,
                |value, _| value.and_then(|v| parse_due_date(v, CalendarPolicy::Strict)).is_some(),
            ));
        }
        let due_date = due_date.rule(Rule::custom(
            "isFutureDate",
            ErrorKind::PastDate,
            messages::DUE_DATE_PAST,
            move |value, today| {
                value
                    .and_then(|v| parse_due_date(v, calendar))
                    .is_some_and(|date| is_not_past(date, today))
            },
        ));

        let priority = FieldSchema::new(Field::Priority.as_str())
            .rule(Rule::one_of(PRIORITIES, messages::PRIORITY_INVALID));

        let is_completed = FieldSchema::new(Field::IsCompleted.as_str())
            .rule(Rule::required(messages::COMPLETED_REQUIRED));

        Self::new(vec![name, due_date, priority, is_completed])
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Run every field and collect one error per failing field
    pub fn check<R: Record + ?Sized>(&self, record: &R, today: NaiveDate) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for field in &self.fields {
            if let Some(error) = field.check(record, today) {
                debug!(field = field.name(), kind = %error.kind, "field failed validation");
                errors.insert(field.name(), error);
            }
        }
        errors
    }

    /// Run a single field. Unknown fields have no rules and always pass.
    pub fn check_field<R: Record + ?Sized>(
        &self,
        record: &R,
        field: &str,
        today: NaiveDate,
    ) -> Option<FieldError> {
        self.field(field).and_then(|f| f.check(record, today))
    }

    /// Validate a task record, handing it back unchanged when every field passes
    pub fn validate(&self, record: TaskRecord, today: NaiveDate) -> ValidationResult {
        let errors = self.check(&record, today);
        ValidationResult::from_errors(record, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_schema_field_order() {
        let schema = Schema::task(&SchemaSettings::default()).unwrap();
        let names: Vec<&str> = schema.fields().iter().map(FieldSchema::name).collect();
        assert_eq!(names, vec!["name", "dueDate", "priority", "isCompleted"]);
    }

    #[test]
    fn test_strict_adds_calendar_rule() {
        let rollover = Schema::task(&SchemaSettings::default()).unwrap();
        let strict = Schema::task(&SchemaSettings {
            calendar: CalendarPolicy::Strict,
            ..SchemaSettings::default()
        })
        .unwrap();
        assert_eq!(rollover.field("dueDate").unwrap().rules().len(), 3);
        assert_eq!(strict.field("dueDate").unwrap().rules().len(), 4);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = Schema::task(&SchemaSettings {
            name_min_length: 20,
            name_max_length: 10,
            calendar: CalendarPolicy::Rollover,
        })
        .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidLengthBounds { min: 20, max: 10 }));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = Schema::new(vec![FieldSchema::new("name"), FieldSchema::new("name")]).unwrap_err();
        assert_eq!(err.to_string(), "field 'name' is declared more than once");
    }

    #[test]
    fn test_bad_pattern_rejected() {
        let err = FieldSchema::new("code").pattern("(", "bad").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPattern { ref field, .. } if field == "code"));
    }

    #[test]
    fn test_custom_bounds_in_messages() {
        let schema = Schema::task(&SchemaSettings {
            name_min_length: 3,
            name_max_length: 5,
            calendar: CalendarPolicy::Rollover,
        })
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let record = TaskRecord::new("ab", "18/10/2026", "Basse", true);
        let errors = schema.check(&record, today);
        assert_eq!(errors.message("name"), Some("Le nom doit contenir au moins 3 caractères"));
    }

    #[test]
    fn test_unknown_field_passes() {
        let schema = Schema::task(&SchemaSettings::default()).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert!(schema.check_field(&TaskRecord::default(), "owner", today).is_none());
    }
}
