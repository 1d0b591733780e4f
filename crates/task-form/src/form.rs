// File: src/form.rs
// Purpose: Form state holding values, visible errors and submission flow

use crate::config::Config;
use crate::event::{FormEvent, InputValue};
use crate::mode::{Mode, RevalidateMode};
use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::collections::HashSet;
use task_form_validation::{ErrorMap, Field, Schema, TaskRecord, ValidationResult};
use tracing::{debug, info};

/// Values the form starts with and returns to after a successful submit
pub fn default_record(priority: &str) -> TaskRecord {
    TaskRecord::new("", "", priority, false)
}

/// Headless task form
///
/// Owns the current values and the errors a UI should display next to each
/// input. The engine is only run when the configured trigger mode asks for it.
#[derive(Debug, Clone)]
pub struct TaskForm {
    schema: Schema,
    defaults: TaskRecord,
    values: TaskRecord,
    errors: ErrorMap,
    mode: Mode,
    revalidate_mode: RevalidateMode,
    touched: HashSet<Field>,
    submit_count: usize,
}

impl TaskForm {
    /// Build a form from configuration
    pub fn new(config: &Config) -> Result<Self> {
        config.check()?;
        let defaults = default_record(&config.form.default_priority);

        Ok(Self {
            schema: config.schema()?,
            values: defaults.clone(),
            defaults,
            errors: ErrorMap::new(),
            mode: config.form.mode,
            revalidate_mode: config.form.revalidate_mode,
            touched: HashSet::new(),
            submit_count: 0,
        })
    }

    pub fn values(&self) -> &TaskRecord {
        &self.values
    }

    pub fn defaults(&self) -> &TaskRecord {
        &self.defaults
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Message to show next to a field, if any
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.message(field.as_str())
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    /// Update a field's value, validating it if the trigger mode says so
    pub fn change(&mut self, field: Field, value: Option<InputValue>, today: NaiveDate) -> Result<()> {
        self.set_value(field, value)?;

        let validate = if self.is_submitted() {
            self.revalidate_mode.validates_on_change()
        } else {
            self.mode.validates_on_change(self.is_touched(field))
        };
        if validate {
            self.refresh(field, today);
        }
        Ok(())
    }

    /// Mark a field as touched, validating it if the trigger mode says so
    pub fn blur(&mut self, field: Field, today: NaiveDate) {
        self.touched.insert(field);

        let validate = if self.is_submitted() {
            self.revalidate_mode.validates_on_blur()
        } else {
            self.mode.validates_on_blur()
        };
        if validate {
            self.refresh(field, today);
        }
    }

    /// Validate every field
    ///
    /// On success the payload is logged, the form is reset and the submitted
    /// record is returned. On failure every field's error is replaced.
    pub fn submit(&mut self, today: NaiveDate) -> Option<TaskRecord> {
        self.submit_count += 1;

        match self.schema.validate(self.values.clone(), today) {
            ValidationResult::Valid(task) => {
                let payload = serde_json::to_string(&task).unwrap_or_else(|_| format!("{:?}", task));
                info!(%payload, "Tâche soumise");
                self.reset();
                Some(task)
            }
            ValidationResult::Invalid(errors) => {
                debug!(count = errors.len(), "submit rejected");
                self.errors = errors;
                None
            }
        }
    }

    /// Restore default values and clear errors and submission state
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.errors.clear();
        self.touched.clear();
        self.submit_count = 0;
    }

    /// Apply an event, returning the payload of a successful submit
    pub fn apply(&mut self, event: FormEvent, today: NaiveDate) -> Result<Option<TaskRecord>> {
        match event {
            FormEvent::Change { field, value } => {
                self.change(field, value, today)?;
                Ok(None)
            }
            FormEvent::Blur { field } => {
                self.blur(field, today);
                Ok(None)
            }
            FormEvent::Submit => Ok(self.submit(today)),
            FormEvent::Reset => {
                self.reset();
                Ok(None)
            }
        }
    }

    fn set_value(&mut self, field: Field, value: Option<InputValue>) -> Result<()> {
        match (field, value) {
            (Field::IsCompleted, Some(InputValue::Bool(checked))) => {
                self.values.is_completed = Some(checked)
            }
            (Field::IsCompleted, None) => self.values.is_completed = None,
            (Field::IsCompleted, Some(InputValue::Text(text))) => {
                bail!("field '{}' expects a boolean, got {:?}", field, text)
            }
            (_, Some(InputValue::Bool(b))) => {
                bail!("field '{}' expects text, got {}", field, b)
            }
            (Field::Name, value) => self.values.name = text(value),
            (Field::DueDate, value) => self.values.due_date = text(value),
            (Field::Priority, value) => self.values.priority = text(value),
        }
        Ok(())
    }

    fn refresh(&mut self, field: Field, today: NaiveDate) {
        let error = self.schema.check_field(&self.values, field.as_str(), today);
        self.errors.set(field.as_str(), error);
    }
}

fn text(value: Option<InputValue>) -> Option<String> {
    match value {
        Some(InputValue::Text(s)) => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_starts_with_defaults() {
        let form = TaskForm::new(&Config::default()).unwrap();
        assert_eq!(form.values(), &TaskRecord::new("", "", "Basse", false));
        assert!(!form.has_errors());
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let mut form = TaskForm::new(&Config::default()).unwrap();
        assert!(form.change(Field::Name, Some(true.into()), today()).is_err());
        assert!(form.change(Field::IsCompleted, Some("yes".into()), today()).is_err());
    }

    #[test]
    fn test_null_unsets_field() {
        let mut form = TaskForm::new(&Config::default()).unwrap();
        form.change(Field::IsCompleted, None, today()).unwrap();
        assert_eq!(form.values().is_completed, None);
        form.submit(today());
        assert_eq!(form.error(Field::IsCompleted), Some("Ce champ est requis"));
    }
}
