use crate::input;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use task_form::validation::{today_local, ErrorMap};
use task_form::{Config, TaskRecord, ValidationResult};

pub fn execute(config: &Config, file: &Path, today: Option<NaiveDate>) -> Result<ExitCode> {
    let record: TaskRecord = input::read_json(file)?;
    let today = today.unwrap_or_else(today_local);

    let result = config.schema()?.validate(record, today);
    println!("{}", render(&result)?);

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Human-readable form of a validation outcome
pub fn render(result: &ValidationResult) -> Result<String> {
    match result {
        ValidationResult::Valid(record) => {
            let json = serde_json::to_string_pretty(record).context("Failed to serialize record")?;
            Ok(format!("{}\n{}", "valid".green().bold(), json))
        }
        ValidationResult::Invalid(errors) => Ok(format!(
            "{}\n{}",
            "invalid".red().bold(),
            render_errors(errors)
        )),
    }
}

/// One `field: message` line per error
pub fn render_errors(errors: &ErrorMap) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("  {}: {}", field.yellow(), error.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use task_form::validation::validate;

    #[test]
    fn test_render_invalid_lists_each_field() {
        colored::control::set_override(false);
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let result = validate(TaskRecord::new("Hi", "01/01/2030", "Urgent", true), today);

        let output = render(&result).unwrap();
        assert_eq!(
            output,
            "invalid\n  name: Le nom doit contenir au moins 8 caractères\n  priority: La priorité est invalide"
        );
    }

    #[test]
    fn test_render_valid_prints_record() {
        colored::control::set_override(false);
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let result = validate(TaskRecord::new("ValidTask", "01/01/2030", "Basse", true), today);

        let output = render(&result).unwrap();
        assert!(output.starts_with("valid\n"));
        assert!(output.contains(r#""dueDate": "01/01/2030""#));
    }
}
