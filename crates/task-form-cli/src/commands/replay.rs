use super::validate::render_errors;
use crate::input;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use task_form::validation::today_local;
use task_form::{Config, FormEvent, TaskForm};
use tracing::warn;

pub fn execute(config: &Config, file: &Path, today: Option<NaiveDate>) -> Result<ExitCode> {
    let events: Vec<FormEvent> = input::read_json(file)?;
    let today = today.unwrap_or_else(today_local);
    let mut form = TaskForm::new(config)?;

    for line in replay(&mut form, events, today)? {
        println!("{}", line);
    }
    Ok(ExitCode::SUCCESS)
}

/// Apply events in order, describing what the form shows after each one
pub fn replay(form: &mut TaskForm, events: Vec<FormEvent>, today: NaiveDate) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for (index, event) in events.into_iter().enumerate() {
        let label = describe(&event);
        let submitted = form
            .apply(event, today)
            .with_context(|| format!("Event #{} ({}) failed", index + 1, label))?;

        lines.push(format!("#{} {}", index + 1, label.bold()));
        if let Some(task) = submitted {
            let json = serde_json::to_string(&task).context("Failed to serialize task")?;
            lines.push(format!("  {} {}", "submitted".green(), json));
        } else if form.has_errors() {
            lines.push(render_errors(form.errors()));
        }
    }

    if form.has_errors() {
        warn!(count = form.errors().len(), "form still has errors after replay");
    }
    Ok(lines)
}

fn describe(event: &FormEvent) -> String {
    match event {
        FormEvent::Change { field, .. } => format!("change {}", field),
        FormEvent::Blur { field } => format!("blur {}", field),
        FormEvent::Submit => "submit".to_string(),
        FormEvent::Reset => "reset".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_replay_reports_errors_and_submissions() {
        colored::control::set_override(false);
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let events: Vec<FormEvent> = serde_json::from_str(
            r#"[
                {"event": "submit"},
                {"event": "change", "field": "name", "value": "ValidTask"},
                {"event": "change", "field": "dueDate", "value": "18/10/2026"},
                {"event": "submit"}
            ]"#,
        )
        .unwrap();

        let mut form = TaskForm::new(&Config::default()).unwrap();
        let lines = replay(&mut form, events, today).unwrap();

        assert_eq!(
            lines,
            vec![
                "#1 submit".to_string(),
                "  dueDate: La date est obligatoire\n  name: Le nom est obligatoire".to_string(),
                "#2 change name".to_string(),
                "  dueDate: La date est obligatoire".to_string(),
                "#3 change dueDate".to_string(),
                "#4 submit".to_string(),
                r#"  submitted {"name":"ValidTask","dueDate":"18/10/2026","priority":"Basse","isCompleted":false}"#
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_replay_stops_on_bad_event() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let events: Vec<FormEvent> =
            serde_json::from_str(r#"[{"event": "change", "field": "name", "value": true}]"#).unwrap();

        let mut form = TaskForm::new(&Config::default()).unwrap();
        let err = replay(&mut form, events, today).unwrap_err();
        assert!(err.to_string().contains("Event #1 (change name) failed"));
    }
}
