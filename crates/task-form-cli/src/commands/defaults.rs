use anyhow::{Context, Result};
use std::process::ExitCode;
use task_form::{Config, TaskForm};

pub fn execute(config: &Config) -> Result<ExitCode> {
    let form = TaskForm::new(config)?;
    let json = serde_json::to_string_pretty(form.defaults()).context("Failed to serialize defaults")?;
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}
