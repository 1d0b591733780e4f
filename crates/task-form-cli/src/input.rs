// File: src/input.rs
// Purpose: Reading config and JSON input for commands

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Read;
use std::path::Path;
use task_form::Config;
use tracing::debug;

/// Load the config from an explicit path or ./task-form.toml
///
/// Only the implicit default path may be missing.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) if !path.exists() => bail!("Config file not found: {:?}", path),
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    debug!(?config, "configuration loaded");
    Ok(config)
}

/// Read JSON from a file, or stdin when the path is "-"
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?
    };

    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON from {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let err = load_config(Some(Path::new("does/not/exist/strict.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let path = std::env::temp_dir().join(format!("task-form-{}.toml", std::process::id()));
        fs::write(&path, "[validation]\ncalendar = \"strict\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.validation.calendar, task_form::validation::CalendarPolicy::Strict);
    }
}
