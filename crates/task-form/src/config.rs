// File: src/config.rs
// Purpose: Configuration parsing from task-form.toml

use crate::mode::{Mode, RevalidateMode};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use task_form_validation::{Schema, SchemaSettings, PRIORITIES};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "task-form.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub validation: SchemaSettings,
}

/// Form behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub mode: Mode,

    #[serde(default)]
    pub revalidate_mode: RevalidateMode,

    /// Priority the form is seeded with. Must be one of the accepted priorities.
    #[serde(default = "default_priority")]
    pub default_priority: String,
}

fn default_priority() -> String {
    PRIORITIES[0].to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            revalidate_mode: RevalidateMode::default(),
            default_priority: default_priority(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config
            .check()
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./task-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Reject settings the form could not honour
    pub fn check(&self) -> Result<()> {
        if !PRIORITIES.contains(&self.form.default_priority.as_str()) {
            bail!(
                "default_priority '{}' is not one of {:?}",
                self.form.default_priority,
                PRIORITIES
            );
        }
        self.schema()?;
        Ok(())
    }

    /// Build the validation schema described by `[validation]`
    pub fn schema(&self) -> Result<Schema> {
        Schema::task(&self.validation).context("Invalid [validation] settings")
    }
}
