mod commands;
mod input;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "task-form")]
#[command(version, about = "Task form CLI - validate task records and replay form events", long_about = None)]
struct Cli {
    /// Path to task-form.toml (defaults to ./task-form.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a task record read from a JSON file ("-" for stdin)
    Validate {
        /// JSON file holding the record
        file: PathBuf,

        /// Date to treat as today, YYYY-MM-DD (defaults to the local date)
        #[arg(short, long)]
        today: Option<NaiveDate>,
    },

    /// Print the record the form starts with
    Defaults,

    /// Drive the form with a JSON array of events
    Replay {
        /// JSON file holding the events ("-" for stdin)
        file: PathBuf,

        /// Date to treat as today, YYYY-MM-DD (defaults to the local date)
        #[arg(short, long)]
        today: Option<NaiveDate>,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = input::load_config(cli.config.as_deref())?;

    let code = match cli.command {
        Commands::Validate { file, today } => commands::validate::execute(&config, &file, today)?,
        Commands::Defaults => commands::defaults::execute(&config)?,
        Commands::Replay { file, today } => commands::replay::execute(&config, &file, today)?,
    };

    Ok(code)
}
