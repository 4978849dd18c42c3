//! CLI command definitions and dispatch.

pub mod check;
pub mod config;
pub mod create;
pub mod inspect;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use sharelink_core::config::AppConfig;
use sharelink_core::error::AppError;

/// Sharelink — stateless document sharing through URL-embedded payloads
#[derive(Debug, Parser)]
#[command(name = "sharelink", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a share link for a document
    Create(create::CreateArgs),
    /// Parse a share link and display its contents
    Inspect(inspect::InspectArgs),
    /// Check whether content fits the payload size budget
    Check(check::CheckArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Create(args) => create::execute(args, config, self.format),
            Commands::Inspect(args) => inspect::execute(args, config, self.format),
            Commands::Check(args) => check::execute(args, config, self.format),
            Commands::Config(args) => config::execute(args, config, &self.config, self.format),
        }
    }
}

/// Helper: read document content from an inline argument, a file, or stdin.
pub fn read_content(
    inline: &Option<String>,
    file: &Option<std::path::PathBuf>,
) -> Result<String, AppError> {
    match (inline, file) {
        (Some(content), None) => Ok(content.clone()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| AppError::validation(format!("Cannot read {}: {e}", path.display()))),
        (None, None) => {
            use std::io::Read;
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        (Some(_), Some(_)) => Err(AppError::validation(
            "Provide content inline or via --file, not both",
        )),
    }
}
