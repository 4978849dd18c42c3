//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use sharelink_core::config::AppConfig;
use sharelink_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format);
        }
        ConfigCommand::Validate => {
            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv(
                "Link base",
                config.share.base_url.as_deref().unwrap_or("(relative)"),
            );
            output::print_kv("Size budget", &config.share.max_encoded_len.to_string());
            output::print_kv("Log level", &config.logging.level);
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out_path, default_config)?;
            output::print_success(&format!("Wrote default configuration to '{}'", out_path));
        }
    }

    Ok(())
}
