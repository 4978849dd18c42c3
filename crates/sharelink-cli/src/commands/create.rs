//! Share link creation command.

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::output::{self, OutputFormat};
use sharelink_codec::{ShareLinkCodec, ShareOptions, extract_payload};
use sharelink_core::config::AppConfig;
use sharelink_core::error::AppError;

/// Arguments for the create command
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Document title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Document content (reads from stdin when neither this nor --file is given)
    pub content: Option<String>,

    /// Read document content from a file
    #[arg(long)]
    pub file: Option<std::path::PathBuf>,

    /// Protect the content with a password (prompted interactively)
    #[arg(short, long)]
    pub password: bool,

    /// Hours until the link expires
    #[arg(short, long)]
    pub expires_in: Option<u32>,
}

/// A created link, for structured output.
#[derive(Debug, Serialize)]
struct CreatedLink {
    url: String,
    payload_size: usize,
    encrypted: bool,
    expires: Option<String>,
}

/// Execute the create command
pub fn execute(args: &CreateArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let content = super::read_content(&args.content, &args.file)?;
    let codec = ShareLinkCodec::new(config.share.clone());

    let estimate = codec.is_content_shareable(&content)?;
    if !estimate.shareable {
        output::print_warning(&format!(
            "Content encodes to {} characters, over the {}-character budget; \
             the link may not survive transport",
            estimate.size, estimate.max_size
        ));
    }

    let password = if args.password {
        Some(prompt_password()?)
    } else {
        None
    };

    let options = ShareOptions {
        password,
        expires_in_hours: args.expires_in,
    };
    let url = codec.generate_share_link(&args.title, &content, &options)?;
    let created = build_report(url, &options);
    debug!(
        size = created.payload_size,
        encrypted = created.encrypted,
        "share link created"
    );

    match format {
        OutputFormat::Table => {
            output::print_success("Share link created");
            output::print_kv("URL", &created.url);
            output::print_kv("Payload size", &created.payload_size.to_string());
            output::print_kv("Encrypted", if created.encrypted { "yes" } else { "no" });
            output::print_kv("Expiry", created.expires.as_deref().unwrap_or("never"));
        }
        OutputFormat::Json => output::print_item(&created, format),
    }

    Ok(())
}

/// Assemble the report from the link and the options that produced it.
fn build_report(url: String, options: &ShareOptions) -> CreatedLink {
    CreatedLink {
        payload_size: extract_payload(&url).len(),
        encrypted: options.password.is_some(),
        expires: options
            .expires_in_hours
            .map(|hours| format!("in {hours} hour{}", if hours == 1 { "" } else { "s" })),
        url,
    }
}

fn prompt_password() -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt("Share password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::validation(format!("Password prompt failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_built_from_inputs() {
        let options = ShareOptions {
            password: Some("pw".to_string()),
            expires_in_hours: Some(48),
        };
        let report = build_report("/share?d=abcdef".to_string(), &options);
        assert_eq!(report.url, "/share?d=abcdef");
        assert_eq!(report.payload_size, 6);
        assert!(report.encrypted);
        assert_eq!(report.expires.as_deref(), Some("in 48 hours"));
    }

    #[test]
    fn test_report_for_plain_unexpiring_link() {
        let report = build_report("/share?d=xyz".to_string(), &ShareOptions::default());
        assert_eq!(report.payload_size, 3);
        assert!(!report.encrypted);
        assert_eq!(report.expires, None);
    }
}
