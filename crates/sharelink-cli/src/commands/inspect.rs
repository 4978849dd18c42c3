//! Share link inspection command.

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use sharelink_codec::{DecryptedContent, ShareLinkCodec, extract_payload, format_expires_at};
use sharelink_core::config::AppConfig;
use sharelink_core::error::AppError;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// A share link, or just its payload
    pub link: String,

    /// Prompt for a password to decrypt protected content
    #[arg(short, long)]
    pub password: bool,
}

/// Parsed link details, for structured output.
#[derive(Debug, Serialize)]
struct LinkReport {
    title: String,
    created_at: String,
    expiry: String,
    expired: bool,
    encrypted: bool,
    content: Option<String>,
}

/// Execute the inspect command
pub fn execute(
    args: &InspectArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let codec = ShareLinkCodec::new(config.share.clone());
    let data = codec.parse_share_data(extract_payload(&args.link))?;

    let content = if data.is_encrypted {
        if args.password {
            let password = dialoguer::Password::new()
                .with_prompt("Share password")
                .interact()
                .map_err(|e| AppError::validation(format!("Password prompt failed: {e}")))?;
            match codec.decrypt_content(&data.content, &password)? {
                DecryptedContent::Text(text) => Some(text),
                DecryptedContent::Empty => {
                    output::print_warning("Decryption succeeded; the document is empty");
                    Some(String::new())
                }
            }
        } else {
            None
        }
    } else {
        Some(data.content.clone())
    };

    let report = LinkReport {
        title: data.title.clone(),
        created_at: render_instant(data.created_at),
        expiry: data
            .expires_at
            .map(format_expires_at)
            .unwrap_or_else(|| "never".to_string()),
        expired: data.is_expired(),
        encrypted: data.is_encrypted,
        content,
    };

    match format {
        OutputFormat::Table => {
            output::print_kv("Title", &report.title);
            output::print_kv("Created", &report.created_at);
            output::print_kv("Expiry", &report.expiry);
            output::print_kv("Encrypted", if report.encrypted { "yes" } else { "no" });
            if report.expired {
                output::print_warning("This share link has expired");
            }
            match &report.content {
                Some(content) => {
                    println!();
                    println!("{}", content);
                }
                None => output::print_warning(
                    "Content is password-protected; re-run with --password to decrypt",
                ),
            }
        }
        OutputFormat::Json => output::print_item(&report, format),
    }

    Ok(())
}

/// Render an epoch-milliseconds instant as UTC, falling back to the raw
/// number when out of range.
fn render_instant(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ms.to_string())
}
