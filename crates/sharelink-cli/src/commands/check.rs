//! Size budget check command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use sharelink_codec::ShareLinkCodec;
use sharelink_core::config::AppConfig;
use sharelink_core::error::AppError;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Document content (reads from stdin when neither this nor --file is given)
    pub content: Option<String>,

    /// Read document content from a file
    #[arg(long)]
    pub file: Option<std::path::PathBuf>,
}

/// Shareability report row.
#[derive(Debug, Serialize, Tabled)]
struct ShareabilityRow {
    #[tabled(rename = "Shareable")]
    shareable: bool,
    #[tabled(rename = "Encoded size")]
    size: usize,
    #[tabled(rename = "Budget")]
    max_size: usize,
    #[tabled(rename = "Compression ratio")]
    compression_ratio: String,
}

/// Execute the check command
pub fn execute(args: &CheckArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let content = super::read_content(&args.content, &args.file)?;
    let codec = ShareLinkCodec::new(config.share.clone());

    let estimate = codec.is_content_shareable(&content)?;
    let row = ShareabilityRow {
        shareable: estimate.shareable,
        size: estimate.size,
        max_size: estimate.max_size,
        compression_ratio: format!("{:.2}", estimate.compression_ratio),
    };
    output::print_row(&row, format);

    if !estimate.shareable {
        output::print_warning("Content is too large to embed in a share link");
    }

    Ok(())
}
