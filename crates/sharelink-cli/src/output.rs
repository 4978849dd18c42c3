//! CLI output rendering: result rows, status lines, and key-value fields.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Render a single result row as a one-row table or a JSON object.
///
/// Every sharelink command reports on exactly one link or one document,
/// so there is no list rendering.
pub fn render_row<T: Serialize + Tabled>(row: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => Table::new([row]).to_string(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(row).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Print a single result row in the selected format
pub fn print_row<T: Serialize + Tabled>(row: &T, format: OutputFormat) {
    println!("{}", render_row(row, format));
}

/// Print a structured report in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a labelled field of a link report
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<14} {}", format!("{}:", key), value);
}
