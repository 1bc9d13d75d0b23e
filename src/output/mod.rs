//! Output formatting for quickcap.
//!
//! Formatters for displaying a parse result as colored text or JSON.

mod json;
mod pretty;

pub use json::format_parsed_json;
pub use pretty::{format_parsed_pretty, render_preview};

use crate::cli::args::OutputFormat;
use crate::core::ParsedTask;
use crate::error::QuickcapError;

/// Format a parse result based on the output format.
///
/// # Errors
///
/// Returns `QuickcapError::Json` if JSON serialization fails.
pub fn format_parsed(task: &ParsedTask, format: OutputFormat) -> Result<String, QuickcapError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_pretty(task)),
        OutputFormat::Json => format_parsed_json(task),
    }
}
