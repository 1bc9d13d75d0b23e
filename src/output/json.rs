//! JSON output formatting for quickcap.

use serde_json::json;

use crate::core::ParsedTask;
use crate::error::QuickcapError;

/// Format a parse result as pretty-printed JSON.
///
/// The deadline is rendered as a local `YYYY-MM-DDTHH:MM:SS` string or
/// `null` when absent.
///
/// # Errors
///
/// Returns `QuickcapError::Json` if serialization fails.
pub fn format_parsed_json(task: &ParsedTask) -> Result<String, QuickcapError> {
    let output = json!({
        "title": task.title,
        "deadline": task.deadline.map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string()),
        "tags": task.tags,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
