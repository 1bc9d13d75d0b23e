//! Error types for quickcap.

use thiserror::Error;

/// Errors surfaced by the CLI layer.
///
/// The parser itself never fails; unrecognized date-like phrases are
/// left in the title as ordinary text. Errors only arise at the
/// boundaries: malformed timestamp flags and output serialization.
#[derive(Debug, Error)]
pub enum QuickcapError {
    /// JSON serialization of a parse result failed.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// A `--now` or `--deadline` value could not be parsed.
    #[error("Invalid timestamp '{0}': expected 2026-08-30T14:00[:SS], 2026-08-30 14:00, or 2026-08-30")]
    Timestamp(String),

    /// Shell completion script generation failed.
    #[error("Completion generation failed: {0}")]
    Completions(String),
}
