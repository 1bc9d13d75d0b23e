//! Parse and preview command implementations.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::cli::args::{OutputFormat, ParseArgs, PreviewArgs};
use crate::core::parse;
use crate::error::QuickcapError;
use crate::output::{format_parsed, render_preview};

/// Execute the parse command.
///
/// Applies the caller-side merge contract on top of the pure parse:
/// an explicit `--deadline` wins over the parsed one, and `--tag`
/// values are unioned with the parsed tags, order-preserving and
/// deduplicated.
///
/// # Errors
///
/// Returns an error if `--deadline` is malformed or JSON serialization
/// fails.
pub fn parse_input(
    args: ParseArgs,
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, QuickcapError> {
    let mut task = parse(&args.text, now);

    if let Some(deadline_str) = args.deadline {
        task.deadline = Some(parse_instant(&deadline_str)?);
    }

    if let Some(cli_tags) = args.tags {
        for tag in cli_tags {
            let trimmed = tag.trim().to_string();
            if !trimmed.is_empty() && !task.tags.contains(&trimmed) {
                task.tags.push(trimmed);
            }
        }
    }

    format_parsed(&task, format)
}

/// Execute the preview command.
#[must_use]
pub fn preview(args: &PreviewArgs, now: NaiveDateTime) -> String {
    render_preview(&parse(&args.text, now))
}

/// Parse a CLI-supplied timestamp.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM`, or a bare
/// `YYYY-MM-DD` (midnight).
///
/// # Errors
///
/// Returns `QuickcapError::Timestamp` if no format matches.
pub fn parse_instant(input: &str) -> Result<NaiveDateTime, QuickcapError> {
    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(QuickcapError::Timestamp(input.to_string()))
}
