//! Task capture parsing.
//!
//! Ties the pipeline together: tags are stripped first, the date
//! expression matcher runs on the tag-stripped text, and the leftover
//! text becomes the title after whitespace cleanup. Stripping tags
//! first means a hashtag embedded inside a date phrase never interferes
//! with date recognition.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::rules::match_date_expression;
use crate::core::tags::extract_tags;

/// Result of parsing a single line of task input.
///
/// Constructed fresh per call and never cached; the caller consumes it
/// to build a task record or render a live preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedTask {
    /// Human-readable title with all recognized tokens removed,
    /// internal whitespace collapsed, and edges trimmed.
    pub title: String,
    /// Deadline resolved from the highest-priority matching date rule.
    pub deadline: Option<NaiveDateTime>,
    /// Tags in order of first appearance, duplicates retained.
    pub tags: Vec<String>,
}

/// Parse a line of free text into title, deadline, and tags.
///
/// `now` is the reference instant every date rule resolves against; it
/// is threaded through the whole call so two time-sensitive
/// computations in one parse can never straddle a clock tick. The
/// function is pure: identical `(input, now)` always yields identical
/// output, and unrecognized date-like phrases are left in the title as
/// ordinary text.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quickcap::parse;
///
/// let now = NaiveDate::from_ymd_opt(2026, 8, 31)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let task = parse("Submit report #work tomorrow at 9am", now);
/// assert_eq!(task.title, "Submit report");
/// assert_eq!(task.tags, vec!["work"]);
/// assert!(task.deadline.is_some());
/// ```
#[must_use]
pub fn parse(input: &str, now: NaiveDateTime) -> ParsedTask {
    let (after_tags, tags) = extract_tags(input);
    let (after_date, deadline) = match_date_expression(&after_tags, now);
    let title = after_date.split_whitespace().collect::<Vec<_>>().join(" ");
    ParsedTask {
        title,
        deadline,
        tags,
    }
}
