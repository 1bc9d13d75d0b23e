//! Time-of-day normalization.
//!
//! Converts an hour/minute/meridiem token triple into a time applied
//! onto a base date. Used by several of the date expression rules.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// An am/pm marker from a 12-hour time token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Parse an `am`/`pm` token, case-insensitively.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("am") {
            Some(Self::Am)
        } else if token.eq_ignore_ascii_case("pm") {
            Some(Self::Pm)
        } else {
            None
        }
    }
}

/// Apply an hour/minute/meridiem triple onto a base date.
///
/// Without a meridiem the hour is taken literally (24-hour clock).
/// With one, the standard 12-hour convention applies: pm adds 12 to
/// hours below 12, and 12am maps to hour 0. Seconds are zeroed.
///
/// Returns `None` when the resulting hour or minute is out of range
/// (e.g. "at 99:99"); callers treat that as the expression carrying no
/// usable time rather than carrying into the next day.
#[must_use]
pub fn apply_time(
    date: NaiveDate,
    hour: u32,
    minute: u32,
    meridiem: Option<Meridiem>,
) -> Option<NaiveDateTime> {
    let hour = match meridiem {
        Some(Meridiem::Pm) if hour < 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    };
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(NaiveDateTime::new(date, time))
}
