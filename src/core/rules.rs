//! Ordered date expression rules.
//!
//! The rule table is a fixed-priority list evaluated top to bottom; the
//! first rule whose pattern matches anywhere in the text wins, and only
//! its matched substring is removed. Composite day+time patterns sit
//! above their bare sub-patterns so "today at 9am" is never consumed by
//! the bare "today" rule, and weekday rules sit above "tomorrow"/"today"
//! so "next monday" is never partially matched. Any other date-like
//! text left after the winning rule is treated as ordinary title text.

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::core::timeofday::{apply_time, Meridiem};

type Resolver = fn(&Captures<'_>, NaiveDateTime) -> Option<NaiveDateTime>;

/// One entry in the fixed-priority rule table.
struct DateRule {
    pattern: &'static Lazy<Regex>,
    resolve: Resolver,
}

static TOMORROW_AT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btomorrow\s+at\s+(\d{1,2})(?::(\d{2}))?(?:\s*(am|pm))?\b")
        .unwrap_or_else(|e| panic!("Invalid tomorrow-at regex: {e}"))
});

static TODAY_AT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btoday\s+at\s+(\d{1,2})(?::(\d{2}))?(?:\s*(am|pm))?\b")
        .unwrap_or_else(|e| panic!("Invalid today-at regex: {e}"))
});

static NEXT_WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bnext\s+(monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thur|thu|friday|fri|saturday|sat|sunday|sun)\b")
        .unwrap_or_else(|e| panic!("Invalid next-weekday regex: {e}"))
});

static ON_WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bon\s+(monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thur|thu|friday|fri|saturday|sat|sunday|sun)\b")
        .unwrap_or_else(|e| panic!("Invalid on-weekday regex: {e}"))
});

static TOMORROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btomorrow\b").unwrap_or_else(|e| panic!("Invalid tomorrow regex: {e}"))
});

static TODAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btoday\b").unwrap_or_else(|e| panic!("Invalid today regex: {e}"))
});

static AT_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bat\s+(\d{1,2})(?::(\d{2}))?(?:\s*(am|pm))?\b")
        .unwrap_or_else(|e| panic!("Invalid at-time regex: {e}"))
});

static IN_OFFSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bin\s+(\d+)\s*(hours?|hrs?|minutes?|mins?)\b")
        .unwrap_or_else(|e| panic!("Invalid in-offset regex: {e}"))
});

// Priority order is part of the contract; do not reorder.
static RULES: [DateRule; 8] = [
    DateRule { pattern: &TOMORROW_AT, resolve: resolve_tomorrow_at },
    DateRule { pattern: &TODAY_AT, resolve: resolve_today_at },
    DateRule { pattern: &NEXT_WEEKDAY, resolve: resolve_weekday },
    DateRule { pattern: &ON_WEEKDAY, resolve: resolve_weekday },
    DateRule { pattern: &TOMORROW, resolve: resolve_tomorrow },
    DateRule { pattern: &TODAY, resolve: resolve_today },
    DateRule { pattern: &AT_TIME, resolve: resolve_at_time },
    DateRule { pattern: &IN_OFFSET, resolve: resolve_offset },
];

/// Match the highest-priority date expression in `text`.
///
/// Returns the text with the winning match removed plus the resolved
/// deadline. If no rule matches, or the winning match carries an
/// out-of-range time, the text comes back unchanged with no deadline.
#[must_use]
pub fn match_date_expression(text: &str, now: NaiveDateTime) -> (String, Option<NaiveDateTime>) {
    for rule in &RULES {
        let Some(caps) = rule.pattern.captures(text) else {
            continue;
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let Some(deadline) = (rule.resolve)(&caps, now) else {
            return (text.to_string(), None);
        };
        let mut remaining = String::with_capacity(text.len());
        remaining.push_str(&text[..whole.start()]);
        remaining.push_str(&text[whole.end()..]);
        return (remaining, Some(deadline));
    }
    (text.to_string(), None)
}

/// Pull the hour/minute/meridiem capture groups shared by the time rules.
fn time_tokens(caps: &Captures<'_>) -> Option<(u32, u32, Option<Meridiem>)> {
    let hour = caps.get(1)?.as_str().parse().ok()?;
    let minute = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let meridiem = caps.get(3).and_then(|m| Meridiem::from_token(m.as_str()));
    Some((hour, minute, meridiem))
}

fn resolve_tomorrow_at(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let (hour, minute, meridiem) = time_tokens(caps)?;
    apply_time(now.date() + Duration::days(1), hour, minute, meridiem)
}

fn resolve_today_at(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let (hour, minute, meridiem) = time_tokens(caps)?;
    apply_time(now.date(), hour, minute, meridiem)
}

fn resolve_at_time(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let (hour, minute, meridiem) = time_tokens(caps)?;
    apply_time(now.date(), hour, minute, meridiem)
}

fn resolve_tomorrow(_caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDateTime> {
    apply_time(now.date() + Duration::days(1), 9, 0, None)
}

fn resolve_today(_caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDateTime> {
    apply_time(now.date(), 23, 59, None)
}

/// Resolve a named weekday strictly in the future.
///
/// Distance is `((target - current) + 7) % 7` on Sunday-based indices;
/// a zero distance (the named day is today) rolls forward a full week.
fn resolve_weekday(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let target = weekday_from_name(caps.get(1)?.as_str())?;
    let current = now.date().weekday().num_days_from_sunday();
    let mut distance = (target.num_days_from_sunday() + 7 - current) % 7;
    if distance == 0 {
        distance = 7;
    }
    apply_time(now.date() + Duration::days(i64::from(distance)), 9, 0, None)
}

fn resolve_offset(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let amount: i64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2)?.as_str().to_lowercase();
    let delta = if unit.starts_with("hour") || unit == "hr" || unit == "hrs" {
        Duration::try_hours(amount)?
    } else {
        Duration::try_minutes(amount)?
    };
    now.checked_add_signed(delta)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tues" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thurs" | "thur" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // 2026-08-31 is a Monday.
    fn monday_ten_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 31)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_no_match_leaves_text_unchanged() {
        let (text, deadline) = match_date_expression("buy milk", monday_ten_am());
        assert_eq!(text, "buy milk");
        assert!(deadline.is_none());
    }

    #[test]
    fn test_tomorrow_at_time() {
        let (text, deadline) = match_date_expression("report tomorrow at 9am", monday_ten_am());
        assert_eq!(text, "report ");
        assert_eq!(deadline, Some(at(2026, 9, 1, 9, 0)));
    }

    #[test]
    fn test_tomorrow_at_time_with_minutes() {
        let (_, deadline) = match_date_expression("call tomorrow at 3:45pm", monday_ten_am());
        assert_eq!(deadline, Some(at(2026, 9, 1, 15, 45)));
    }

    #[test]
    fn test_today_at_24_hour_time() {
        let (_, deadline) = match_date_expression("standup today at 15:30", monday_ten_am());
        assert_eq!(deadline, Some(at(2026, 8, 31, 15, 30)));
    }

    #[test]
    fn test_next_weekday() {
        let (text, deadline) = match_date_expression("plan next friday", monday_ten_am());
        assert_eq!(text, "plan ");
        assert_eq!(deadline, Some(at(2026, 9, 4, 9, 0)));
    }

    #[test]
    fn test_on_weekday() {
        let (_, deadline) = match_date_expression("demo on wednesday", monday_ten_am());
        assert_eq!(deadline, Some(at(2026, 9, 2, 9, 0)));
    }

    #[test]
    fn test_same_weekday_rolls_a_full_week() {
        // now is a Monday, so "on monday" must land 7 days out.
        let (_, deadline) = match_date_expression("on monday", monday_ten_am());
        assert_eq!(deadline, Some(at(2026, 9, 7, 9, 0)));
    }

    #[test]
    fn test_bare_tomorrow_defaults_to_nine() {
        let (_, deadline) = match_date_expression("ship it tomorrow", monday_ten_am());
        assert_eq!(deadline, Some(at(2026, 9, 1, 9, 0)));
    }

    #[test]
    fn test_bare_today_is_end_of_day() {
        let (_, deadline) = match_date_expression("pay rent today", monday_ten_am());
        assert_eq!(deadline, Some(at(2026, 8, 31, 23, 59)));
    }

    #[test]
    fn test_bare_at_time_is_today() {
        let (text, deadline) = match_date_expression("gym at 6pm", monday_ten_am());
        assert_eq!(text, "gym ");
        assert_eq!(deadline, Some(at(2026, 8, 31, 18, 0)));
    }

    #[test]
    fn test_offset_minutes() {
        let (text, deadline) = match_date_expression("ping Bob in 45 minutes", monday_ten_am());
        assert_eq!(text, "ping Bob ");
        assert_eq!(deadline, Some(monday_ten_am() + Duration::minutes(45)));
    }

    #[test]
    fn test_offset_hours_short_unit() {
        let (_, deadline) = match_date_expression("check oven in 2 hrs", monday_ten_am());
        assert_eq!(deadline, Some(monday_ten_am() + Duration::hours(2)));
    }

    #[test]
    fn test_offset_zero_is_now() {
        let (_, deadline) = match_date_expression("ping in 0 min", monday_ten_am());
        assert_eq!(deadline, Some(monday_ten_am()));
    }

    #[test]
    fn test_composite_beats_bare_today() {
        // "today at 15:30" must resolve via the today-at rule, not the
        // bare "today" rule (23:59) or the bare "at" rule.
        let (text, deadline) = match_date_expression("today at 15:30", monday_ten_am());
        assert_eq!(text.trim(), "");
        assert_eq!(deadline, Some(at(2026, 8, 31, 15, 30)));
    }

    #[test]
    fn test_priority_wins_over_earlier_position() {
        // The bare "today" appears first in the string, but the
        // higher-priority "tomorrow at" rule still wins.
        let (text, deadline) =
            match_date_expression("today work, then tomorrow at 8am", monday_ten_am());
        assert_eq!(deadline, Some(at(2026, 9, 1, 8, 0)));
        assert!(text.contains("today work"));
    }

    #[test]
    fn test_only_winning_match_is_removed() {
        let (text, _) = match_date_expression("tomorrow and also today", monday_ten_am());
        assert_eq!(text, " and also today");
    }

    #[test]
    fn test_out_of_range_time_yields_no_deadline() {
        let (text, deadline) = match_date_expression("meet today at 99:99", monday_ten_am());
        assert_eq!(text, "meet today at 99:99");
        assert!(deadline.is_none());
    }

    #[test]
    fn test_weekday_case_insensitive() {
        let (_, deadline) = match_date_expression("review Next Friday", monday_ten_am());
        assert_eq!(deadline, Some(at(2026, 9, 4, 9, 0)));
    }

    #[test]
    fn test_at_inside_word_does_not_match() {
        let (text, deadline) = match_date_expression("chat 5 things", monday_ten_am());
        assert_eq!(text, "chat 5 things");
        assert!(deadline.is_none());
    }

    #[test]
    fn test_in_days_is_not_interpreted() {
        // Only hour/minute units are supported for relative offsets.
        let (text, deadline) = match_date_expression("follow up in 3 days", monday_ten_am());
        assert_eq!(text, "follow up in 3 days");
        assert!(deadline.is_none());
    }
}
