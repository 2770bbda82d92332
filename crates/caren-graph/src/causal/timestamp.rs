//! Best-effort timestamp parsing for action and source times.
//!
//! Accepted, in order: RFC 3339 and ISO 8601 with offset (`+HH:MM`, `+HHMM`
//! or bare `+HH`), RFC 2822, ISO 8601 without offset (`T` or space separator,
//! optional fraction), 12-hour clock with AM/PM, month-name dates, slash
//! dates, bare dates (midnight), and bare clock times (anchored to
//! 1970-01-01). Anything without an offset is taken as UTC.

use caren_core::ActionRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

// `%#z` also takes an offset with the minutes left off.
const OFFSET_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

const NAIVE_FORMATS: [&str; 14] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H%M%S",
    "%b %d %Y %H:%M:%S",
    "%b %d %Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%d %b %Y %H:%M",
];

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y%m%d",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
];

const TIME_FORMATS: [&str; 4] = ["%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

/// Parse a timestamp string. Returns `None` when no format matches.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|f| DateTime::parse_from_str(s, f).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // A trailing `Z` on an otherwise naive timestamp.
    let naive_src = s.strip_suffix(['Z', 'z']).unwrap_or(s);
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(naive_src, f).ok())
    {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
    {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    TIME_FORMATS
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(s, f).ok())
        .map(|time| Utc.from_utc_datetime(&NaiveDate::default().and_time(time)))
}

/// `T_A` if it parses, otherwise `T_S` if it parses.
pub fn effective_time(record: &ActionRecord) -> Option<DateTime<Utc>> {
    record
        .action_time
        .as_deref()
        .and_then(parse_timestamp)
        .or_else(|| record.source_time.as_deref().and_then(parse_timestamp))
}
