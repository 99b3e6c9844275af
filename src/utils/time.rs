//! Time utilities: timestamp parsing, slot ↔ clock conversion, 12-hour
//! formatting and hour formatting.

use crate::errors::{AppError, AppResult};
use crate::models::segment::{SLOTS_PER_HOUR, TOTAL_SLOTS};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse an API timestamp. RFC 3339 keeps its own wall-clock time (the
/// offset is dropped, the driver's local time is what the log shows).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Wall-clock time at the start of a slot. Slot 96 (and anything past the
/// day) wraps to midnight.
pub fn slot_to_time(slot: i32) -> NaiveTime {
    let slot = slot.rem_euclid(TOTAL_SLOTS) as u32;
    let minutes = slot * (60 / SLOTS_PER_HOUR as u32);
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// "8:00 AM", "12:15 PM".
pub fn format_clock_12h(t: NaiveTime) -> String {
    t.format("%-I:%M %p").to_string()
}

/// Display time for a segment bound: the timestamp when it parses, the
/// slot-derived clock time otherwise.
pub fn display_time(timestamp: Option<&str>, slot: i32) -> String {
    let time = timestamp
        .and_then(parse_timestamp)
        .map(|dt| dt.time())
        .unwrap_or_else(|| slot_to_time(slot));
    format_clock_12h(time)
}

/// One decimal, as on the paper log: `4.0`, `11.5`.
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1}")
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}
