// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Interpret a cell as a date (`YYYY-MM-DD`) or a 12-hour clock time
/// (`8:00 AM`), returning the Excel number format and serial value.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(("yyyy-mm-dd", date_to_excel_serial(d)));
    }

    for fmt in ["%I:%M %p", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            let seconds = t.num_seconds_from_midnight() as f64;
            return Some(("h:mm AM/PM", seconds / 86400.0));
        }
    }

    None
}

fn date_to_excel_serial(d: NaiveDate) -> f64 {
    // Excel day zero (with the 1900 leap-year bug folded in)
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}
