/// ANSI color helper utilities for terminal output.
use crate::models::duty_status::CanonicalRow;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Terminal colour of a duty-status row, close to its chart color.
fn colour_for_row(row: CanonicalRow) -> Colour {
    let (r, g, b) = row.color().rgb;
    Colour::RGB((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

pub fn colorize_status(text: &str, row: CanonicalRow) -> String {
    colour_for_row(row).bold().paint(text).to_string()
}

/// Cell text, or a grey "-" when the value is missing or blank.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}-{RESET}"),
    }
}

/// Day total color:
/// 24.0 → green
/// anything else → red (gaps, overlaps or malformed segments)
pub fn color_for_total(total: f64) -> &'static str {
    if (total - 24.0).abs() < 1e-6 {
        GREEN
    } else {
        RED
    }
}
