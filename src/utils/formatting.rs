//! Formatting utilities used for CLI and export outputs.

/// Fractional hours as `HHh MMm` (short: `HH:MM`).
pub fn hours2readable(hours: f64, short: bool) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let m = total_minutes.abs();

    if short {
        // 11:00, -00:15
        format!("{}{:02}:{:02}", sign, m / 60, m % 60)
    } else {
        // 11h 00m, -00h 15m
        format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
    }
}

/// Horizontal rule made of the configured separator character.
pub fn separator_line(sep: &str, width: usize) -> String {
    let ch = sep.chars().next().unwrap_or('-');
    std::iter::repeat_n(ch, width).collect()
}
