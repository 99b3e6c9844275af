//! Maps free-form duty-status labels to one of the four canonical rows.
//!
//! Labels come from several backends and humans, so matching works on a
//! normalized form: upper-cased, trimmed, and with every run of whitespace,
//! `_` or `-` collapsed into a single space. `"on_duty"`, `"ON-DUTY"` and
//! `"On  Duty"` all become `"ON DUTY"`.
//!
//! Rules are tried in order and the first match wins; order matters because
//! a label can contain several keywords ("ON DUTY (NOT DRIVING)").

use crate::models::duty_status::{CanonicalRow, ColorToken};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Row used when no rule matches.
pub const FALLBACK_ROW: CanonicalRow = CanonicalRow::OffDuty;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_\-]+").expect("separator pattern is valid"));

struct MatchRule {
    contains: &'static str,
    unless: Option<&'static str>,
    row: CanonicalRow,
}

/// Ordered match rules, first hit wins.
///
/// `NOT DRIVING` is checked before `DRIVING` so "On Duty (Not Driving)"
/// lands on row 4. It also catches odd labels such as "Off duty, not
/// driving", which end up ON DUTY as well. `OFF DUTY` only matters for
/// [`classify_strict`]: the plain `OFF` rule skips labels containing `DUTY`.
const RULES: &[MatchRule] = &[
    MatchRule {
        contains: "SLEEPER",
        unless: None,
        row: CanonicalRow::Sleeper,
    },
    MatchRule {
        contains: "NOT DRIVING",
        unless: None,
        row: CanonicalRow::OnDutyNotDriving,
    },
    MatchRule {
        contains: "DRIVING",
        unless: None,
        row: CanonicalRow::Driving,
    },
    MatchRule {
        contains: "ON DUTY",
        unless: None,
        row: CanonicalRow::OnDutyNotDriving,
    },
    MatchRule {
        contains: "OFF DUTY",
        unless: None,
        row: CanonicalRow::OffDuty,
    },
    MatchRule {
        contains: "OFF",
        unless: Some("DUTY"),
        row: CanonicalRow::OffDuty,
    },
];

/// Upper-case, trim and collapse separators.
pub fn normalize_label(label: &str) -> String {
    SEPARATORS
        .replace_all(label.trim(), " ")
        .trim()
        .to_uppercase()
}

/// Row of the first matching rule, `None` when the label is unknown.
pub fn classify_strict(label: &str) -> Option<CanonicalRow> {
    let normalized = normalize_label(label);

    RULES
        .iter()
        .find(|rule| {
            normalized.contains(rule.contains)
                && rule.unless.is_none_or(|word| !normalized.contains(word))
        })
        .map(|rule| rule.row)
}

/// Classify a status label. Unknown labels fall back to [`FALLBACK_ROW`].
pub fn classify(label: &str) -> CanonicalRow {
    classify_strict(label).unwrap_or_else(|| {
        debug!(label, "unrecognized duty status, using OFF DUTY row");
        FALLBACK_ROW
    })
}

pub fn color_of(row: CanonicalRow) -> ColorToken {
    row.color()
}
