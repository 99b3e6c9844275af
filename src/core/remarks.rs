//! Textual companion of the chart: one row per segment, in time order.

use crate::core::normalizer::normalized_sorted;
use crate::models::duty_status::CanonicalRow;
use crate::models::segment::Segment;
use crate::utils::time::display_time;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemarkRow {
    /// 1-based position after sorting.
    pub index: usize,
    /// Label as received.
    pub status: String,
    pub row: CanonicalRow,
    pub start_index: i32,
    pub end_index: i32,
    pub start: String,
    pub end: String,
    pub duration_hours: f64,
    pub location: Option<String>,
    pub remarks: Option<String>,
}

impl RemarkRow {
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

pub fn build_remarks(segments: &[Segment]) -> Vec<RemarkRow> {
    normalized_sorted(segments)
        .into_iter()
        .enumerate()
        .map(|(i, seg)| RemarkRow {
            index: i + 1,
            row: seg.row(),
            start: display_time(seg.start_time.as_deref(), seg.start_index),
            end: display_time(seg.end_time.as_deref(), seg.end_index),
            duration_hours: seg.duration_hours(),
            start_index: seg.start_index,
            end_index: seg.end_index,
            status: seg.status,
            location: seg.location,
            remarks: seg.remarks,
        })
        .collect()
}

/// Whether any row carries a location or a remark. The chart only appends
/// the remarks block when this holds.
pub fn has_annotations(rows: &[RemarkRow]) -> bool {
    let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    rows.iter().any(|r| filled(&r.location) || filled(&r.remarks))
}
