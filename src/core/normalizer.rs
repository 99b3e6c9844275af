//! Canonical form of raw segments.

use crate::models::segment::{Segment, TOTAL_SLOTS};

/// Resolve the midnight-wrap sentinel: an `end_index` of 0 means the end of
/// the day (slot 96). Every other field is copied unchanged; nothing is
/// sorted, dropped or merged. Idempotent.
pub fn normalize(segments: &[Segment]) -> Vec<Segment> {
    segments
        .iter()
        .map(|s| {
            let mut out = s.clone();
            if out.end_index == 0 {
                out.end_index = TOTAL_SLOTS;
            }
            out
        })
        .collect()
}

/// Stable sort by `start_index`; equal starts keep input order.
pub fn sorted_by_start(segments: &[Segment]) -> Vec<Segment> {
    let mut sorted = segments.to_vec();
    sorted.sort_by_key(|s| s.start_index);
    sorted
}

/// `normalize` followed by `sorted_by_start`, the input every ordered
/// consumer works on.
pub fn normalized_sorted(segments: &[Segment]) -> Vec<Segment> {
    sorted_by_start(&normalize(segments))
}
