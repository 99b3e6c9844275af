//! Hours per canonical row.

use crate::core::classifier::classify;
use crate::core::normalizer::normalize;
use crate::models::duty_status::CanonicalRow;
use crate::models::segment::Segment;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::warn;

/// Accumulated hours for each of the four rows; always four entries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoursByStatus {
    buckets: [f64; 4],
}

impl HoursByStatus {
    pub fn get(&self, row: CanonicalRow) -> f64 {
        self.buckets[row.index()]
    }

    pub fn add(&mut self, row: CanonicalRow, hours: f64) {
        self.buckets[row.index()] += hours;
    }

    /// Sum of the four buckets. 24.0 for a day fully tiled by segments.
    pub fn total(&self) -> f64 {
        self.buckets.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalRow, f64)> + '_ {
        CanonicalRow::ALL.iter().map(|row| (*row, self.get(*row)))
    }
}

impl Serialize for HoursByStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        for (row, hours) in self.iter() {
            map.serialize_entry(row.key(), &hours)?;
        }
        map.end()
    }
}

/// Sum `(end - start) / 4` hours per classified status.
///
/// Segments are normalized first (idempotent, so normalized input is fine).
/// Non-positive durations are not clamped: malformed input shows up as a
/// total different from 24.0.
pub fn aggregate(segments: &[Segment]) -> HoursByStatus {
    normalize(segments)
        .iter()
        .fold(HoursByStatus::default(), |mut hours, seg| {
            if seg.duration_slots() <= 0 {
                warn!(
                    status = %seg.status,
                    start = seg.start_index,
                    end = seg.end_index,
                    "segment with non-positive duration"
                );
            }
            hours.add(classify(&seg.status), seg.duration_hours());
            hours
        })
}
