use crate::core::classifier::classify;
use crate::models::duty_status::CanonicalRow;
use serde::{Deserialize, Serialize};

/// Slots per hour (15-minute increments).
pub const SLOTS_PER_HOUR: i32 = 4;
/// Slots in a full day; slot 96 is the next midnight.
pub const TOTAL_SLOTS: i32 = 24 * SLOTS_PER_HOUR;

/// One duty-status interval of a daily log, as received from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub status: String,
    #[serde(alias = "start_index")]
    pub start_index: i32, // ⇔ slot 0..=96
    #[serde(alias = "end_index")]
    pub end_index: i32, // ⇔ slot 0..=96, 0 = end of day
    #[serde(default, alias = "start_time", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, alias = "end_time", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Segment {
    /// Minimal constructor for segments built in code (tests, fixtures).
    pub fn new(status: impl Into<String>, start_index: i32, end_index: i32) -> Self {
        Self {
            status: status.into(),
            start_index,
            end_index,
            start_time: None,
            end_time: None,
            location: None,
            remarks: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    /// Canonical row of this segment's status label.
    pub fn row(&self) -> CanonicalRow {
        classify(&self.status)
    }

    /// Signed length in slots. Meaningful only after normalization.
    /// Widened so out-of-range indices cannot overflow.
    pub fn duration_slots(&self) -> i64 {
        i64::from(self.end_index) - i64::from(self.start_index)
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_slots() as f64 / SLOTS_PER_HOUR as f64
    }
}
