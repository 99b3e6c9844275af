use super::segment::Segment;
use serde::{Deserialize, Serialize};

/// Totals as reported by the trip planner backend (newer payloads).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogTotals {
    #[serde(default, alias = "driving_hours")]
    pub driving_hours: Option<f64>,
    #[serde(default, alias = "on_duty_hours")]
    pub on_duty_hours: Option<f64>,
}

/// A log sheet for one date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: String, // YYYY-MM-DD
    #[serde(default)]
    pub segments: Vec<Segment>,

    // Older payloads carry the totals flat on the log.
    #[serde(default, alias = "drivingHours", skip_serializing_if = "Option::is_none")]
    pub driving_hours: Option<f64>,
    #[serde(default, alias = "onDutyHours", skip_serializing_if = "Option::is_none")]
    pub on_duty_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<LogTotals>,
}

impl DailyLog {
    pub fn new(date: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            date: date.into(),
            segments,
            ..Default::default()
        }
    }

    /// Driving hours reported by the backend: `totals.drivingHours`, then
    /// the flat `driving_hours` field.
    pub fn reported_driving_hours(&self) -> Option<f64> {
        self.totals
            .as_ref()
            .and_then(|t| t.driving_hours)
            .or(self.driving_hours)
    }

    /// Same lookup order as [`DailyLog::reported_driving_hours`].
    pub fn reported_on_duty_hours(&self) -> Option<f64> {
        self.totals
            .as_ref()
            .and_then(|t| t.on_duty_hours)
            .or(self.on_duty_hours)
    }
}
