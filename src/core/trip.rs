//! Totals across the daily logs of a trip.

use crate::core::aggregator::{HoursByStatus, aggregate};
use crate::models::daily_log::DailyLog;
use crate::models::duty_status::CanonicalRow;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub hours: HoursByStatus,
    pub total_hours: f64,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub segment_count: usize,
}

impl DaySummary {
    /// Driving and on-duty hours prefer the values reported by the backend
    /// and fall back to the ones computed from the segments. Computed
    /// on-duty time includes driving time.
    pub fn from_log(log: &DailyLog) -> Self {
        let hours = aggregate(&log.segments);
        let computed_driving = hours.get(CanonicalRow::Driving);
        let computed_on_duty = computed_driving + hours.get(CanonicalRow::OnDutyNotDriving);

        Self {
            date: log.date.clone(),
            total_hours: hours.total(),
            driving_hours: log.reported_driving_hours().unwrap_or(computed_driving),
            on_duty_hours: log.reported_on_duty_hours().unwrap_or(computed_on_duty),
            segment_count: log.segments.len(),
            hours,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TripSummary {
    pub days: Vec<DaySummary>,
    pub total_driving_hours: f64,
    pub total_on_duty_hours: f64,
}

impl TripSummary {
    pub fn from_logs(logs: &[DailyLog]) -> Self {
        let days: Vec<DaySummary> = logs.iter().map(DaySummary::from_log).collect();

        Self {
            total_driving_hours: days.iter().map(|d| d.driving_hours).sum(),
            total_on_duty_hours: days.iter().map(|d| d.on_duty_hours).sum(),
            days,
        }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn first_date(&self) -> Option<&str> {
        self.days.first().map(|d| d.date.as_str())
    }

    pub fn last_date(&self) -> Option<&str> {
        self.days.last().map(|d| d.date.as_str())
    }
}
