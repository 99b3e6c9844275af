use crate::core::aggregator::{HoursByStatus, aggregate};
use crate::core::grid::{ChartLayout, GridGeometry};
use crate::core::normalizer::normalize;
use crate::core::path::{PathGeometry, build_path};
use crate::core::remarks::{RemarkRow, build_remarks};
use crate::models::daily_log::DailyLog;
use serde::Serialize;

/// Everything a renderer needs for one day, computed in a single pass.
#[derive(Debug, Clone, Serialize)]
pub struct LogChart {
    pub date: String,
    pub layout: ChartLayout,
    pub grid: GridGeometry,
    pub path: PathGeometry,
    pub hours: HoursByStatus,
    pub total_hours: f64,
    pub remarks: Vec<RemarkRow>,
    pub segment_count: usize,
}

impl LogChart {
    pub fn build(log: &DailyLog, layout: &ChartLayout) -> Self {
        let segments = normalize(&log.segments);
        let hours = aggregate(&segments);

        Self {
            date: log.date.clone(),
            layout: *layout,
            grid: GridGeometry::new(layout),
            path: build_path(&segments, layout),
            total_hours: hours.total(),
            hours,
            remarks: build_remarks(&segments),
            segment_count: segments.len(),
        }
    }
}
