// src/export/model.rs

use crate::core::remarks::{RemarkRow, build_remarks};
use crate::models::daily_log::DailyLog;
use serde::Serialize;

/// Flat row for the remarks export (one per segment, every day).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RemarkExport {
    pub date: String,
    pub index: usize,
    pub status: String,
    pub row: String,
    pub start: String,
    pub end: String,
    pub duration_hours: f64,
    pub location: String,
    pub remarks: String,
}

impl RemarkExport {
    pub fn from_row(date: &str, r: &RemarkRow) -> Self {
        Self {
            date: date.to_string(),
            index: r.index,
            status: r.status.clone(),
            row: r.row.label().to_string(),
            start: r.start.clone(),
            end: r.end.clone(),
            duration_hours: r.duration_hours,
            location: r.location.clone().unwrap_or_default(),
            remarks: r.remarks.clone().unwrap_or_default(),
        }
    }
}

/// Remarks rows for all logs, in input day order then time order.
pub fn collect_exports(logs: &[DailyLog]) -> Vec<RemarkExport> {
    logs.iter()
        .flat_map(|log| {
            build_remarks(&log.segments)
                .iter()
                .map(|r| RemarkExport::from_row(&log.date, r))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Header per CSV / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "index",
        "status",
        "row",
        "start",
        "end",
        "duration_hours",
        "location",
        "remarks",
    ]
}

/// Convert a row into table cells (XLSX, PDF).
pub(crate) fn export_to_row(e: &RemarkExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.index.to_string(),
        e.status.clone(),
        e.row.clone(),
        e.start.clone(),
        e.end.clone(),
        format!("{:.2}", e.duration_hours),
        e.location.clone(),
        e.remarks.clone(),
    ]
}

pub(crate) fn exports_to_table(rows: &[RemarkExport]) -> Vec<Vec<String>> {
    rows.iter().map(export_to_row).collect()
}
