// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub mod pdf;
mod pdf_export;
pub mod svg;
mod xlsx;

pub use logic::{ExportLogic, RenderLogic};
pub use model::RemarkExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every writer.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
    tracing::info!(format = label, path = %path.display(), "output written");
}

/// Formats for the remarks export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Formats for the chart itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartFormat {
    Svg,
    Pdf,
}

impl ChartFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartFormat::Svg => "svg",
            ChartFormat::Pdf => "pdf",
        }
    }

    /// Parse the `default_format` config value.
    pub fn from_config(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Some(ChartFormat::Svg),
            "pdf" => Some(ChartFormat::Pdf),
            _ => None,
        }
    }
}
