// src/export/logic.rs

use crate::core::chart::LogChart;
use crate::core::grid::ChartLayout;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::collect_exports;
use crate::export::pdf_export::{export_pdf, render_chart_pdf};
use crate::export::svg::render_svg;
use crate::export::xlsx::export_xlsx;
use crate::export::{ChartFormat, ExportFormat, notify_export_success};
use crate::models::daily_log::DailyLog;
use crate::ui::messages::warning;
use crate::utils::path::absolute_output_path;
use std::fs;

/// Remarks export for every day of the input.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute output path
    /// - `force`: overwrite without asking
    pub fn export(logs: &[DailyLog], format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = absolute_output_path(file)?;

        ensure_writable(&path, force)?;
        ensure_parent_dir(&path)?;

        let rows = collect_exports(logs);

        if rows.is_empty() {
            warning("No segments found in the input; writing an empty export.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
            ExportFormat::Pdf => export_pdf(&rows, &path, &build_pdf_title(logs))?,
        }

        Ok(())
    }
}

/// Title of the PDF export from the dates covered.
fn build_pdf_title(logs: &[DailyLog]) -> String {
    match (logs.first(), logs.last()) {
        (Some(first), Some(last)) if first.date != last.date => {
            format!("Duty status remarks {} to {}", first.date, last.date)
        }
        (Some(only), _) => format!("Duty status remarks for {}", only.date),
        _ => "Duty status remarks".to_string(),
    }
}

/// Chart output for a single day.
pub struct RenderLogic;

impl RenderLogic {
    pub fn render(
        log: &DailyLog,
        layout: &ChartLayout,
        stroke_width: f64,
        format: ChartFormat,
        file: &str,
        force: bool,
    ) -> AppResult<LogChart> {
        let path = absolute_output_path(file)?;

        ensure_writable(&path, force)?;
        ensure_parent_dir(&path)?;

        let chart = LogChart::build(log, layout);

        if chart.segment_count == 0 {
            warning(format!("Log {} has no segments: rendering an empty grid.", log.date));
        }

        match format {
            ChartFormat::Svg => {
                fs::write(&path, render_svg(&chart, stroke_width))?;
                notify_export_success("SVG chart", &path);
            }
            ChartFormat::Pdf => render_chart_pdf(&chart, &path, stroke_width)?,
        }

        Ok(chart)
    }
}
