// src/export/pdf_export.rs

use crate::core::chart::LogChart;
use crate::errors::{AppError, AppResult};
use crate::export::model::{exports_to_table, get_headers};
use crate::export::pdf::PdfManager;
use crate::export::{RemarkExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Remarks export as a paginated PDF table.
pub(crate) fn export_pdf(rows: &[RemarkExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = exports_to_table(rows);

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

/// Chart page, followed by the remarks table when any segment is annotated.
pub(crate) fn render_chart_pdf(chart: &LogChart, path: &Path, stroke_width: f64) -> AppResult<()> {
    let mut pdf = PdfManager::new();
    pdf.write_chart(&format!("Driver's Daily Log - {}", chart.date), chart, stroke_width);

    if crate::core::remarks::has_annotations(&chart.remarks) {
        let rows: Vec<RemarkExport> = chart
            .remarks
            .iter()
            .map(|r| RemarkExport::from_row(&chart.date, r))
            .collect();
        pdf.write_table(
            &format!("Activity Log & Remarks - {}", chart.date),
            &get_headers(),
            &exports_to_table(&rows),
        );
    }

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF render error: {e}")))?;

    notify_export_success("PDF chart", path);
    Ok(())
}
