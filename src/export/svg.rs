// src/export/svg.rs

//! SVG rendering of a [`LogChart`]: the logbook grid, the stepped trace,
//! the hours summary panel and, when any segment is annotated, the
//! activity/remarks block under the chart.

use crate::core::chart::LogChart;
use crate::core::remarks::has_annotations;
use crate::utils::time::format_hours;
use html_escape::encode_text;
use std::fmt::Write;

const BORDER: &str = "#d1d5db";
const FOREGROUND: &str = "#111827";
const MUTED: &str = "#6b7280";
const TRACE: &str = "#111";
const FONT: &str = "font-family=\"Helvetica, Arial, sans-serif\" font-size=\"14\"";

const REMARKS_TITLE_HEIGHT: f64 = 48.0;
const REMARKS_ROW_HEIGHT: f64 = 24.0;

/// Complete standalone SVG document.
pub fn render_svg(chart: &LogChart, stroke_width: f64) -> String {
    let layout = &chart.layout;
    let graph_height = layout.graph_height();

    let show_remarks = has_annotations(&chart.remarks);
    let remarks_height = if show_remarks {
        REMARKS_TITLE_HEIGHT + REMARKS_ROW_HEIGHT * (chart.remarks.len() + 1) as f64
    } else {
        0.0
    };
    let height = graph_height + remarks_height;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" {FONT}>"#,
        layout.width, height, layout.width, height
    );
    let _ = writeln!(out, r#"  <title>ELD log {}</title>"#, encode_text(&chart.date));
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        layout.width, height
    );

    write_grid(&mut out, chart);
    write_trace(&mut out, chart, stroke_width);
    write_summary_panel(&mut out, chart);

    if show_remarks {
        write_remarks(&mut out, chart, graph_height);
    }

    out.push_str("</svg>\n");
    out
}

fn write_grid(out: &mut String, chart: &LogChart) {
    let grid = &chart.grid;
    out.push_str("  <g class=\"grid\">\n");

    // Hour lines and labels
    for line in &grid.hour_lines {
        let _ = writeln!(
            out,
            r#"    <line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{BORDER}" stroke-width="1" opacity="0.6"/>"#,
            grid.top,
            grid.bottom,
            x = line.x
        );
        if let Some(label) = &line.label {
            let _ = writeln!(
                out,
                r#"    <text x="{}" y="{}" text-anchor="middle" fill="{FOREGROUND}">{}</text>"#,
                line.label_x,
                grid.top - 12.0,
                label
            );
        }
    }

    // Quarter-hour ticks (hour ticks full height, quarters dashed)
    for tick in grid.quarter_ticks.iter().filter(|t| !t.is_hour) {
        let _ = writeln!(
            out,
            r#"    <line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{BORDER}" stroke-width="0.5" stroke-dasharray="2,2" opacity="0.4"/>"#,
            grid.top + 10.0,
            grid.bottom,
            x = tick.x
        );
    }

    // Row labels and separators
    for band in &grid.rows {
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" text-anchor="end" font-weight="600" fill="{FOREGROUND}">{}</text>"#,
            grid.left - 16.0,
            band.baseline + 6.0,
            encode_text(&band.label)
        );
        let _ = writeln!(
            out,
            r#"    <line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{BORDER}" stroke-width="1.5" opacity="0.6"/>"#,
            grid.left,
            grid.right,
            y = band.top
        );
    }

    let _ = writeln!(
        out,
        r#"    <line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{BORDER}" stroke-width="2" opacity="0.8"/>"#,
        grid.left,
        grid.right,
        y = grid.bottom
    );
    out.push_str("  </g>\n");
}

fn write_trace(out: &mut String, chart: &LogChart, stroke_width: f64) {
    if chart.path.is_empty() {
        return;
    }

    let _ = writeln!(
        out,
        r#"  <path d="{}" fill="none" stroke="{TRACE}" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round"/>"#,
        chart.path.to_svg_d()
    );

    for m in &chart.path.markers {
        let _ = writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="4" fill="{TRACE}" stroke="white" stroke-width="2"/>"#,
            m.x, m.y
        );
    }
}

fn write_summary_panel(out: &mut String, chart: &LogChart) {
    let layout = &chart.layout;
    let left = layout.graph_width();
    let height = layout.graph_height();

    out.push_str("  <g class=\"summary\">\n");
    let _ = writeln!(
        out,
        r##"    <rect x="{left}" y="0" width="{}" height="{height}" fill="#f3f4f6" opacity="0.5"/>"##,
        layout.summary_width
    );
    let _ = writeln!(
        out,
        r#"    <line x1="{left}" y1="0" x2="{left}" y2="{height}" stroke="{BORDER}" stroke-width="2"/>"#
    );
    let _ = writeln!(
        out,
        r#"    <text x="{}" y="{}" text-anchor="middle" font-weight="600" fill="{FOREGROUND}">Hours Summary</text>"#,
        left + layout.summary_width / 2.0,
        layout.time_label_height - 12.0
    );

    for (row, hours) in chart.hours.iter() {
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" font-weight="600" fill="{}">{}: {}</text>"#,
            left + 12.0,
            layout.row_baseline(row) + 5.0,
            row.color().hex,
            row.number(),
            format_hours(hours)
        );
    }

    let _ = writeln!(
        out,
        r#"    <text x="{}" y="{}" text-anchor="middle" font-weight="700" fill="{FOREGROUND}">Total: {}</text>"#,
        left + layout.summary_width / 2.0,
        height - 20.0,
        format_hours(chart.total_hours)
    );
    out.push_str("  </g>\n");
}

fn write_remarks(out: &mut String, chart: &LogChart, top: f64) {
    let x0 = chart.layout.label_width;
    // time | status | location | remarks
    let cols = [x0, x0 + 260.0, x0 + 560.0, x0 + 900.0];

    out.push_str("  <g class=\"remarks\">\n");
    let _ = writeln!(
        out,
        r#"    <text x="{x0}" y="{}" font-size="16" font-weight="600" fill="{FOREGROUND}">Activity Log &amp; Remarks</text>"#,
        top + REMARKS_TITLE_HEIGHT - 16.0
    );

    let mut y = top + REMARKS_TITLE_HEIGHT;
    for (x, title) in cols.iter().zip(["Time", "Status", "Location", "Remarks"]) {
        let _ = writeln!(
            out,
            r#"    <text x="{x}" y="{y}" font-weight="600" fill="{FOREGROUND}">{title}</text>"#
        );
    }

    for r in &chart.remarks {
        y += REMARKS_ROW_HEIGHT;
        let time = format!("{} ({}h)", r.time_range(), format_hours(r.duration_hours));
        let cells = [
            (time.as_str(), MUTED),
            (r.status.as_str(), r.row.color().hex),
            (r.location.as_deref().unwrap_or("-"), FOREGROUND),
            (r.remarks.as_deref().unwrap_or("-"), FOREGROUND),
        ];
        for (x, (text, color)) in cols.iter().zip(cells) {
            let _ = writeln!(
                out,
                r#"    <text x="{x}" y="{y}" fill="{color}">{}</text>"#,
                encode_text(text)
            );
        }
    }
    out.push_str("  </g>\n");
}
