// src/export/pdf.rs

use crate::core::chart::LogChart;
use crate::core::path::PathCommand;
use crate::utils::time::format_hours;
use pdf_writer::types::{LineCapStyle, LineJoinStyle};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Landscape A4 document: chart pages and paginated tables.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Chart space → page space (PDF origin is bottom-left).
struct ChartTransform {
    left: f32,
    top: f32,
    scale: f32,
}

impl ChartTransform {
    fn x(&self, x: f64) -> f32 {
        self.left + x as f32 * self.scale
    }

    fn y(&self, y: f64) -> f32 {
        self.top - y as f32 * self.scale
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // Fixed object ids, pages are allocated from 4
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            row_h: 18.0,

            next_id,
            font_id,

            font_size: 8.0,
            header_font_size: 9.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = pdf_text(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_line(&self, content: &mut Content, from: (f32, f32), to: (f32, f32)) {
        content.move_to(from.0, from.1);
        content.line_to(to.0, to.1);
        content.stroke();
    }

    fn draw_title(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 10.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 40.0,
            self.margin - 25.0,
            self.font_size,
            &pg,
        );
    }

    /// One page with the logbook grid, the trace and the hours panel,
    /// scaled to fit the page width.
    pub fn write_chart(&mut self, title: &str, chart: &LogChart, stroke_width: f64) {
        let layout = &chart.layout;
        let page_no = self.page_refs.len() + 1;
        let mut content = self.new_page();
        self.draw_title(&mut content, title, page_no);

        let avail_w = self.page_w - 2.0 * self.margin;
        let avail_h = self.page_h - 2.0 * self.margin - 30.0;
        let scale = (avail_w / layout.width as f32).min(avail_h / layout.graph_height() as f32);
        let t = ChartTransform {
            left: self.margin,
            top: self.page_h - self.margin - 20.0,
            scale,
        };
        let label_size = (14.0 * scale).max(5.0);
        let grid = &chart.grid;

        // Hour lines + labels
        content.save_state();
        content.set_stroke_rgb(0.70, 0.70, 0.70);
        content.set_line_width(0.6);
        for line in &grid.hour_lines {
            self.draw_line(
                &mut content,
                (t.x(line.x), t.y(grid.top)),
                (t.x(line.x), t.y(grid.bottom)),
            );
            if let Some(label) = &line.label {
                let w = label.len() as f32 * label_size * 0.5;
                self.draw_text(
                    &mut content,
                    t.x(line.label_x) - w / 2.0,
                    t.y(grid.top - 12.0),
                    label_size,
                    label,
                );
            }
        }

        // Quarter ticks, dashed
        content.set_line_width(0.3);
        content.set_dash_pattern([1.0, 1.0], 0.0);
        for tick in grid.quarter_ticks.iter().filter(|q| !q.is_hour) {
            self.draw_line(
                &mut content,
                (t.x(tick.x), t.y(grid.top + 10.0)),
                (t.x(tick.x), t.y(grid.bottom)),
            );
        }
        content.restore_state();

        // Row separators + labels
        content.save_state();
        content.set_stroke_rgb(0.60, 0.60, 0.60);
        content.set_line_width(0.8);
        for band in &grid.rows {
            self.draw_line(
                &mut content,
                (t.x(grid.left), t.y(band.top)),
                (t.x(grid.right), t.y(band.top)),
            );
            self.draw_text(
                &mut content,
                t.x(0.0) + 2.0,
                t.y(band.baseline) - label_size / 3.0,
                label_size,
                &band.label,
            );
        }
        self.draw_line(
            &mut content,
            (t.x(grid.left), t.y(grid.bottom)),
            (t.x(grid.right), t.y(grid.bottom)),
        );
        content.restore_state();

        // Trace
        if !chart.path.is_empty() {
            content.save_state();
            content.set_stroke_rgb(0.07, 0.07, 0.07);
            content.set_line_width((stroke_width as f32 * scale).max(0.8));
            content.set_line_cap(LineCapStyle::RoundCap);
            content.set_line_join(LineJoinStyle::RoundJoin);
            for cmd in &chart.path.commands {
                match cmd {
                    PathCommand::Move(p) => content.move_to(t.x(p.x), t.y(p.y)),
                    PathCommand::Line(p) => content.line_to(t.x(p.x), t.y(p.y)),
                };
            }
            content.stroke();

            content.set_fill_rgb(0.07, 0.07, 0.07);
            let r = (4.0 * scale).max(1.2);
            for m in &chart.path.markers {
                content.rect(t.x(m.x) - r, t.y(m.y) - r, 2.0 * r, 2.0 * r);
                content.fill_nonzero();
            }
            content.restore_state();
        }

        // Hours panel
        let panel_x = t.x(layout.graph_width()) + 6.0;
        self.draw_text(
            &mut content,
            panel_x,
            t.y(layout.time_label_height - 12.0),
            label_size,
            "Hours Summary",
        );
        for (row, hours) in chart.hours.iter() {
            let (r, g, b) = row.color().rgb;
            content.save_state();
            content.set_fill_rgb(r, g, b);
            self.draw_text(
                &mut content,
                panel_x,
                t.y(layout.row_baseline(row)) - label_size / 3.0,
                label_size,
                &format!("{}: {}", row.number(), format_hours(hours)),
            );
            content.restore_state();
        }
        self.draw_text(
            &mut content,
            panel_x,
            t.y(layout.graph_height() - 20.0),
            label_size,
            &format!("Total: {}", format_hours(chart.total_hours)),
        );

        self.finalize_page(content);
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, col_widths: &[f32], row: &[String], size: f32) {
        let mut x = self.margin;

        for (text, w) in row.iter().zip(col_widths) {
            // truncate to the cell: Helvetica averages ~0.5em per glyph
            let max_chars = ((w - 6.0) / (size * 0.5)).max(1.0) as usize;
            let shown: String = if text.chars().count() > max_chars {
                let mut s: String = text.chars().take(max_chars.saturating_sub(1)).collect();
                s.push('~');
                s
            } else {
                text.clone()
            };
            self.draw_text(content, x + 3.0, y + 5.0, size, &shown);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Column widths from header + content, scaled down to the page width.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 5.5 + 8.0).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = (cell.chars().count() as f32 * 4.6 + 8.0).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    /// Multi-page table with title, header row repeated on every page.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;

        // At least one page, even without rows
        loop {
            let page_no = self.page_refs.len() + 1;
            let mut content = self.new_page();
            self.draw_title(&mut content, title, page_no);

            let mut y = self.page_h - self.margin - 30.0;

            self.fill_band(&mut content, y, table_w, 0.85);
            self.draw_row(&mut content, y, &col_widths, &header_row, self.header_font_size);
            y -= self.row_h;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }

                // zebra stripe
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, 0.96);
                }

                self.draw_row(&mut content, y, &col_widths, row, self.font_size);

                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];

            if remaining.is_empty() {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// WinAnsi bytes: printable ASCII and Latin-1 (U+00A0..=U+00FF) keep their
/// code point, anything else becomes '?'.
fn pdf_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}
