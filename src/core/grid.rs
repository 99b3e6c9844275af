//! Chart coordinate space and the static grid drawn behind the path.
//!
//! Nothing here depends on segment data: the geometry is a function of the
//! chart dimensions and the fixed day layout (96 slots, 4 per hour, 4 rows).

use crate::config::ChartConfig;
use crate::models::duty_status::CanonicalRow;
use crate::models::segment::{SLOTS_PER_HOUR, TOTAL_SLOTS};
use serde::Serialize;

const ROW_COUNT: usize = 4;

/// Dimensions of the chart, all in chart units (px for SVG).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartLayout {
    pub width: f64,
    pub label_width: f64,
    pub summary_width: f64,
    pub time_label_height: f64,
    pub row_height: f64,
    pub row_gap: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

impl ChartLayout {
    pub fn from_config(cfg: &ChartConfig) -> Self {
        Self {
            width: cfg.width,
            label_width: cfg.label_width,
            summary_width: cfg.summary_width,
            time_label_height: cfg.time_label_height,
            row_height: cfg.row_height,
            row_gap: cfg.row_gap,
        }
    }

    /// Same gutter and rows, graph area sized so one slot is `slot_width`.
    pub fn with_slot_width(slot_width: f64) -> Self {
        let base = Self::default();
        Self {
            width: base.label_width + base.summary_width + slot_width * TOTAL_SLOTS as f64,
            ..base
        }
    }

    /// Right edge of the graph area (the summary panel starts here).
    pub fn graph_width(&self) -> f64 {
        self.width - self.summary_width
    }

    pub fn slot_width(&self) -> f64 {
        (self.graph_width() - self.label_width) / TOTAL_SLOTS as f64
    }

    /// Bottom edge of the last row.
    pub fn graph_height(&self) -> f64 {
        self.time_label_height + ROW_COUNT as f64 * (self.row_height + self.row_gap)
    }

    pub fn slot_x(&self, slot: i32) -> f64 {
        self.label_width + slot as f64 * self.slot_width()
    }

    pub fn row_top(&self, row: CanonicalRow) -> f64 {
        self.time_label_height + row.index() as f64 * (self.row_height + self.row_gap)
    }

    /// Y of the horizontal line drawn for a row.
    pub fn row_baseline(&self, row: CanonicalRow) -> f64 {
        self.row_top(row) + self.row_height / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub slot: i32,
    pub x: f64,
    pub is_hour: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourLine {
    pub hour: i32,
    pub x: f64,
    /// `None` for the closing midnight line (hour 24).
    pub label: Option<String>,
    pub label_x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowBand {
    pub row: CanonicalRow,
    pub top: f64,
    pub baseline: f64,
    pub label: String,
}

/// Tick, hour-line and row geometry for one layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridGeometry {
    pub quarter_ticks: Vec<Tick>,
    pub hour_lines: Vec<HourLine>,
    pub rows: Vec<RowBand>,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl GridGeometry {
    pub fn new(layout: &ChartLayout) -> Self {
        let quarter_ticks = (0..=TOTAL_SLOTS)
            .map(|slot| Tick {
                slot,
                x: layout.slot_x(slot),
                is_hour: slot % SLOTS_PER_HOUR == 0,
            })
            .collect();

        let hour_width = SLOTS_PER_HOUR as f64 * layout.slot_width();
        let hour_lines = (0..=24)
            .map(|hour| {
                let x = layout.slot_x(hour * SLOTS_PER_HOUR);
                HourLine {
                    hour,
                    x,
                    label: (hour < 24).then(|| format_hour_label(hour)),
                    label_x: x + hour_width / 2.0,
                }
            })
            .collect();

        let rows = CanonicalRow::ALL
            .iter()
            .map(|row| RowBand {
                row: *row,
                top: layout.row_top(*row),
                baseline: layout.row_baseline(*row),
                label: format!("{}: {}", row.number(), row.label()),
            })
            .collect();

        Self {
            quarter_ticks,
            hour_lines,
            rows,
            left: layout.label_width,
            right: layout.graph_width(),
            top: layout.time_label_height,
            bottom: layout.graph_height(),
        }
    }
}

/// 12-hour clock label for an hour column: "12 AM", "1 AM" … "NOON", "1 PM" …
pub fn format_hour_label(hour: i32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        12 => "NOON".to_string(),
        h if h < 12 => format!("{h} AM"),
        h => format!("{} PM", h - 12),
    }
}
