//! Stepped-line (Manhattan) path across the four duty-status rows.
//!
//! The trace must read as one unbroken line: horizontal runs for segments,
//! pure vertical moves on status changes, horizontal bridges over time not
//! covered by any segment. Small drift between the cursor and the end of the
//! previous segment is corrected with an extra horizontal move.

use crate::core::classifier::classify;
use crate::core::grid::ChartLayout;
use crate::core::normalizer::normalized_sorted;
use crate::models::duty_status::CanonicalRow;
use crate::models::segment::Segment;
use serde::Serialize;
use tracing::debug;

/// Tolerance, in chart units, below which two X positions are the same.
pub const EPSILON: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PathCommand {
    Move(Point),
    Line(Point),
}

impl PathCommand {
    pub fn point(&self) -> Point {
        match self {
            PathCommand::Move(p) | PathCommand::Line(p) => *p,
        }
    }

    fn to_svg(self) -> String {
        match self {
            PathCommand::Move(p) => format!("M {} {}", p.x, p.y),
            PathCommand::Line(p) => format!("L {} {}", p.x, p.y),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathGeometry {
    pub commands: Vec<PathCommand>,
    /// Number of vertical row changes.
    pub transitions: usize,
    /// Status-change points plus the end of the last segment.
    pub markers: Vec<Point>,
}

impl PathGeometry {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn points(&self) -> Vec<Point> {
        self.commands.iter().map(PathCommand::point).collect()
    }

    /// SVG path data, e.g. `"M 160 90 L 380 90 L 380 162"`.
    pub fn to_svg_d(&self) -> String {
        self.commands
            .iter()
            .map(|c| c.to_svg())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Largest X reached by the trace.
    pub fn max_x(&self) -> Option<f64> {
        self.commands
            .iter()
            .map(|c| c.point().x)
            .fold(None, |acc, x| Some(acc.map_or(x, |m: f64| m.max(x))))
    }
}

/// Fold accumulator: live cursor plus everything emitted so far.
struct PathCursor {
    x: f64,
    y: f64,
    geometry: PathGeometry,
}

impl PathCursor {
    fn line_to(&mut self, x: f64, y: f64) {
        self.geometry.commands.push(PathCommand::Line(Point::new(x, y)));
        self.x = x;
        self.y = y;
    }
}

/// A sorted segment resolved to chart coordinates.
struct Span {
    row: CanonicalRow,
    start_x: f64,
    end_x: f64,
    y: f64,
}

impl Span {
    fn new(seg: &Segment, layout: &ChartLayout) -> Self {
        let row = classify(&seg.status);
        Self {
            row,
            start_x: layout.slot_x(seg.start_index),
            end_x: layout.slot_x(seg.end_index),
            y: layout.row_baseline(row),
        }
    }
}

/// Build the stepped path for a day's segments.
///
/// Segments may be raw: they are normalized (midnight wrap) and stably
/// sorted by start first. Overlapping segments are drawn in that order
/// without merging, which can show a short backtrack.
pub fn build_path(segments: &[Segment], layout: &ChartLayout) -> PathGeometry {
    let sorted = normalized_sorted(segments);
    let spans: Vec<Span> = sorted.iter().map(|s| Span::new(s, layout)).collect();

    let Some(first) = spans.first() else {
        return PathGeometry::default();
    };

    let start = PathCursor {
        x: first.end_x,
        y: first.y,
        geometry: PathGeometry {
            commands: vec![
                PathCommand::Move(Point::new(first.start_x, first.y)),
                PathCommand::Line(Point::new(first.end_x, first.y)),
            ],
            ..Default::default()
        },
    };

    let mut cursor = spans.windows(2).fold(start, |mut cur, pair| {
        let (prev, span) = (&pair[0], &pair[1]);

        // Snap back to the exact end of the previous segment.
        if (cur.x - prev.end_x).abs() > EPSILON {
            let y = cur.y;
            cur.line_to(prev.end_x, y);
        }

        if span.start_x < prev.end_x - EPSILON {
            debug!(
                prev_end = prev.end_x,
                start = span.start_x,
                "overlapping segments drawn in start order"
            );
        }

        if prev.row != span.row {
            let x = cur.x;
            cur.line_to(x, span.y);
            cur.geometry.transitions += 1;
            cur.geometry.markers.push(Point::new(span.start_x, span.y));
        }

        // Bridge missing time at the (possibly new) row.
        if cur.x < span.start_x - EPSILON {
            debug!(from = cur.x, to = span.start_x, "bridging gap between segments");
            cur.line_to(span.start_x, span.y);
        }

        cur.line_to(span.end_x, span.y);
        cur
    });

    if let Some(last) = spans.last() {
        cursor.geometry.markers.push(Point::new(last.end_x, last.y));
    }

    cursor.geometry
}

/// [`build_path`] with the default gutter and rows and a given slot width.
pub fn build_path_with_slot_width(segments: &[Segment], slot_width: f64) -> PathGeometry {
    build_path(segments, &ChartLayout::with_slot_width(slot_width))
}
