use eldgraph::core::grid::{ChartLayout, GridGeometry, format_hour_label};
use eldgraph::core::path::{PathCommand, PathGeometry, Point, build_path, build_path_with_slot_width};
use eldgraph::models::{CanonicalRow, Segment};

// slot_width 10: slot n at x = 160 + 10n; rows at y = 90, 162, 234, 306
const SLOT: f64 = 10.0;

fn full_day() -> Vec<Segment> {
    vec![
        Segment::new("OFF", 0, 16),
        Segment::new("SLEEPER", 16, 24),
        Segment::new("DRIVING", 24, 68),
        Segment::new("ON_DUTY", 68, 96),
    ]
}

/// Every step is horizontal or vertical.
fn assert_manhattan(path: &PathGeometry) {
    for pair in path.points().windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            a.x == b.x || a.y == b.y,
            "diagonal step from {a:?} to {b:?}"
        );
    }
}

#[test]
fn test_layout_with_slot_width() {
    let layout = ChartLayout::with_slot_width(SLOT);
    assert_eq!(layout.slot_width(), 10.0);
    assert_eq!(layout.slot_x(0), 160.0);
    assert_eq!(layout.slot_x(96), 1120.0);
    assert_eq!(layout.row_baseline(CanonicalRow::OffDuty), 90.0);
    assert_eq!(layout.row_baseline(CanonicalRow::OnDutyNotDriving), 306.0);
}

#[test]
fn test_empty_input_gives_empty_path() {
    let path = build_path(&[], &ChartLayout::default());
    assert!(path.is_empty());
    assert_eq!(path.transitions, 0);
    assert!(path.markers.is_empty());
    assert_eq!(path.to_svg_d(), "");
}

#[test]
fn test_single_segment() {
    let path = build_path_with_slot_width(&[Segment::new("DRIVING", 24, 68)], SLOT);

    assert_eq!(
        path.commands,
        vec![
            PathCommand::Move(Point::new(400.0, 234.0)),
            PathCommand::Line(Point::new(840.0, 234.0)),
        ]
    );
    assert_eq!(path.transitions, 0);
    assert_eq!(path.markers, vec![Point::new(840.0, 234.0)]);
}

#[test]
fn test_full_day_steps_through_every_row() {
    let path = build_path_with_slot_width(&full_day(), SLOT);

    assert_eq!(path.transitions, 3);
    assert_eq!(
        path.to_svg_d(),
        "M 160 90 L 320 90 L 320 162 L 400 162 L 400 234 L 840 234 L 840 306 L 1120 306"
    );
    assert_eq!(
        path.markers,
        vec![
            Point::new(320.0, 162.0),
            Point::new(400.0, 234.0),
            Point::new(840.0, 306.0),
            Point::new(1120.0, 306.0),
        ]
    );
    assert_manhattan(&path);
}

#[test]
fn test_unsorted_input_draws_like_sorted() {
    let mut shuffled = full_day();
    shuffled.reverse();

    assert_eq!(
        build_path_with_slot_width(&shuffled, SLOT),
        build_path_with_slot_width(&full_day(), SLOT)
    );
}

#[test]
fn test_gap_is_bridged_after_the_row_change() {
    let segments = [Segment::new("OFF", 0, 20), Segment::new("DRIVING", 30, 50)];
    let path = build_path_with_slot_width(&segments, SLOT);

    assert_eq!(
        path.commands,
        vec![
            PathCommand::Move(Point::new(160.0, 90.0)),
            PathCommand::Line(Point::new(360.0, 90.0)),
            PathCommand::Line(Point::new(360.0, 234.0)),
            PathCommand::Line(Point::new(460.0, 234.0)),
            PathCommand::Line(Point::new(660.0, 234.0)),
        ]
    );
    assert_eq!(path.max_x(), Some(660.0));
    assert_eq!(path.transitions, 1);
    assert_manhattan(&path);
}

#[test]
fn test_gap_on_same_row_stays_horizontal() {
    let segments = [Segment::new("DRIVING", 0, 20), Segment::new("Driving", 30, 50)];
    let path = build_path_with_slot_width(&segments, SLOT);

    assert_eq!(path.transitions, 0);
    assert!(path.points().iter().all(|p| p.y == 234.0));
    assert_eq!(path.max_x(), Some(660.0));
    assert_eq!(path.markers, vec![Point::new(660.0, 234.0)]);
}

#[test]
fn test_midnight_wrap_reaches_right_edge() {
    let segments = [Segment::new("OFF", 0, 90), Segment::new("DRIVING", 90, 0)];
    let path = build_path_with_slot_width(&segments, SLOT);

    assert_eq!(path.max_x(), Some(1120.0));
    assert_eq!(path.markers.last(), Some(&Point::new(1120.0, 234.0)));
}

#[test]
fn test_overlap_is_drawn_in_start_order() {
    let segments = [Segment::new("OFF", 0, 40), Segment::new("DRIVING", 30, 50)];
    let path = build_path_with_slot_width(&segments, SLOT);

    assert_eq!(path.transitions, 1);
    assert_eq!(path.markers[0], Point::new(460.0, 234.0));
    assert_eq!(path.commands.last(), Some(&PathCommand::Line(Point::new(660.0, 234.0))));
    assert_manhattan(&path);
}

#[test]
fn test_default_layout_spans_graph_area() {
    let layout = ChartLayout::default();
    let path = build_path(&full_day(), &layout);

    assert_eq!(path.points()[0].x, layout.label_width);
    let end = path.max_x().expect("non-empty path");
    assert!((end - layout.graph_width()).abs() < 1e-9);
}

#[test]
fn test_grid_ticks_and_hour_lines() {
    let grid = GridGeometry::new(&ChartLayout::with_slot_width(SLOT));

    assert_eq!(grid.quarter_ticks.len(), 97);
    assert_eq!(grid.quarter_ticks.iter().filter(|t| t.is_hour).count(), 25);
    assert_eq!(grid.hour_lines.len(), 25);
    assert_eq!(grid.hour_lines[1].x, 200.0);
    assert_eq!(grid.hour_lines[0].label_x, 180.0);
    assert_eq!(grid.hour_lines[24].label, None);
    assert_eq!((grid.left, grid.right), (160.0, 1120.0));
}

#[test]
fn test_hour_labels() {
    let grid = GridGeometry::new(&ChartLayout::default());
    let label = |h: usize| grid.hour_lines[h].label.clone();

    assert_eq!(label(0).as_deref(), Some("12 AM"));
    assert_eq!(label(1).as_deref(), Some("1 AM"));
    assert_eq!(label(11).as_deref(), Some("11 AM"));
    assert_eq!(label(12).as_deref(), Some("NOON"));
    assert_eq!(label(13).as_deref(), Some("1 PM"));
    assert_eq!(label(23).as_deref(), Some("11 PM"));
    assert_eq!(format_hour_label(18), "6 PM");
}

#[test]
fn test_row_bands() {
    let grid = GridGeometry::new(&ChartLayout::default());
    let labels: Vec<&str> = grid.rows.iter().map(|r| r.label.as_str()).collect();

    assert_eq!(
        labels,
        vec!["1: OFF DUTY", "2: SLEEPER", "3: DRIVING", "4: ON DUTY (NOT DRIVING)"]
    );
    assert_eq!(grid.rows[2].baseline, 234.0);
}
