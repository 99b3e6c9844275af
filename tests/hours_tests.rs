use eldgraph::core::aggregator::aggregate;
use eldgraph::core::chart::LogChart;
use eldgraph::core::grid::ChartLayout;
use eldgraph::core::normalizer::{normalize, normalized_sorted, sorted_by_start};
use eldgraph::core::trip::{DaySummary, TripSummary};
use eldgraph::models::{CanonicalRow, DailyLog, LogTotals, Segment};

fn full_day() -> Vec<Segment> {
    vec![
        Segment::new("OFF", 0, 16),
        Segment::new("SLEEPER", 16, 24),
        Segment::new("DRIVING", 24, 68),
        Segment::new("ON_DUTY", 68, 96),
    ]
}

#[test]
fn test_normalize_resolves_midnight_wrap() {
    let input = Segment::new("DRIVING", 90, 0)
        .with_location("Joplin, MO")
        .with_remarks("Last leg")
        .with_times("2025-03-14T22:30:00", "2025-03-15T00:00:00");

    let out = normalize(std::slice::from_ref(&input));

    let mut expected = input.clone();
    expected.end_index = 96;
    assert_eq!(out, vec![expected]);
}

#[test]
fn test_normalize_keeps_everything_else() {
    let input = vec![
        Segment::new("DRIVING", 40, 48).with_location("Tulsa, OK"),
        Segment::new("OFF", 0, 40).with_remarks("rest"),
        Segment::new("garbage", 60, 50),
    ];
    let out = normalize(&input);

    assert_eq!(out, input);
}

#[test]
fn test_normalize_is_idempotent() {
    let input = vec![Segment::new("OFF", 0, 80), Segment::new("DRIVING", 80, 0)];
    let once = normalize(&input);
    assert_eq!(normalize(&once), once);
}

#[test]
fn test_sort_is_stable_on_equal_starts() {
    let input = vec![
        Segment::new("DRIVING", 40, 48),
        Segment::new("first", 0, 8),
        Segment::new("second", 0, 4),
    ];
    let sorted = sorted_by_start(&input);
    let labels: Vec<&str> = sorted.iter().map(|s| s.status.as_str()).collect();
    assert_eq!(labels, vec!["first", "second", "DRIVING"]);
}

#[test]
fn test_normalized_sorted_wraps_then_sorts() {
    let out = normalized_sorted(&[Segment::new("DRIVING", 90, 0), Segment::new("OFF", 0, 90)]);
    assert_eq!(out[0].status, "OFF");
    assert_eq!(out[1].end_index, 96);
}

#[test]
fn test_full_day_hours() {
    let hours = aggregate(&full_day());

    assert_eq!(hours.get(CanonicalRow::OffDuty), 4.0);
    assert_eq!(hours.get(CanonicalRow::Sleeper), 2.0);
    assert_eq!(hours.get(CanonicalRow::Driving), 11.0);
    assert_eq!(hours.get(CanonicalRow::OnDutyNotDriving), 7.0);
    assert_eq!(hours.total(), 24.0);
}

#[test]
fn test_midnight_wrap_counts_to_end_of_day() {
    let hours = aggregate(&[Segment::new("DRIVING", 90, 0)]);
    assert_eq!(hours.get(CanonicalRow::Driving), 1.5);
}

#[test]
fn test_empty_day_has_four_zero_buckets() {
    let hours = aggregate(&[]);
    assert_eq!(hours.iter().count(), 4);
    assert!(hours.iter().all(|(_, h)| h == 0.0));
    assert_eq!(hours.total(), 0.0);
}

#[test]
fn test_gaps_and_overlaps_change_the_total() {
    let gap = aggregate(&[Segment::new("OFF", 0, 20), Segment::new("DRIVING", 30, 50)]);
    assert_eq!(gap.total(), 10.0);

    let overlap = aggregate(&[Segment::new("OFF", 0, 48), Segment::new("OFF", 40, 96)]);
    assert_eq!(overlap.get(CanonicalRow::OffDuty), 26.0);
}

#[test]
fn test_inverted_segment_is_not_clamped() {
    let hours = aggregate(&[Segment::new("DRIVING", 50, 40)]);
    assert_eq!(hours.get(CanonicalRow::Driving), -2.5);
}

#[test]
fn test_extreme_indices_do_not_overflow() {
    let segments = [
        Segment::new("DRIVING", i32::MIN, 5),
        Segment::new("OFF", 10, i32::MIN),
    ];

    assert_eq!(segments[0].duration_slots(), 5 - i64::from(i32::MIN));

    let hours = aggregate(&segments);
    assert_eq!(hours.get(CanonicalRow::Driving), 536_870_913.25);
    assert_eq!(hours.get(CanonicalRow::OffDuty), -536_870_914.5);

    let chart = LogChart::build(&DailyLog::new("2025-03-14", segments.to_vec()), &ChartLayout::default());
    assert_eq!(chart.segment_count, 2);
    assert_eq!(chart.remarks.len(), 2);
    assert_eq!(chart.path.transitions, 1);
}

#[test]
fn test_unknown_status_counts_as_off_duty() {
    let hours = aggregate(&[Segment::new("Yard move", 0, 8)]);
    assert_eq!(hours.get(CanonicalRow::OffDuty), 2.0);
}

#[test]
fn test_hours_serialize_by_row_key() {
    let json = serde_json::to_value(aggregate(&full_day())).expect("serialize hours");
    assert_eq!(json["OFF"], 4.0);
    assert_eq!(json["DRIVING"], 11.0);
    assert_eq!(json["ON DUTY"], 7.0);
}

#[test]
fn test_day_summary_computes_driving_and_on_duty() {
    let day = DaySummary::from_log(&DailyLog::new("2025-03-14", full_day()));

    assert_eq!(day.driving_hours, 11.0);
    assert_eq!(day.on_duty_hours, 18.0);
    assert_eq!(day.total_hours, 24.0);
    assert_eq!(day.segment_count, 4);
}

#[test]
fn test_day_summary_prefers_reported_totals() {
    let mut nested = DailyLog::new("2025-03-14", full_day());
    nested.totals = Some(LogTotals {
        driving_hours: Some(10.5),
        on_duty_hours: None,
    });
    nested.on_duty_hours = Some(13.0);

    let day = DaySummary::from_log(&nested);
    assert_eq!(day.driving_hours, 10.5);
    assert_eq!(day.on_duty_hours, 13.0);

    let mut flat = DailyLog::new("2025-03-15", full_day());
    flat.driving_hours = Some(9.0);
    assert_eq!(DaySummary::from_log(&flat).driving_hours, 9.0);
}

#[test]
fn test_trip_summary_totals_days() {
    let logs = vec![
        DailyLog::new("2025-03-14", full_day()),
        DailyLog::new("2025-03-15", vec![Segment::new("DRIVING", 0, 8)]),
    ];
    let trip = TripSummary::from_logs(&logs);

    assert_eq!(trip.day_count(), 2);
    assert_eq!(trip.first_date(), Some("2025-03-14"));
    assert_eq!(trip.last_date(), Some("2025-03-15"));
    assert_eq!(trip.total_driving_hours, 13.0);
    assert_eq!(trip.total_on_duty_hours, 20.0);
}
