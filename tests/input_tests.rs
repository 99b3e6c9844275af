mod common;
use common::{SAMPLE_DAY, SAMPLE_TRIP};
use eldgraph::errors::AppError;
use eldgraph::input::{DaySelector, parse_logs, select_day};

#[test]
fn test_parse_single_log() {
    let logs = parse_logs(SAMPLE_DAY).expect("parse single log");

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].segments.len(), 4);
    assert_eq!(logs[0].segments[2].location.as_deref(), Some("Dallas, TX"));
    assert_eq!(logs[0].segments[3].end_index, 0);
}

#[test]
fn test_parse_trip_response_with_snake_case_fields() {
    let logs = parse_logs(SAMPLE_TRIP).expect("parse trip");

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].segments[1].start_index, 32);
    assert_eq!(logs[1].reported_driving_hours(), Some(9.0));
    assert_eq!(logs[0].reported_driving_hours(), None);
}

#[test]
fn test_parse_bare_array() {
    let json = r#"[{"date":"2025-03-14","segments":[]},{"date":"2025-03-15"}]"#;
    let logs = parse_logs(json).expect("parse array");

    assert_eq!(logs.len(), 2);
    assert!(logs[1].segments.is_empty());
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(matches!(parse_logs("not json"), Err(AppError::Json(_))));
}

#[test]
fn test_select_day() {
    let logs = parse_logs(SAMPLE_TRIP).expect("parse trip");

    let first = select_day(&logs, &DaySelector::First).expect("first day");
    assert_eq!(first.date, "2025-03-14");

    let second = select_day(&logs, &DaySelector::Index(2)).expect("second day");
    assert_eq!(second.date, "2025-03-15");

    let by_date = select_day(&logs, &DaySelector::Date("2025-03-15".into())).expect("by date");
    assert_eq!(by_date.date, "2025-03-15");
}

#[test]
fn test_select_day_errors() {
    let logs = parse_logs(SAMPLE_TRIP).expect("parse trip");

    assert!(matches!(
        select_day(&logs, &DaySelector::Index(0)),
        Err(AppError::DayNotFound(_))
    ));
    assert!(matches!(
        select_day(&logs, &DaySelector::Index(3)),
        Err(AppError::DayNotFound(_))
    ));
    assert!(matches!(
        select_day(&logs, &DaySelector::Date("2025-04-01".into())),
        Err(AppError::DayNotFound(_))
    ));
    assert!(matches!(
        select_day(&logs, &DaySelector::Date("14/03/2025".into())),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        select_day(&[], &DaySelector::First),
        Err(AppError::DayNotFound(_))
    ));
}

#[test]
fn test_day_selector_from_args() {
    assert_eq!(DaySelector::from_args(None, None), DaySelector::First);
    assert_eq!(DaySelector::from_args(Some(2), None), DaySelector::Index(2));
    assert_eq!(
        DaySelector::from_args(None, Some("2025-03-14")),
        DaySelector::Date("2025-03-14".into())
    );
}
