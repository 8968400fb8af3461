use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use date_span::{full_days_between, full_weeks_between, SpanError, TimePoint, TimeSpan};

fn date_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn at_midnight(y: i32, m: u32, d: u32) -> TimePoint {
    TimePoint::from(date_time(y, m, d, 0, 0))
}

#[test]
fn test_half_year_scenario() {
    let start = at_midnight(2021, 11, 1);
    let end = at_midnight(2022, 5, 1);

    assert_eq!(full_days_between(Some(&start), Some(&end)).unwrap(), 181);
    assert_eq!(full_weeks_between(Some(&start), Some(&end)).unwrap(), 25);
}

#[test]
fn test_one_week_scenario() {
    let start = at_midnight(2021, 1, 1);
    let end = at_midnight(2021, 1, 8);

    assert_eq!(full_days_between(Some(&start), Some(&end)).unwrap(), 7);
    assert_eq!(full_weeks_between(Some(&start), Some(&end)).unwrap(), 1);
}

#[test]
fn test_identical_points_yield_zero() {
    let point = TimePoint::from(date_time(2022, 3, 15, 9, 30));

    assert_eq!(full_days_between(Some(&point), Some(&point)).unwrap(), 0);
    assert_eq!(full_weeks_between(Some(&point), Some(&point)).unwrap(), 0);
}

#[test]
fn test_argument_order_does_not_matter() {
    let a = at_midnight(2021, 11, 1);
    let b = at_midnight(2022, 5, 1);

    let forward = full_days_between(Some(&a), Some(&b)).unwrap();
    let backward = full_days_between(Some(&b), Some(&a)).unwrap();
    assert_eq!(forward, backward);
    assert!(forward >= 0);
    assert_eq!(
        full_weeks_between(Some(&a), Some(&b)).unwrap(),
        full_weeks_between(Some(&b), Some(&a)).unwrap()
    );
}

#[test]
fn test_weeks_are_truncated_days_div_seven() {
    let start = at_midnight(2021, 1, 1);
    for offset in [0u32, 6, 7, 13, 14] {
        let end = at_midnight(2021, 1, 1 + offset);
        let days = full_days_between(Some(&start), Some(&end)).unwrap();
        let weeks = full_weeks_between(Some(&start), Some(&end)).unwrap();
        assert_eq!(days, i64::from(offset));
        assert_eq!(weeks, days / 7);
    }
}

#[test]
fn test_missing_start_mentions_start_inclusive() {
    let end = at_midnight(2021, 1, 1);
    let err = full_days_between(None, Some(&end)).unwrap_err();

    match err {
        SpanError::InvalidArgument { ref message } => {
            assert!(message.contains("'start_inclusive'"));
            assert!(!message.contains("'end_exclusive'"));
        }
        ref other => panic!("expected InvalidArgument, got: {other:?}"),
    }
}

#[test]
fn test_both_missing_mentions_both_arguments_in_order() {
    let err = full_weeks_between(None, None).unwrap_err();
    let message = err.to_string();

    let lines: Vec<&str> = message.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Method argument: 'start_inclusive', error message: 'this argument can not be None'."
    );
    assert_eq!(
        lines[1],
        "Method argument: 'end_exclusive', error message: 'this argument can not be None'."
    );
    assert!(message.ends_with('\n'));
}

#[test]
fn test_mixed_representations_use_first_arguments_timeline() {
    // Date end projected onto the DateTime timeline lands at midnight:
    // 2021-01-01T12:00 -> 2021-01-03T00:00 is a day and a half.
    let start = TimePoint::from(date_time(2021, 1, 1, 12, 0));
    let end = TimePoint::from(NaiveDate::from_ymd_opt(2021, 1, 3).unwrap());
    assert_eq!(full_days_between(Some(&start), Some(&end)).unwrap(), 1);

    // With the Date first, the DateTime end is reduced to its calendar
    // date, so the same pair reads as two whole days.
    let start = TimePoint::from(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    let end = TimePoint::from(date_time(2021, 1, 3, 12, 0));
    assert_eq!(full_days_between(Some(&start), Some(&end)).unwrap(), 2);
}

#[test]
fn test_date_and_time_are_incompatible() {
    let date = TimePoint::from(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    let time = TimePoint::from(NaiveTime::from_hms_opt(12, 0, 0).unwrap());

    assert!(matches!(
        full_days_between(Some(&date), Some(&time)),
        Err(SpanError::IncompatibleRepresentations { .. })
    ));
    assert!(matches!(
        full_weeks_between(Some(&time), Some(&date)),
        Err(SpanError::IncompatibleRepresentations { .. })
    ));
}

#[test]
fn test_time_point_serde_round_trip() {
    let point = TimePoint::from(date_time(2021, 7, 14, 0, 0));
    let json = serde_json::to_string(&point).unwrap();
    let back: TimePoint = serde_json::from_str(&json).unwrap();
    assert_eq!(back, point);

    let span = TimeSpan::from_seconds(-86_400);
    let json = serde_json::to_string(&span).unwrap();
    let back: TimeSpan = serde_json::from_str(&json).unwrap();
    assert_eq!(back, span);
}
