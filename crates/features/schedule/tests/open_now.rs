use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Utc, Weekday};
use encontra_kernel::domain::plan::PlanTier;
use encontra_kernel::domain::region::RegionCode;
use encontra_kernel::domain::schedule::{DayOfWeek, DaySchedule, TimeRange, WeeklySchedule};
use encontra_kernel::domain::venue::{Subscription, SubscriptionStatus, Venue};
use encontra_schedule::{OpenSource, evaluate, is_open_at, is_open_now};
use proptest::prelude::*;

fn argentina() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).unwrap()
}

/// Saturday 2026-03-14 at `hh:mm`, Argentina time.
fn saturday_at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
    let naive = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap().and_hms_opt(hour, minute, 0).unwrap();
    argentina().from_local_datetime(&naive).unwrap()
}

fn venue(schedule: Option<WeeklySchedule>, manual_open: bool) -> Venue {
    Venue {
        id: "venue:1".to_owned(),
        slug: "cafe-austral".to_owned(),
        region_code: RegionCode::new("tdf").unwrap(),
        zone: Some("centro".to_owned()),
        name: "Café Austral".to_owned(),
        description: None,
        category: None,
        subscription: Subscription::new(PlanTier::Basic, SubscriptionStatus::Active),
        schedule,
        manual_open,
    }
}

fn daily(start: &str, end: &str) -> WeeklySchedule {
    WeeklySchedule::every_day(&DaySchedule::open(vec![TimeRange::new(start, end)]))
}

#[test]
fn fixture_date_is_a_saturday() {
    assert_eq!(saturday_at(0, 0).weekday(), Weekday::Sat);
}

#[test]
fn same_day_range_is_inclusive() {
    let v = venue(Some(daily("09:00", "18:00")), false);
    assert!(!is_open_now(&v, &saturday_at(8, 59)));
    assert!(is_open_now(&v, &saturday_at(9, 0)));
    assert!(is_open_now(&v, &saturday_at(18, 0)));
    assert!(!is_open_now(&v, &saturday_at(18, 1)));
}

#[test]
fn overnight_range_wraps_midnight() {
    let v = venue(Some(daily("22:00", "02:00")), false);
    assert!(is_open_now(&v, &saturday_at(23, 30)));
    assert!(is_open_now(&v, &saturday_at(1, 30)));
    assert!(!is_open_now(&v, &saturday_at(10, 0)));
    assert!(is_open_now(&v, &saturday_at(2, 0)));
    assert!(!is_open_now(&v, &saturday_at(2, 1)));
}

#[test]
fn manual_flag_applies_without_schedule() {
    for manual in [true, false] {
        let v = venue(None, manual);
        let status = evaluate(&v, &saturday_at(3, 0));
        assert_eq!(status.open, manual);
        assert_eq!(status.source, OpenSource::Manual);
    }
}

#[test]
fn schedule_overrides_manual_flag() {
    let v = venue(Some(daily("09:00", "18:00")), true);
    let status = evaluate(&v, &saturday_at(20, 0));
    assert!(!status.open);
    assert_eq!(status.source, OpenSource::Schedule);
}

#[test]
fn missing_or_closed_day_is_closed() {
    let hours = DaySchedule::open(vec![TimeRange::new("00:00", "23:59")]);
    let only_friday = WeeklySchedule::new().with_day(DayOfWeek::Friday, hours.clone());
    assert!(!is_open_at(&only_friday, &saturday_at(12, 0)));

    let closed = DaySchedule { is_open: false, ranges: vec![TimeRange::new("00:00", "23:59")] };
    let closed_saturday = WeeklySchedule::every_day(&hours).with_day(DayOfWeek::Saturday, closed);
    assert!(!is_open_at(&closed_saturday, &saturday_at(12, 0)));

    let no_ranges = WeeklySchedule::new().with_day(DayOfWeek::Saturday, DaySchedule::open(vec![]));
    assert!(!is_open_at(&no_ranges, &saturday_at(12, 0)));
}

#[test]
fn any_matching_range_opens() {
    let split = WeeklySchedule::every_day(&DaySchedule::open(vec![
        TimeRange::new("12:00", "15:00"),
        TimeRange::new("20:00", "23:30"),
    ]));
    assert!(is_open_at(&split, &saturday_at(13, 0)));
    assert!(!is_open_at(&split, &saturday_at(17, 0)));
    assert!(is_open_at(&split, &saturday_at(21, 0)));
}

#[test]
fn malformed_range_only_disables_itself() {
    let schedule = WeeklySchedule::every_day(&DaySchedule::open(vec![
        TimeRange::new("9am", "18:00"),
        TimeRange::new("20:00", "23:00"),
    ]));
    assert!(!is_open_at(&schedule, &saturday_at(10, 0)));
    assert!(is_open_at(&schedule, &saturday_at(21, 0)));
}

#[test]
fn wall_clock_fields_of_the_given_zone_are_used() {
    let schedule = daily("09:00", "18:00");
    // 11:00 UTC is 08:00 in Argentina.
    let utc = Utc.with_ymd_and_hms(2026, 3, 14, 11, 0, 0).unwrap();
    assert!(is_open_at(&schedule, &utc));
    assert!(!is_open_at(&schedule, &utc.with_timezone(&argentina())));
}

#[test]
fn deserializes_stored_shape() {
    let schedule: WeeklySchedule = serde_json::from_value(serde_json::json!({
        "friday": { "isOpen": true, "ranges": [{ "start": "18:00", "end": "03:00" }] },
        "sunday": { "isOpen": false }
    }))
    .unwrap();
    assert!(schedule.day(DayOfWeek::Friday).unwrap().is_open);
    assert!(schedule.day(DayOfWeek::Sunday).unwrap().ranges.is_empty());
    assert!(schedule.day(DayOfWeek::Monday).is_none());
}

proptest! {
    #[test]
    fn no_schedule_always_echoes_manual(manual: bool, hour in 0u32..24, minute in 0u32..60) {
        let v = venue(None, manual);
        prop_assert_eq!(is_open_now(&v, &saturday_at(hour, minute)), manual);
    }

    #[test]
    fn evaluation_is_idempotent(
        start in 0u32..1440,
        end in 0u32..1440,
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let fmt = |m: u32| format!("{:02}:{:02}", m / 60, m % 60);
        let v = venue(Some(daily(&fmt(start), &fmt(end))), false);
        let now = saturday_at(hour, minute);
        let first = is_open_now(&v, &now);
        prop_assert_eq!(first, is_open_now(&v, &now));
        let current = hour * 60 + minute;
        if start == end {
            prop_assert_eq!(first, current == start);
        }
        if current == start || current == end {
            prop_assert!(first);
        }
    }
}
