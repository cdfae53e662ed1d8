/// Property tests for parsing, schedule order, locating and progress
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike, Utc};
use prayer_times::*;
use proptest::prelude::*;

use crate::common::{date, full_year};

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap()
}

fn tracker_2025() -> PrayerTracker<InMemorySource> {
    PrayerTracker::new(InMemorySource::new().with_year(2025, full_year(2025)))
}

proptest! {
    /// Any valid 12-hour string parses, and formatting gives back the same clock time
    #[test]
    fn parse_then_format_round_trips(
        hour in 1u32..=12,
        minute in 0u32..60,
        is_pm in any::<bool>(),
        upper in any::<bool>(),
        pad_hour in any::<bool>(),
    ) {
        let meridiem = match (is_pm, upper) {
            (true, true) => "PM",
            (true, false) => "pm",
            (false, true) => "AM",
            (false, false) => "am",
        };
        let input = if pad_hour {
            format!(" {:02}:{:02} {} ", hour, minute, meridiem)
        } else {
            format!("{}:{:02} {}", hour, minute, meridiem)
        };

        let parsed = parse_prayer_time(&reference(), &input).unwrap();
        let expected_hour = (hour % 12) + if is_pm { 12 } else { 0 };
        prop_assert_eq!(parsed.hour(), expected_hour);
        prop_assert_eq!(parsed.minute(), minute);
        prop_assert_eq!(parsed.second(), 0);
        prop_assert_eq!(parsed.date_naive(), reference().date_naive());

        let formatted = format_prayer_time(&parsed);
        let reparsed = parse_prayer_time(&reference(), &formatted).unwrap();
        prop_assert_eq!(reparsed, parsed);
    }

    /// Trailing text after the meridiem is always rejected
    #[test]
    fn trailing_garbage_is_rejected(
        hour in 1u32..=12,
        minute in 0u32..60,
        garbage in "[a-z0-9:]{1,6}",
    ) {
        let input = format!("{}:{:02} pm {}", hour, minute, garbage);
        prop_assert!(parse_prayer_time(&reference(), &input).is_err());
    }

    /// Hours outside 1-12 and minutes outside 0-59 are rejected
    #[test]
    fn out_of_range_clock_is_rejected(hour in 13u32..100, minute in 60u32..100) {
        let bad_hour = format!("{}:00 am", hour);
        let bad_minute = format!("10:{} am", minute);
        prop_assert!(parse_prayer_time(&reference(), &bad_hour).is_err());
        prop_assert!(parse_prayer_time(&reference(), &bad_minute).is_err());
    }

    /// Resolved schedules are in non-decreasing order
    #[test]
    fn resolved_schedules_are_ordered(offset in 0i64..365) {
        let day = date(2025, 1, 1) + Duration::days(offset);
        let schedule = tracker_2025().daily_schedule(day, &Utc).unwrap();

        prop_assert!(schedule.check_order().is_ok());
        for pair in schedule.events().windows(2) {
            prop_assert!(pair[0].instant() <= pair[1].instant());
        }
    }

    /// Previous and next always bracket now, borrowing across midnight
    #[test]
    fn locate_brackets_now(seconds in 0u32..86_400) {
        let tracker = tracker_2025();
        let today = date(2025, 6, 15);
        let midnight = today.and_hms_opt(0, 0, 0).unwrap();
        let now = Utc.from_utc_datetime(&(midnight + Duration::seconds(seconds as i64)));
        let schedule = tracker.daily_schedule(today, &Utc).unwrap();

        let adjacent = locate(tracker.resolver(), &now, &schedule).unwrap();
        prop_assert!(adjacent.previous.instant() < &now);
        prop_assert!(&now <= adjacent.next.instant());

        let fajr = schedule.first().instant().clone();
        let isha = schedule.last().instant().clone();
        if now <= fajr {
            prop_assert_eq!(adjacent.previous.name(), PrayerName::Isha);
            prop_assert_eq!(adjacent.previous.instant().date_naive(), date(2025, 6, 14));
            prop_assert_eq!(adjacent.next.instant(), &fajr);
        } else if now > isha {
            prop_assert_eq!(adjacent.previous.instant(), &isha);
            prop_assert_eq!(adjacent.next.name(), PrayerName::Fajr);
            prop_assert_eq!(adjacent.next.instant().date_naive(), date(2025, 6, 16));
        } else {
            prop_assert_eq!(adjacent.previous.instant().date_naive(), today);
            prop_assert_eq!(adjacent.next.instant().date_naive(), today);
            prop_assert!(adjacent.previous.name() < adjacent.next.name());
        }
    }

    /// Progress stays in [0, 100] and never decreases as now advances
    #[test]
    fn progress_is_bounded_and_monotonic(
        span in 1i64..86_400,
        a in 0i64..86_400,
        b in 0i64..86_400,
    ) {
        let previous = reference();
        let next = previous + Duration::seconds(span);
        let (early, late) = if a <= b { (a, b) } else { (b, a) };

        let p_early = progress_percent(&previous, &next, &(previous + Duration::seconds(early))).unwrap();
        let p_late = progress_percent(&previous, &next, &(previous + Duration::seconds(late))).unwrap();

        prop_assert!((0.0..=100.0).contains(&p_early));
        prop_assert!((0.0..=100.0).contains(&p_late));
        prop_assert!(p_early <= p_late);
    }

    /// Progress is 0 at the previous prayer and 100 from the next prayer on
    #[test]
    fn progress_endpoints(span in 1i64..86_400, overshoot in 0i64..3_600) {
        let previous = reference();
        let next = previous + Duration::seconds(span);

        prop_assert_eq!(progress_percent(&previous, &next, &previous).unwrap(), 0.0);
        prop_assert_eq!(
            progress_percent(&previous, &next, &(next + Duration::seconds(overshoot))).unwrap(),
            100.0
        );
    }
}

#[test]
fn test_day_outside_dataset_is_unavailable() {
    let tracker = tracker_2025();
    let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    assert!(matches!(
        tracker.daily_schedule(day, &Utc),
        Err(TrackingError::ScheduleUnavailable { .. })
    ));
}
