/// End-to-end tracking in the local time zone, through to rendered output
use chrono::{Local, TimeZone};
use prayer_times::*;
use tempfile::TempDir;

use crate::common::{date, full_year};

fn seeded_app(temp_dir: &TempDir) -> PrayerTimesApp {
    FileCache::new(temp_dir.path())
        .save(2025, &full_year(2025))
        .expect("Failed to seed cache");

    let mut config = AppConfig::new(temp_dir.path().to_path_buf());
    config.fetch_mode = FetchMode::Offline;
    PrayerTimesApp::new(config).expect("Failed to create app")
}

#[test]
fn test_tracking_renders_full_view() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let app = seeded_app(&temp_dir);
    let now = Local
        .with_ymd_and_hms(2025, 6, 15, 13, 0, 0)
        .earliest()
        .expect("local time exists");

    let snapshot = app.tracking(&now).expect("Tracking should succeed");
    assert_eq!(snapshot.previous.name(), PrayerName::Dhuhr);
    assert_eq!(snapshot.next.name(), PrayerName::Asr);

    let output = render::render_tracking(&snapshot);
    assert!(output.starts_with("Sunday 15/06/2025"));
    assert!(output.contains("2 hours, 30 minutes to Asr"));
    assert!(output.contains("Dhuhr "));
    for name in PrayerName::ALL {
        assert!(output.contains(name.display_name()));
    }
}

#[test]
fn test_schedule_for_other_day_renders_table() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let app = seeded_app(&temp_dir);

    let schedule = app.daily_schedule(date(2025, 1, 1)).expect("Schedule should resolve");
    let output = render::render_daily_schedule(&schedule);

    assert!(output.starts_with("Wednesday 01/01/2025"));
    assert!(output.contains("5:00 am"));
    assert!(output.contains("7:45 pm"));
}

#[test]
fn test_offline_new_years_eve_without_next_year_fails_adjacent_resolution() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let app = seeded_app(&temp_dir);
    let now = Local
        .with_ymd_and_hms(2025, 12, 31, 23, 0, 0)
        .earliest()
        .expect("local time exists");

    match app.tracking(&now) {
        Err(AppError::Tracking(TrackingError::AdjacentResolutionFailed { source: Some(cause), .. })) => {
            assert!(matches!(
                *cause,
                TrackingError::Source(SourceError::CacheMiss { year: 2026 })
            ));
        }
        other => panic!("expected AdjacentResolutionFailed, got {:?}", other),
    }
}
