/// File cache and cache-or-fetch behaviour seen through the public API
use prayer_times::*;
use tempfile::TempDir;

use crate::common::{date, full_year};

fn offline_app(dir: &TempDir) -> PrayerTimesApp {
    let mut config = AppConfig::new(dir.path().to_path_buf());
    config.fetch_mode = FetchMode::Offline;
    PrayerTimesApp::new(config).expect("Failed to create app")
}

#[test]
fn test_offline_app_reads_cached_year() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    FileCache::new(temp_dir.path())
        .save(2025, &full_year(2025))
        .expect("Failed to seed cache");

    let app = offline_app(&temp_dir);
    let schedule = app.daily_schedule(date(2025, 6, 15)).expect("Schedule should resolve");

    assert_eq!(schedule.date(), date(2025, 6, 15));
    assert_eq!(format_prayer_time(schedule.get(PrayerName::Asr).instant()), "3:30 pm");
}

#[test]
fn test_offline_app_without_cache_reports_cache_miss() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let app = offline_app(&temp_dir);

    let result = app.daily_schedule(date(2025, 6, 15));

    assert!(matches!(
        result,
        Err(AppError::Tracking(TrackingError::Source(SourceError::CacheMiss { year: 2025 })))
    ));
}

#[test]
fn test_cached_source_populates_cache_for_later_offline_use() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let upstream = InMemorySource::new().with_year(2025, full_year(2025));
    let source = CachedSource::new(FileCache::new(temp_dir.path()), upstream, FetchMode::CacheFirst);

    // First run fetches from upstream and writes the cache file
    let tracker = PrayerTracker::new(source);
    tracker
        .daily_schedule(date(2025, 6, 15), &chrono::Utc)
        .expect("Schedule should resolve");
    assert!(FileCache::new(temp_dir.path()).path_for(2025).is_file());

    // Later runs work without the upstream
    let app = offline_app(&temp_dir);
    assert!(app.daily_schedule(date(2025, 11, 1)).is_ok());
}

#[test]
fn test_day_missing_from_cached_year_is_unavailable() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut dataset = full_year(2025);
    dataset.year.retain(|record| record.gregorian != "15/06/2025");
    FileCache::new(temp_dir.path()).save(2025, &dataset).unwrap();

    let app = offline_app(&temp_dir);

    assert!(matches!(
        app.daily_schedule(date(2025, 6, 15)),
        Err(AppError::Tracking(TrackingError::ScheduleUnavailable { .. }))
    ));
}
