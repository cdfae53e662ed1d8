/// Public library interface for the prayer times tool
///
/// This module exports the schedule types, the schedule sources and the
/// tracking logic, plus `PrayerTimesApp`, which wires them together the way
/// the command line tool uses them.

use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate};
use thiserror::Error;

// Internal modules
mod domain;
mod source;
mod tracking;
pub mod render;

// Re-export public modules and types
pub use domain::*;
pub use source::*;
pub use tracking::*;

/// Errors that can occur while running the tool
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Tracking(#[from] TrackingError),

    #[error("Schedule source error: {0}")]
    Source(#[from] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where prayer time data is read from and how the cache is used
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding one JSON file per cached year
    pub cache_dir: PathBuf,
    /// URL template of the yearly datasets, containing `{year}`
    pub source_url: String,
    pub fetch_mode: FetchMode,
}

impl AppConfig {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            source_url: DEFAULT_SOURCE_URL.to_string(),
            fetch_mode: FetchMode::default(),
        }
    }
}

/// Prayer times in the local time zone, backed by the file cache and the
/// remote source
pub struct PrayerTimesApp {
    tracker: PrayerTracker<CachedSource<HttpSource>>,
}

impl PrayerTimesApp {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        tracing::info!(
            "Using cache at {} ({:?}), source {}",
            config.cache_dir.display(),
            config.fetch_mode,
            config.source_url
        );

        let upstream = HttpSource::new(config.source_url)?;
        let source = CachedSource::new(FileCache::new(config.cache_dir), upstream, config.fetch_mode);

        Ok(Self {
            tracker: PrayerTracker::new(source),
        })
    }

    /// Prayer schedule for `date` in the local time zone
    pub fn daily_schedule(&self, date: NaiveDate) -> Result<DailySchedule<Local>, AppError> {
        Ok(self.tracker.daily_schedule(date, &Local)?)
    }

    /// Where `now` falls between prayers
    pub fn tracking(&self, now: &DateTime<Local>) -> Result<TrackingSnapshot<Local>, AppError> {
        Ok(self.tracker.snapshot(now)?)
    }
}
