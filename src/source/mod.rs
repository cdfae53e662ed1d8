/// Schedule sources: where yearly prayer time data comes from
///
/// The tracking logic only needs one read operation, "give me the dataset
/// for this year". This module defines that seam and the implementations
/// used by the command line tool: a JSON file cache, a remote fetcher, the
/// cache-or-fetch combination of both, and an in-memory source.

pub mod dataset;
pub mod file;
pub mod remote;
pub mod cached;
pub mod memory;

// Re-export the main source types
pub use dataset::*;
pub use file::*;
pub use remote::*;
pub use cached::*;
pub use memory::*;

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Errors that can occur while obtaining a yearly dataset
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetching prayer times for {year} returned status {status}")]
    Status { year: i32, status: u16 },

    #[error("No cached prayer times for {year} and fetching is disabled")]
    CacheMiss { year: i32 },

    #[error("No data for year {year}")]
    YearNotFound { year: i32 },
}

/// Trait defining the read interface for yearly prayer time data
///
/// Implementations own their caching and network policy. Callers ask for a
/// year and get the full dataset back, or for a single day's record.
pub trait ScheduleSource {
    /// Get every day record published for `year`
    fn year(&self, year: i32) -> Result<YearDataset, SourceError>;

    /// Get the record of one calendar day, `Ok(None)` if its year has no entry for it
    fn day(&self, date: NaiveDate) -> Result<Option<DayRecord>, SourceError> {
        Ok(self.year(date.year())?.day(&day_key(date)).cloned())
    }
}

impl<S: ScheduleSource + ?Sized> ScheduleSource for &S {
    fn year(&self, year: i32) -> Result<YearDataset, SourceError> {
        (**self).year(year)
    }

    fn day(&self, date: NaiveDate) -> Result<Option<DayRecord>, SourceError> {
        (**self).day(date)
    }
}
