/// Cache-or-fetch composition of a file cache and an upstream source
///
/// This is what the command line tool uses: read the year from disk when it
/// is there, otherwise ask the upstream source and keep a copy on disk.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::source::{day_key, DayRecord, FileCache, ScheduleSource, SourceError, YearDataset};

/// How `CachedSource` treats the file cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// Use the cache when present, fetch on a miss
    #[default]
    CacheFirst,
    /// Never fetch; a miss is an error
    Offline,
    /// Ignore existing cache files and fetch every year once
    Refresh,
}

/// A schedule source backed by a `FileCache` in front of `upstream`
///
/// Datasets are also kept in memory for the lifetime of the value, so the
/// three lookups of one tracking query read each year at most once.
#[derive(Debug)]
pub struct CachedSource<S> {
    cache: FileCache,
    upstream: S,
    mode: FetchMode,
    loaded: RefCell<HashMap<i32, YearDataset>>,
}

impl<S: ScheduleSource> CachedSource<S> {
    pub fn new(cache: FileCache, upstream: S, mode: FetchMode) -> Self {
        Self {
            cache,
            upstream,
            mode,
            loaded: RefCell::new(HashMap::new()),
        }
    }

    fn load_or_fetch(&self, year: i32) -> Result<YearDataset, SourceError> {
        if self.mode == FetchMode::Refresh {
            return self.fetch_and_store(year);
        }

        match self.cache.load(year) {
            Ok(Some(dataset)) => Ok(dataset),
            Ok(None) if self.mode == FetchMode::Offline => Err(SourceError::CacheMiss { year }),
            Ok(None) => self.fetch_and_store(year),
            Err(e) if self.mode == FetchMode::Offline => Err(e),
            Err(e) => {
                tracing::warn!("Ignoring unreadable cache for {}: {}", year, e);
                self.fetch_and_store(year)
            }
        }
    }

    fn fetch_and_store(&self, year: i32) -> Result<YearDataset, SourceError> {
        let dataset = self.upstream.year(year)?;

        // A failed write only costs a refetch next time
        if let Err(e) = self.cache.save(year, &dataset) {
            tracing::warn!("Failed to cache prayer times for {}: {}", year, e);
        }

        Ok(dataset)
    }
}

impl<S: ScheduleSource> CachedSource<S> {
    /// Run `f` on the dataset for `year`, loading it into memory first if needed
    fn with_dataset<T>(&self, year: i32, f: impl FnOnce(&YearDataset) -> T) -> Result<T, SourceError> {
        if let Some(dataset) = self.loaded.borrow().get(&year) {
            return Ok(f(dataset));
        }

        let dataset = self.load_or_fetch(year)?;
        let result = f(&dataset);
        self.loaded.borrow_mut().insert(year, dataset);
        Ok(result)
    }
}

impl<S: ScheduleSource> ScheduleSource for CachedSource<S> {
    fn year(&self, year: i32) -> Result<YearDataset, SourceError> {
        self.with_dataset(year, YearDataset::clone)
    }

    fn day(&self, date: NaiveDate) -> Result<Option<DayRecord>, SourceError> {
        let key = day_key(date);
        self.with_dataset(date.year(), |dataset| dataset.day(&key).cloned())
    }
}
