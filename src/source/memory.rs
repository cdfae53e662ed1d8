/// In-memory schedule source
///
/// Useful for embedding the tracker with data obtained elsewhere, and for
/// tests that must not touch the network or the filesystem.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::source::{day_key, DayRecord, ScheduleSource, SourceError, YearDataset};

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    years: HashMap<i32, YearDataset>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the dataset for `year`
    pub fn insert(&mut self, year: i32, dataset: YearDataset) {
        self.years.insert(year, dataset);
    }

    pub fn with_year(mut self, year: i32, dataset: YearDataset) -> Self {
        self.insert(year, dataset);
        self
    }
}

impl InMemorySource {
    fn dataset(&self, year: i32) -> Result<&YearDataset, SourceError> {
        self.years.get(&year).ok_or(SourceError::YearNotFound { year })
    }
}

impl ScheduleSource for InMemorySource {
    fn year(&self, year: i32) -> Result<YearDataset, SourceError> {
        self.dataset(year).cloned()
    }

    fn day(&self, date: NaiveDate) -> Result<Option<DayRecord>, SourceError> {
        Ok(self.dataset(date.year())?.day(&day_key(date)).cloned())
    }
}
