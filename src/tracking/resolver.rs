/// Daily schedule resolution
///
/// Looks a calendar day up in its year's dataset and parses the five raw
/// times onto that day.

use chrono::{Datelike, NaiveDate, TimeZone};

use crate::domain::DailySchedule;
use crate::source::{day_key, ScheduleSource, SourceError};
use crate::tracking::TrackingError;

/// Resolves calendar days into `DailySchedule`s using a schedule source
#[derive(Debug, Clone)]
pub struct ScheduleResolver<S> {
    source: S,
}

impl<S: ScheduleSource> ScheduleResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve the schedule of `date` in time zone `tz`
    ///
    /// `Ok(None)` means the source has no record for that day, including
    /// when it does not cover the year at all. A time string that fails to
    /// parse fails the whole day; no partial schedule is returned.
    pub fn resolve<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        tz: &Tz,
    ) -> Result<Option<DailySchedule<Tz>>, TrackingError> {
        let record = match self.source.day(date) {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::debug!("No record for {} in the {} dataset", day_key(date), date.year());
                return Ok(None);
            }
            Err(e) if is_year_missing(&e) => {
                tracing::debug!("Source does not cover {}: {}", date.year(), e);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let schedule = DailySchedule::from_clock_strings(date, tz, record.prayer_times.in_order())?
            .with_details(
                record.hijri,
                record.event.map(|occasion| occasion.en),
            );

        tracing::debug!("Resolved schedule for {}", date);
        Ok(Some(schedule))
    }
}

/// Whether a source error only says the year is not published
fn is_year_missing(error: &SourceError) -> bool {
    matches!(
        error,
        SourceError::YearNotFound { .. } | SourceError::Status { status: 404, .. }
    )
}
