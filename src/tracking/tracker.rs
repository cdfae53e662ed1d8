/// Tracking snapshot assembly
///
/// `PrayerTracker` answers the two questions the tool asks: "what are the
/// prayer times for this day" and "where are we right now between prayers".

use chrono::{DateTime, Duration, NaiveDate, TimeZone};

use crate::domain::{DailySchedule, DomainError, PrayerEvent};
use crate::source::ScheduleSource;
use crate::tracking::{locate, progress_percent, time_remaining, ScheduleResolver, TrackingError};

/// The state of the current prayer period at one instant
///
/// Built fresh for every query. `previous` and `next` may come from
/// yesterday's or tomorrow's schedule around midnight.
#[derive(Debug, Clone)]
pub struct TrackingSnapshot<Tz: TimeZone> {
    /// Schedule of the queried instant's calendar date
    pub schedule: DailySchedule<Tz>,
    pub previous: PrayerEvent<Tz>,
    pub next: PrayerEvent<Tz>,
    /// Time left until `next`, in whole seconds
    pub remaining: Duration,
    /// Elapsed share of the `previous` → `next` span, in `[0, 100]`
    pub progress: f64,
}

/// Resolves schedules and tracking snapshots from a schedule source
#[derive(Debug, Clone)]
pub struct PrayerTracker<S> {
    resolver: ScheduleResolver<S>,
}

impl<S: ScheduleSource> PrayerTracker<S> {
    pub fn new(source: S) -> Self {
        Self {
            resolver: ScheduleResolver::new(source),
        }
    }

    pub fn resolver(&self) -> &ScheduleResolver<S> {
        &self.resolver
    }

    /// Schedule of `date`, or `ScheduleUnavailable` when the source has none
    pub fn daily_schedule<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        tz: &Tz,
    ) -> Result<DailySchedule<Tz>, TrackingError> {
        self.resolver
            .resolve(date, tz)?
            .ok_or(TrackingError::ScheduleUnavailable { date })
    }

    /// Build the tracking snapshot for `now`
    pub fn snapshot<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> Result<TrackingSnapshot<Tz>, TrackingError> {
        let schedule = self.daily_schedule(now.date_naive(), &now.timezone())?;
        let adjacent = locate(&self.resolver, now, &schedule)?;

        let remaining = time_remaining(now, adjacent.next.instant());
        if remaining < Duration::zero() {
            return Err(DomainError::InvariantViolation {
                message: format!(
                    "next prayer {} at {} is before {}",
                    adjacent.next.name(),
                    adjacent.next.instant().naive_local(),
                    now.naive_local()
                ),
            }
            .into());
        }

        let progress = progress_percent(
            adjacent.previous.instant(),
            adjacent.next.instant(),
            now,
        )?;

        Ok(TrackingSnapshot {
            schedule,
            previous: adjacent.previous,
            next: adjacent.next,
            remaining,
            progress,
        })
    }
}
