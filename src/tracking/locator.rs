/// Locating the previous and next prayer around an instant
///
/// Rather than wrapping indices around midnight, the locator lays out an
/// explicit seven-slot window: yesterday's Isha, today's five prayers,
/// tomorrow's Fajr. Any instant on today's date falls inside it.

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::domain::{DailySchedule, DomainError, PrayerEvent};
use crate::source::ScheduleSource;
use crate::tracking::{ScheduleResolver, TrackingError};

/// Number of events in a `PrayerWindow`
pub const WINDOW_LEN: usize = 7;

/// The prayers immediately before and after an instant
#[derive(Debug, Clone)]
pub struct AdjacentPrayers<Tz: TimeZone> {
    pub previous: PrayerEvent<Tz>,
    pub next: PrayerEvent<Tz>,
}

/// Yesterday's last prayer, today's prayers and tomorrow's first prayer
#[derive(Debug, Clone)]
pub struct PrayerWindow<Tz: TimeZone> {
    events: [PrayerEvent<Tz>; WINDOW_LEN],
}

impl<Tz: TimeZone> PrayerWindow<Tz> {
    /// Build the window, checking that it is in chronological order
    pub fn new(
        yesterday: &DailySchedule<Tz>,
        today: &DailySchedule<Tz>,
        tomorrow: &DailySchedule<Tz>,
    ) -> Result<Self, DomainError> {
        let [fajr, dhuhr, asr, maghrib, isha] = today.events().clone();
        let events = [
            yesterday.last().clone(),
            fajr,
            dhuhr,
            asr,
            maghrib,
            isha,
            tomorrow.first().clone(),
        ];

        for pair in events.windows(2) {
            if pair[1].instant() < pair[0].instant() {
                return Err(DomainError::InvariantViolation {
                    message: format!(
                        "prayers around {} are out of order: {} at {} precedes {} at {}",
                        today.date(),
                        pair[1].name(),
                        pair[1].instant().naive_local(),
                        pair[0].name(),
                        pair[0].instant().naive_local(),
                    ),
                });
            }
        }

        Ok(Self { events })
    }

    pub fn events(&self) -> &[PrayerEvent<Tz>; WINDOW_LEN] {
        &self.events
    }

    /// Find the prayers bracketing `now`
    ///
    /// The next prayer is the first one at or after `now` (a prayer starting
    /// exactly now counts as next); the previous prayer is the one before it.
    pub fn bracket(&self, now: &DateTime<Tz>) -> Result<AdjacentPrayers<Tz>, DomainError> {
        let next_index = self
            .events
            .iter()
            .position(|event| event.instant() >= now)
            .ok_or_else(|| DomainError::InvariantViolation {
                message: format!("no prayer at or after {}", now.naive_local()),
            })?;

        if next_index == 0 {
            return Err(DomainError::InvariantViolation {
                message: format!("{} is before the previous day's last prayer", now.naive_local()),
            });
        }

        Ok(AdjacentPrayers {
            previous: self.events[next_index - 1].clone(),
            next: self.events[next_index].clone(),
        })
    }
}

/// Find the previous and next prayers around `now`
///
/// `today` must be the schedule of `now`'s calendar date. Yesterday's and
/// tomorrow's schedules are resolved through `resolver`; if either is
/// unavailable the lookup fails.
pub fn locate<S, Tz>(
    resolver: &ScheduleResolver<S>,
    now: &DateTime<Tz>,
    today: &DailySchedule<Tz>,
) -> Result<AdjacentPrayers<Tz>, TrackingError>
where
    S: ScheduleSource,
    Tz: TimeZone,
{
    let date = now.date_naive();
    let tz = now.timezone();

    let yesterday = resolve_adjacent(resolver, date, date.pred_opt(), &tz, "yesterday")?;
    let tomorrow = resolve_adjacent(resolver, date, date.succ_opt(), &tz, "tomorrow")?;

    let window = PrayerWindow::new(&yesterday, today, &tomorrow)?;
    let adjacent = window.bracket(now)?;

    tracing::debug!(
        "Previous prayer {} at {}, next prayer {} at {}",
        adjacent.previous.name(),
        adjacent.previous.instant().naive_local(),
        adjacent.next.name(),
        adjacent.next.instant().naive_local()
    );
    Ok(adjacent)
}

fn resolve_adjacent<S, Tz>(
    resolver: &ScheduleResolver<S>,
    today: NaiveDate,
    adjacent: Option<NaiveDate>,
    tz: &Tz,
    label: &str,
) -> Result<DailySchedule<Tz>, TrackingError>
where
    S: ScheduleSource,
    Tz: TimeZone,
{
    let Some(adjacent) = adjacent else {
        return Err(TrackingError::AdjacentResolutionFailed {
            date: today,
            reason: format!("{} is outside the supported calendar", label),
            source: None,
        });
    };

    match resolver.resolve(adjacent, tz) {
        Ok(Some(schedule)) => Ok(schedule),
        Ok(None) => Err(TrackingError::AdjacentResolutionFailed {
            date: today,
            reason: format!("no schedule for {} ({})", label, adjacent),
            source: None,
        }),
        Err(e) => Err(TrackingError::AdjacentResolutionFailed {
            date: today,
            reason: format!("{} ({}): {}", label, adjacent, e),
            source: Some(Box::new(e)),
        }),
    }
}
