/// Prayer events and daily schedules
///
/// A `DailySchedule` is one calendar day's five prayer events, always held
/// in `PrayerName::ALL` order. Schedules are plain values: they are built
/// per query and owned by whoever asked for them.

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::domain::{parse_prayer_time_on, DomainError, PrayerName};

/// A named prayer at an absolute instant
#[derive(Debug, Clone)]
pub struct PrayerEvent<Tz: TimeZone> {
    name: PrayerName,
    instant: DateTime<Tz>,
}

impl<Tz: TimeZone> PrayerEvent<Tz> {
    pub fn new(name: PrayerName, instant: DateTime<Tz>) -> Self {
        Self { name, instant }
    }

    pub fn name(&self) -> PrayerName {
        self.name
    }

    pub fn instant(&self) -> &DateTime<Tz> {
        &self.instant
    }
}

/// The five prayer events of one calendar day
#[derive(Debug, Clone)]
pub struct DailySchedule<Tz: TimeZone> {
    date: NaiveDate,
    events: [PrayerEvent<Tz>; 5],
    hijri: Option<String>,
    occasion: Option<String>,
}

impl<Tz: TimeZone> DailySchedule<Tz> {
    /// Create a schedule from already built events
    ///
    /// The events must be named in `PrayerName::ALL` order. Their instants
    /// are not checked here; use `check_order` for that.
    pub fn new(date: NaiveDate, events: [PrayerEvent<Tz>; 5]) -> Result<Self, DomainError> {
        for (event, expected) in events.iter().zip(PrayerName::ALL) {
            if event.name != expected {
                return Err(DomainError::InvariantViolation {
                    message: format!(
                        "schedule for {} has {} where {} was expected",
                        date, event.name, expected
                    ),
                });
            }
        }

        Ok(Self {
            date,
            events,
            hijri: None,
            occasion: None,
        })
    }

    /// Build a schedule by parsing five raw clock strings onto `date`
    ///
    /// `raw` is read in `PrayerName::ALL` order. The first string that
    /// fails to parse aborts the whole schedule with its error.
    pub fn from_clock_strings<S: AsRef<str>>(
        date: NaiveDate,
        tz: &Tz,
        raw: [S; 5],
    ) -> Result<Self, DomainError> {
        let mut events = Vec::with_capacity(PrayerName::ALL.len());
        for (name, time) in PrayerName::ALL.into_iter().zip(raw.iter()) {
            let instant = parse_prayer_time_on(date, tz, time.as_ref())?;
            events.push(PrayerEvent::new(name, instant));
        }

        let events: [PrayerEvent<Tz>; 5] =
            events
                .try_into()
                .map_err(|_| DomainError::InvariantViolation {
                    message: format!("schedule for {} does not have five prayers", date),
                })?;

        Self::new(date, events)
    }

    /// Attach the Hijri date and the day's occasion, if the source has them
    pub fn with_details(mut self, hijri: Option<String>, occasion: Option<String>) -> Self {
        self.hijri = hijri.filter(|h| !h.trim().is_empty());
        self.occasion = occasion.filter(|o| !o.trim().is_empty());
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn events(&self) -> &[PrayerEvent<Tz>; 5] {
        &self.events
    }

    pub fn get(&self, name: PrayerName) -> &PrayerEvent<Tz> {
        &self.events[name.index()]
    }

    /// Fajr of this day
    pub fn first(&self) -> &PrayerEvent<Tz> {
        &self.events[0]
    }

    /// Isha of this day
    pub fn last(&self) -> &PrayerEvent<Tz> {
        &self.events[self.events.len() - 1]
    }

    pub fn hijri(&self) -> Option<&str> {
        self.hijri.as_deref()
    }

    pub fn occasion(&self) -> Option<&str> {
        self.occasion.as_deref()
    }

    /// Verify the events are non-decreasing in time
    pub fn check_order(&self) -> Result<(), DomainError> {
        for pair in self.events.windows(2) {
            if pair[1].instant < pair[0].instant {
                return Err(DomainError::InvariantViolation {
                    message: format!(
                        "schedule for {}: {} comes before {}",
                        self.date, pair[1].name, pair[0].name
                    ),
                });
            }
        }
        Ok(())
    }
}
