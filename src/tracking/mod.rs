/// Schedule tracking: resolving days and locating the current prayer period
///
/// The pieces build on each other: the resolver turns a date into a
/// `DailySchedule`, the locator finds the prayers on either side of "now"
/// (borrowing from yesterday and tomorrow at the day boundary), the
/// progress calculator measures how far "now" is between them, and the
/// tracker assembles all of it into a `TrackingSnapshot`.

pub mod resolver;
pub mod locator;
pub mod progress;
pub mod tracker;

pub use resolver::*;
pub use locator::*;
pub use progress::*;
pub use tracker::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::DomainError;
use crate::source::SourceError;

/// Errors that can occur while tracking prayer times
#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("Schedule error: {0}")]
    Domain(#[from] DomainError),

    #[error("Schedule source error: {0}")]
    Source(#[from] SourceError),

    #[error("No prayer schedule available for {date}")]
    ScheduleUnavailable { date: NaiveDate },

    #[error("Could not resolve prayers adjacent to {date}: {reason}")]
    AdjacentResolutionFailed {
        date: NaiveDate,
        reason: String,
        #[source]
        source: Option<Box<TrackingError>>,
    },
}
