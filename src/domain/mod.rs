/// Domain module containing the prayer time value types
///
/// This module defines prayer names, prayer events and daily schedules,
/// plus the parser that turns "h:mm am" strings from the schedule data
/// into timestamps on a given day.

pub mod types;
pub mod time;
pub mod schedule;

// Re-export public types for easy access
pub use types::*;
pub use time::*;
pub use schedule::*;

use thiserror::Error;

/// Errors that can occur while building or inspecting schedules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid prayer time {input:?}: {reason}")]
    InvalidTime { input: String, reason: String },

    #[error("Unknown prayer name: {0}")]
    UnknownPrayer(String),

    #[error("Invariant violated: {message}")]
    InvariantViolation { message: String },

    #[error("Previous and next prayer share the same instant ({at})")]
    DegenerateInterval { at: String },
}
