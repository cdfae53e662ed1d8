/// Progress between two prayers
///
/// All arithmetic is done in whole seconds.

use chrono::{DateTime, Duration, TimeZone};

use crate::domain::DomainError;

/// Seconds from `from` to `to`, negative when `to` is earlier
pub fn seconds_between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> i64 {
    to.clone().signed_duration_since(from.clone()).num_seconds()
}

/// Time left from `now` until `next`, truncated to whole seconds
pub fn time_remaining<Tz: TimeZone>(now: &DateTime<Tz>, next: &DateTime<Tz>) -> Duration {
    Duration::seconds(seconds_between(now, next))
}

/// Percentage of the `previous` → `next` span that has elapsed at `now`
///
/// Returns 100 once `next` has been reached or passed, and clamps the
/// result to `[0, 100]` otherwise. A span of zero or negative length is
/// `DegenerateInterval`.
pub fn progress_percent<Tz: TimeZone>(
    previous: &DateTime<Tz>,
    next: &DateTime<Tz>,
    now: &DateTime<Tz>,
) -> Result<f64, DomainError> {
    let remaining = seconds_between(now, next);
    if remaining <= 0 {
        return Ok(100.0);
    }

    let total = seconds_between(previous, next);
    if total <= 0 {
        return Err(DomainError::DegenerateInterval {
            at: next.naive_local().to_string(),
        });
    }

    let percent = 100.0 - (remaining as f64 / total as f64) * 100.0;
    Ok(percent.clamp(0.0, 100.0))
}
