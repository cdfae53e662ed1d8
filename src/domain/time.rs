/// Parsing and formatting of 12-hour clock strings
///
/// Schedule data stores each prayer as a wall-clock string such as
/// "5:04 am". These helpers attach such a string to a calendar day in a
/// given time zone, and format timestamps back into the same shape.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Timelike};

use crate::domain::DomainError;

/// Parse a "h:mm am|pm" string onto the calendar day of `reference`
///
/// The result keeps `reference`'s time zone and has its seconds set to 0.
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn parse_prayer_time<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    input: &str,
) -> Result<DateTime<Tz>, DomainError> {
    parse_prayer_time_on(reference.date_naive(), &reference.timezone(), input)
}

/// Parse a "h:mm am|pm" string onto `date` in the time zone `tz`
pub fn parse_prayer_time_on<Tz: TimeZone>(
    date: NaiveDate,
    tz: &Tz,
    input: &str,
) -> Result<DateTime<Tz>, DomainError> {
    let clock = parse_clock(input)?;

    // Ambiguous local times (clocks turned back) resolve to the first occurrence
    tz.from_local_datetime(&date.and_time(clock))
        .earliest()
        .ok_or_else(|| invalid(input, format!("local time does not exist on {}", date)))
}

/// Parse the wall-clock part of a prayer time string
pub fn parse_clock(input: &str) -> Result<NaiveTime, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(input, "empty time string"));
    }

    let (clock, meridiem) = trimmed
        .split_once(char::is_whitespace)
        .ok_or_else(|| invalid(input, "missing am/pm"))?;

    let is_pm = match meridiem.trim_start() {
        m if m.eq_ignore_ascii_case("am") => false,
        m if m.eq_ignore_ascii_case("pm") => true,
        _ => return Err(invalid(input, "expected am or pm after the time")),
    };

    let (hour, minute) = clock
        .split_once(':')
        .ok_or_else(|| invalid(input, "expected h:mm"))?;

    if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(input, "hour must be one or two digits"));
    }
    if minute.len() != 2 || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(input, "minute must be two digits"));
    }

    let hour: u32 = hour
        .parse()
        .map_err(|_| invalid(input, "hour is not a number"))?;
    let minute: u32 = minute
        .parse()
        .map_err(|_| invalid(input, "minute is not a number"))?;

    if !(1..=12).contains(&hour) {
        return Err(invalid(input, "hour must be between 1 and 12"));
    }
    if minute > 59 {
        return Err(invalid(input, "minute must be between 0 and 59"));
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| invalid(input, "time out of range"))
}

/// Format a timestamp as "h:mm am|pm", the inverse of `parse_clock`
pub fn format_prayer_time<T: Timelike>(instant: &T) -> String {
    let (is_pm, hour) = instant.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        instant.minute(),
        if is_pm { "pm" } else { "am" }
    )
}

fn invalid(input: &str, reason: impl Into<String>) -> DomainError {
    DomainError::InvalidTime {
        input: input.to_string(),
        reason: reason.into(),
    }
}
