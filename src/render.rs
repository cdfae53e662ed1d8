/// Terminal rendering of schedules and tracking snapshots
///
/// Every function returns a `String`; the binary decides where it goes.

use chrono::{Duration, TimeZone};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::domain::{format_prayer_time, DailySchedule, PrayerName};
use crate::tracking::TrackingSnapshot;

/// Width of the progress bar, in cells
pub const PROGRESS_BAR_WIDTH: usize = 40;

const FILLED_CELL: char = '█';
const EMPTY_CELL: char = '─';

/// "Monday 02/06/2025", followed by the Hijri date and occasion if known
pub fn render_date<Tz: TimeZone>(schedule: &DailySchedule<Tz>) -> String {
    let mut out = schedule.date().format("%A %d/%m/%Y").to_string();
    if let Some(hijri) = schedule.hijri() {
        out.push_str(&format!(" | {} AH", hijri));
    }
    if let Some(occasion) = schedule.occasion() {
        out.push('\n');
        out.push_str(occasion);
    }
    out
}

/// One header row of prayer names over one row of times
pub fn render_schedule_table<Tz: TimeZone>(schedule: &DailySchedule<Tz>) -> String {
    let mut builder = Builder::default();
    builder.push_record(schedule.events().iter().map(|event| event.name().to_string()));
    builder.push_record(
        schedule
            .events()
            .iter()
            .map(|event| format_prayer_time(event.instant())),
    );

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// "2 hours, 29 minutes to Asr"
pub fn render_time_remaining(next: PrayerName, remaining: Duration) -> String {
    format!(
        "{} hours, {} minutes to {}",
        remaining.num_hours(),
        remaining.num_minutes() % 60,
        next
    )
}

/// "Dhuhr ███───── Asr" with the filled share matching `percent`
pub fn render_progress_bar(previous: PrayerName, next: PrayerName, percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * PROGRESS_BAR_WIDTH as f64) as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);

    let mut out = String::new();
    out.push_str(previous.display_name());
    out.push(' ');
    out.extend(std::iter::repeat(FILLED_CELL).take(filled));
    out.extend(std::iter::repeat(EMPTY_CELL).take(PROGRESS_BAR_WIDTH - filled));
    out.push(' ');
    out.push_str(next.display_name());
    out
}

pub fn render_daily_schedule<Tz: TimeZone>(schedule: &DailySchedule<Tz>) -> String {
    format!("{}\n{}", render_date(schedule), render_schedule_table(schedule))
}

pub fn render_tracking<Tz: TimeZone>(snapshot: &TrackingSnapshot<Tz>) -> String {
    format!(
        "{}\n{}\n{}",
        render_daily_schedule(&snapshot.schedule),
        render_time_remaining(snapshot.next.name(), snapshot.remaining),
        render_progress_bar(snapshot.previous.name(), snapshot.next.name(), snapshot.progress),
    )
}
