/// Main entry point for the prayer times command line tool
///
/// This file sets up logging, parses command line arguments, and prints
/// either today's tracking view or the schedule of another day.

use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use tracing::info;

use prayer_times::{default_cache_dir, render, AppConfig, FetchMode, PrayerTimesApp, DEFAULT_SOURCE_URL};

/// Command line arguments for the prayer times tool
#[derive(Parser, Debug)]
#[command(name = "prayers", author, version, about = "Get prayer times for today", long_about = None)]
struct Args {
    /// Year of the requested day (defaults to today)
    #[arg(short, long)]
    year: Option<i32>,

    /// Month of the requested day (defaults to today)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Day of the month of the requested day (defaults to today)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=31))]
    day: Option<u32>,

    /// Directory for cached yearly data
    /// If not provided, uses a default location in the user's home directory
    #[arg(long, env = "PRAYER_TIMES_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// URL template of the yearly data; `{year}` is replaced
    #[arg(long, env = "PRAYER_TIMES_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    source_url: String,

    /// Only use cached data, never fetch
    #[arg(long, conflicts_with = "refresh")]
    offline: bool,

    /// Fetch fresh data even when it is cached
    #[arg(long)]
    refresh: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("prayer_times={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for the rendered output
        .init();

    let now = Local::now();
    let today = now.date_naive();
    let year = args.year.unwrap_or(today.year());
    let month = args.month.unwrap_or(today.month());
    let day = args.day.unwrap_or(today.day());
    let requested = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("{:04}-{:02}-{:02} is not a valid date", year, month, day))?;

    let cache_dir = match args.cache_dir {
        Some(path) => path,
        None => default_cache_dir()?,
    };

    let fetch_mode = if args.offline {
        FetchMode::Offline
    } else if args.refresh {
        FetchMode::Refresh
    } else {
        FetchMode::CacheFirst
    };

    let app = PrayerTimesApp::new(AppConfig {
        cache_dir,
        source_url: args.source_url,
        fetch_mode,
    })?;

    if requested == today {
        info!("Tracking prayers at {}", now.naive_local());
        let snapshot = app.tracking(&now)?;
        println!("{}", render::render_tracking(&snapshot));
    } else {
        info!("Showing schedule for {}", requested);
        let schedule = app.daily_schedule(requested)?;
        println!("{}", render::render_daily_schedule(&schedule));
    }

    Ok(())
}
