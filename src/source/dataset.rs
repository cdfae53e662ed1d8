/// Raw yearly prayer time data, as served by the remote source
///
/// These types mirror the JSON document one-to-one. They hold the times as
/// the strings the source published; turning them into timestamps is the
/// resolver's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format of the `gregorian` day key, e.g. "07/03/2025"
pub const DAY_KEY_FORMAT: &str = "%d/%m/%Y";

/// Canonical `dd/mm/yyyy` key for a calendar day
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// The five raw time strings of one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPrayerTimes {
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    #[serde(rename = "ishaa")]
    pub isha: String,
}

impl RawPrayerTimes {
    /// The raw strings in `PrayerName::ALL` order
    pub fn in_order(&self) -> [&str; 5] {
        [&self.fajr, &self.dhuhr, &self.asr, &self.maghrib, &self.isha]
    }
}

/// A notable occasion on a given day, in English and Arabic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occasion {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

/// One day of the yearly dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub week_id: u32,
    /// Day key in `dd/mm/yyyy` form
    pub gregorian: String,
    #[serde(default)]
    pub hijri: Option<String>,
    pub prayer_times: RawPrayerTimes,
    #[serde(default)]
    pub event: Option<Occasion>,
}

/// All day records published for one year
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearDataset {
    pub year: Vec<DayRecord>,
    #[serde(default)]
    pub sha1: Option<String>,
}

impl YearDataset {
    /// Find the record for a `dd/mm/yyyy` key
    pub fn day(&self, key: &str) -> Option<&DayRecord> {
        self.year.iter().find(|record| record.gregorian == key)
    }

    pub fn len(&self) -> usize {
        self.year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_empty()
    }
}
