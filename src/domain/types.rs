/// Core types shared by every layer
///
/// The five daily prayers have a fixed order. Everything that walks a day's
/// prayers (schedule resolution, locating the next prayer, rendering) reads
/// that order from `PrayerName::ALL` instead of declaring its own list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One of the five daily prayers
///
/// Variants are declared in chronological order, so the derived `Ord`
/// matches the order of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// All prayers in the order they occur during a day
    pub const ALL: [PrayerName; 5] = [
        PrayerName::Fajr,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    /// Get the display name for this prayer
    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    /// Position of this prayer within `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PrayerName::ALL
            .into_iter()
            .find(|name| name.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownPrayer(s.to_string()))
    }
}
