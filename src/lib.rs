//! Habit Quest - A gamified daily habit tracker
//!
//! Core modules:
//! - `engine`: Habit rules (check-ins, streaks, points, levels, achievements)
//! - `persistence`: Load/save of the profile blob with fallback to defaults
//! - `platform`: Browser/native abstraction (key-value storage, clock)
//! - `tracker`: Owned view-model that wires engine, storage and clock together
//! - `theme` / `session`: Small persisted UI preferences

pub mod engine;
pub mod habit;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod theme;
pub mod tracker;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use engine::{Achievement, HabitEvent, ProfileState, Progress};
pub use habit::Habit;
pub use theme::Theme;
pub use tracker::{HabitTracker, HabitView};

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Application constants
pub mod consts {
    /// LocalStorage key holding the serialized profile
    pub const PROFILE_KEY: &str = "habitQuest.v1";
    /// LocalStorage key holding the theme preference
    pub const THEME_KEY: &str = "theme";
    /// LocalStorage key holding the placeholder login token
    pub const SESSION_KEY: &str = "userToken";

    /// Base points for every check-in
    pub const POINTS_PER_CHECK: u64 = 10;
    /// Points needed to advance one level
    pub const POINTS_PER_LEVEL: u64 = 100;

    /// Exact streak values that award bonus points, with the bonus
    pub const STREAK_BONUSES: [(u32, u64); 3] = [(3, 5), (7, 10), (30, 30)];
}

/// The calendar day before `date`
#[inline]
pub fn yesterday(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(1)).unwrap_or(NaiveDate::MIN)
}

/// Deserialize a field, treating an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a timestamp, using the current time for `null`
pub(crate) fn null_as_now<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(Utc::now))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yesterday_crosses_month_and_year() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(yesterday(d), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        let leap = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(yesterday(leap), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
