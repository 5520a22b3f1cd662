//! A single tracked habit
//!
//! Persisted inside the profile blob; field names follow the stored JSON
//! (`lastChecked`, `createdAt`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::yesterday;

/// A habit the user checks off once per calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier, assigned at creation
    pub id: String,
    /// Display name (trimmed, never empty)
    pub name: String,
    /// Consecutive days checked
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub streak: u32,
    /// Day of the most recent check-in
    #[serde(default)]
    pub last_checked: Option<NaiveDate>,
    /// Lifetime check-ins
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub total: u32,
    /// When the habit was created
    #[serde(default = "Utc::now", deserialize_with = "crate::null_as_now")]
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a fresh, never-checked habit with a random id
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            streak: 0,
            last_checked: None,
            total: 0,
            created_at,
        }
    }

    /// Whether the habit was already checked on `today`
    pub fn completed_on(&self, today: NaiveDate) -> bool {
        self.last_checked == Some(today)
    }

    /// Whether a check-in on `today` continues the current streak
    pub fn follows_streak(&self, today: NaiveDate) -> bool {
        self.last_checked == Some(yesterday(today))
    }
}
