//! Profile state and the habit state transitions
//!
//! Everything that gets persisted lives in [`ProfileState`]. Operations take
//! the evaluation date explicitly so they stay deterministic under test.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::{Progress, points_for_streak};
use crate::consts::POINTS_PER_CHECK;
use crate::habit::Habit;

/// Something that changed as the result of an engine operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitEvent {
    /// A habit was appended to the collection
    Added { id: String },
    /// A habit was removed
    Removed { id: String },
    /// A habit was checked off for today
    Checked { id: String, streak: u32, points: u64 },
    /// Today's check-in was undone
    Unchecked { id: String, points: u64 },
}

/// The whole persisted profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileState {
    /// Habits in creation order
    #[serde(deserialize_with = "crate::null_as_default")]
    pub habits: Vec<Habit>,
    /// Accumulated points
    #[serde(deserialize_with = "crate::null_as_default")]
    pub points: u64,
    /// First use of the profile
    #[serde(deserialize_with = "crate::null_as_now")]
    pub created_at: DateTime<Utc>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl ProfileState {
    /// Create an empty profile
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            habits: Vec::new(),
            points: 0,
            created_at,
        }
    }

    /// Look up a habit by id
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    fn habit_mut(&mut self, id: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    /// Add a habit named `name` (trimmed). Blank names are ignored.
    pub fn add_habit(&mut self, name: &str, now: DateTime<Utc>) -> Option<HabitEvent> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }

        let habit = Habit::new(trimmed, now);
        let id = habit.id.clone();
        self.habits.push(habit);
        Some(HabitEvent::Added { id })
    }

    /// Remove the habit with `id`, if present
    pub fn remove_habit(&mut self, id: &str) -> Option<HabitEvent> {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        if self.habits.len() == before {
            return None;
        }
        Some(HabitEvent::Removed { id: id.to_string() })
    }

    /// Mark a habit done for `today`.
    ///
    /// No-op if the habit is unknown or already checked today. The streak
    /// continues only when the previous check-in was exactly yesterday.
    pub fn check_habit(&mut self, id: &str, today: NaiveDate) -> Option<HabitEvent> {
        let habit = self.habit_mut(id)?;
        if habit.completed_on(today) {
            return None;
        }

        habit.streak = if habit.follows_streak(today) {
            habit.streak.saturating_add(1)
        } else {
            1
        };
        habit.last_checked = Some(today);
        habit.total = habit.total.saturating_add(1);

        let streak = habit.streak;
        let gained = points_for_streak(streak);
        self.points = self.points.saturating_add(gained);

        Some(HabitEvent::Checked {
            id: id.to_string(),
            streak,
            points: gained,
        })
    }

    /// Check a habit, or undo today's check-in if it is already done.
    ///
    /// Undo clears `last_checked`, steps `total` and `streak` back by one and
    /// takes back the base award only. Streak bonuses stay awarded.
    pub fn toggle_habit(&mut self, id: &str, today: NaiveDate) -> Option<HabitEvent> {
        let habit = self.habit_mut(id)?;
        if !habit.completed_on(today) {
            return self.check_habit(id, today);
        }

        habit.last_checked = None;
        habit.total = habit.total.saturating_sub(1);
        habit.streak = habit.streak.saturating_sub(1);

        let before = self.points;
        self.points = self.points.saturating_sub(POINTS_PER_CHECK);

        Some(HabitEvent::Unchecked {
            id: id.to_string(),
            points: before - self.points,
        })
    }

    /// Check-ins across all habits
    pub fn check_ins(&self) -> u64 {
        self.habits.iter().map(|h| u64::from(h.total)).sum()
    }

    /// Longest current streak of any habit
    pub fn best_streak(&self) -> u32 {
        self.habits.iter().map(|h| h.streak).max().unwrap_or(0)
    }

    /// Level progression for the current points
    pub fn progress(&self) -> Progress {
        Progress::from_points(self.points)
    }
}
