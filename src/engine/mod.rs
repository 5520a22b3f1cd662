//! Habit rules module
//!
//! All gamification logic lives here. This module must stay pure:
//! - "Today" is always passed in, never read from a clock
//! - Invalid input is absorbed as a no-op, nothing here returns an error
//! - No storage or platform dependencies

pub mod achievements;
pub mod scoring;
pub mod state;

pub use achievements::{ACHIEVEMENTS, Achievement, AchievementDef, achievements};
pub use scoring::{Progress, points_for_streak, streak_bonus};
pub use state::{HabitEvent, ProfileState};
