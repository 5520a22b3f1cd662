//! Point awards and level progression

use serde::Serialize;

use crate::consts::{POINTS_PER_CHECK, POINTS_PER_LEVEL, STREAK_BONUSES};

/// Bonus awarded when a check-in lands exactly on a milestone streak
pub fn streak_bonus(streak: u32) -> u64 {
    STREAK_BONUSES
        .iter()
        .find(|(at, _)| *at == streak)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

/// Total points for a check-in that produced `streak`
#[inline]
pub fn points_for_streak(streak: u32) -> u64 {
    POINTS_PER_CHECK + streak_bonus(streak)
}

/// Level progression derived from accumulated points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Current level (starts at 1)
    pub level: u64,
    /// Points at which the next level is reached
    pub next_level_at: u64,
    /// Percent of the way through the current level (0-100)
    pub progress_to_next: u8,
}

impl Progress {
    /// Derive level, next threshold and percent progress from `points`
    pub fn from_points(points: u64) -> Self {
        let level = points / POINTS_PER_LEVEL + 1;
        let base = (level - 1) * POINTS_PER_LEVEL;
        let current = (points - base) as f64;
        let pct = ((current / POINTS_PER_LEVEL as f64) * 100.0).round();

        Self {
            level,
            next_level_at: level * POINTS_PER_LEVEL,
            progress_to_next: pct.clamp(0.0, 100.0) as u8,
        }
    }
}
