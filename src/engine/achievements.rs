//! Achievement badges
//!
//! Badges are never stored. They are recomputed from the profile on every read.

use serde::Serialize;

use super::state::ProfileState;

/// Static description of a badge plus its unlock rule
pub struct AchievementDef {
    pub code: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    unlocked: fn(&ProfileState) -> bool,
}

impl AchievementDef {
    /// Evaluate the badge against a profile
    pub fn evaluate(&self, state: &ProfileState) -> Achievement {
        Achievement {
            code: self.code,
            title: self.title,
            description: self.description,
            emoji: self.emoji,
            unlocked: (self.unlocked)(state),
        }
    }
}

/// A badge with its current unlock status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub code: &'static str,
    pub title: &'static str,
    #[serde(rename = "desc")]
    pub description: &'static str,
    pub emoji: &'static str,
    pub unlocked: bool,
}

/// The badge catalogue, in display order
pub const ACHIEVEMENTS: [AchievementDef; 7] = [
    AchievementDef {
        code: "first-habit",
        title: "First Step",
        description: "Create your first habit",
        emoji: "🌱",
        unlocked: |s| !s.habits.is_empty(),
    },
    AchievementDef {
        code: "first-check",
        title: "Getting Started",
        description: "Complete a habit for the first time",
        emoji: "✅",
        unlocked: |s| s.check_ins() >= 1,
    },
    AchievementDef {
        code: "streak-3",
        title: "On a Roll",
        description: "Reach a 3-day streak",
        emoji: "🔥",
        unlocked: |s| s.best_streak() >= 3,
    },
    AchievementDef {
        code: "streak-7",
        title: "Week Warrior",
        description: "Reach a 7-day streak",
        emoji: "📅",
        unlocked: |s| s.best_streak() >= 7,
    },
    AchievementDef {
        code: "checkins-30",
        title: "Dedicated",
        description: "Log 30 check-ins in total",
        emoji: "💪",
        unlocked: |s| s.check_ins() >= 30,
    },
    AchievementDef {
        code: "streak-30",
        title: "Unstoppable",
        description: "Reach a 30-day streak",
        emoji: "🏆",
        unlocked: |s| s.best_streak() >= 30,
    },
    AchievementDef {
        code: "points-200",
        title: "High Scorer",
        description: "Earn 200 points",
        emoji: "⭐",
        unlocked: |s| s.points >= 200,
    },
];

/// Evaluate every badge against `state`
pub fn achievements(state: &ProfileState) -> Vec<Achievement> {
    ACHIEVEMENTS.iter().map(|def| def.evaluate(state)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate, Utc};

    fn unlocked(state: &ProfileState) -> Vec<&'static str> {
        achievements(state)
            .into_iter()
            .filter(|a| a.unlocked)
            .map(|a| a.code)
            .collect()
    }

    #[test]
    fn test_catalogue_order_and_size() {
        let state = ProfileState::new(Utc::now());
        let list = achievements(&state);
        assert_eq!(list.len(), 7);
        assert_eq!(list[0].code, "first-habit");
        assert_eq!(list[6].code, "points-200");
        assert!(list.iter().all(|a| !a.unlocked));
    }

    #[test]
    fn test_unlocks_follow_progress() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut state = ProfileState::new(Utc::now());
        state.add_habit("Read", Utc::now());
        assert_eq!(unlocked(&state), vec!["first-habit"]);

        let id = state.habits[0].id.clone();
        for d in 0..7 {
            state.check_habit(&id, start.checked_add_days(Days::new(d)).unwrap());
        }
        // 7 x 10 + 5 + 10 = 85 points
        assert_eq!(
            unlocked(&state),
            vec!["first-habit", "first-check", "streak-3", "streak-7"]
        );

        state.points = 200;
        assert!(unlocked(&state).contains(&"points-200"));
    }

    #[test]
    fn test_badges_relock_when_habits_removed() {
        let mut state = ProfileState::new(Utc::now());
        state.add_habit("Read", Utc::now());
        let id = state.habits[0].id.clone();
        state.remove_habit(&id);
        assert!(unlocked(&state).is_empty());
    }

    #[test]
    fn test_serializes_desc_field() {
        let state = ProfileState::new(Utc::now());
        let json = serde_json::to_value(achievements(&state)).unwrap();
        assert_eq!(json[0]["desc"], "Create your first habit");
        assert_eq!(json[0]["unlocked"], false);
    }
}
