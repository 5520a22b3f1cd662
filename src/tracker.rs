//! Habit tracker view-model
//!
//! Owns the profile together with its storage backend and clock. Every
//! mutation that changes the profile is written through to storage
//! immediately; derived values are recomputed on each read.

use serde::Serialize;

use crate::engine::{Achievement, HabitEvent, ProfileState, Progress, achievements};
use crate::habit::Habit;
use crate::persistence::{load_profile, save_profile};
use crate::platform::{Clock, KeyValueStore};

/// A habit plus whether it is done for today
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitView {
    #[serde(flatten)]
    pub habit: Habit,
    pub completed_today: bool,
}

/// Profile + storage + clock, the surface the UI talks to
pub struct HabitTracker<S: KeyValueStore, C: Clock> {
    state: ProfileState,
    store: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> HabitTracker<S, C> {
    /// Load the stored profile (or start an empty one)
    pub fn load(store: S, clock: C) -> Self {
        let state = load_profile(&store, clock.now());
        Self { state, store, clock }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Add a habit; blank names are ignored
    pub fn add_habit(&mut self, name: &str) -> Option<HabitEvent> {
        let event = self.state.add_habit(name, self.clock.now());
        self.commit(event)
    }

    /// Remove a habit by id
    pub fn remove_habit(&mut self, id: &str) -> Option<HabitEvent> {
        let event = self.state.remove_habit(id);
        self.commit(event)
    }

    /// Mark a habit done for today (no-op if already done)
    pub fn check_habit(&mut self, id: &str) -> Option<HabitEvent> {
        let event = self.state.check_habit(id, self.clock.today());
        self.commit(event)
    }

    /// Mark a habit done, or undo today's check-in
    pub fn toggle_habit(&mut self, id: &str) -> Option<HabitEvent> {
        let event = self.state.toggle_habit(id, self.clock.today());
        self.commit(event)
    }

    /// Persist after a state change and log what happened
    fn commit(&mut self, event: Option<HabitEvent>) -> Option<HabitEvent> {
        let event = event?;
        match &event {
            HabitEvent::Added { id } => log::info!("Habit added: {}", id),
            HabitEvent::Removed { id } => log::info!("Habit removed: {}", id),
            HabitEvent::Checked { id, streak, points } => {
                log::info!("Habit {} checked (streak {}, +{} pts)", id, streak, points)
            }
            HabitEvent::Unchecked { id, points } => {
                log::info!("Habit {} unchecked (-{} pts)", id, points)
            }
        }

        if let Err(e) = save_profile(&mut self.store, &self.state) {
            log::error!("Failed to save profile: {}", e);
        }
        Some(event)
    }

    /// Habits in creation order with today's completion flag
    pub fn habits(&self) -> Vec<HabitView> {
        let today = self.clock.today();
        self.state
            .habits
            .iter()
            .map(|habit| HabitView {
                habit: habit.clone(),
                completed_today: habit.completed_on(today),
            })
            .collect()
    }

    pub fn points(&self) -> u64 {
        self.state.points
    }

    pub fn progress(&self) -> Progress {
        self.state.progress()
    }

    pub fn level(&self) -> u64 {
        self.progress().level
    }

    pub fn next_level_at(&self) -> u64 {
        self.progress().next_level_at
    }

    pub fn progress_to_next(&self) -> u8 {
        self.progress().progress_to_next
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        achievements(&self.state)
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements().iter().filter(|a| a.unlocked).count()
    }

    pub fn total_achievements(&self) -> usize {
        crate::engine::ACHIEVEMENTS.len()
    }
}
