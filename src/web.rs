//! JavaScript bindings
//!
//! `HabitQuestApp` is the handle the page's UI code holds. Collections are
//! handed over as JSON strings.

use wasm_bindgen::prelude::*;

use crate::platform::{LocalStorage, SystemClock};
use crate::session;
use crate::theme::Theme;
use crate::tracker::HabitTracker;

fn to_json<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to encode for JS: {}", e);
            "null".to_string()
        }
    }
}

fn storage() -> Result<LocalStorage, JsValue> {
    LocalStorage::open().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Set or clear the `dark` class on the root element
fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

#[wasm_bindgen]
pub struct HabitQuestApp {
    tracker: HabitTracker<LocalStorage, SystemClock>,
}

#[wasm_bindgen]
impl HabitQuestApp {
    /// Load the profile from LocalStorage
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<HabitQuestApp, JsValue> {
        let tracker = HabitTracker::load(storage()?, SystemClock);
        Ok(Self { tracker })
    }

    #[wasm_bindgen(js_name = addHabit)]
    pub fn add_habit(&mut self, name: &str) -> bool {
        self.tracker.add_habit(name).is_some()
    }

    #[wasm_bindgen(js_name = removeHabit)]
    pub fn remove_habit(&mut self, id: &str) -> bool {
        self.tracker.remove_habit(id).is_some()
    }

    #[wasm_bindgen(js_name = checkHabit)]
    pub fn check_habit(&mut self, id: &str) -> bool {
        self.tracker.check_habit(id).is_some()
    }

    #[wasm_bindgen(js_name = toggleHabit)]
    pub fn toggle_habit(&mut self, id: &str) -> bool {
        self.tracker.toggle_habit(id).is_some()
    }

    /// Habits with their `completedToday` flag, as JSON
    #[wasm_bindgen(getter)]
    pub fn habits(&self) -> String {
        to_json(&self.tracker.habits())
    }

    #[wasm_bindgen(getter)]
    pub fn achievements(&self) -> String {
        to_json(&self.tracker.achievements())
    }

    #[wasm_bindgen(getter)]
    pub fn points(&self) -> f64 {
        self.tracker.points() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn level(&self) -> f64 {
        self.tracker.level() as f64
    }

    #[wasm_bindgen(getter, js_name = nextLevelAt)]
    pub fn next_level_at(&self) -> f64 {
        self.tracker.next_level_at() as f64
    }

    #[wasm_bindgen(getter, js_name = progressToNext)]
    pub fn progress_to_next(&self) -> u8 {
        self.tracker.progress_to_next()
    }

    #[wasm_bindgen(getter, js_name = unlockedCount)]
    pub fn unlocked_count(&self) -> usize {
        self.tracker.unlocked_count()
    }

    #[wasm_bindgen(getter, js_name = totalAchievements)]
    pub fn total_achievements(&self) -> usize {
        self.tracker.total_achievements()
    }
}

/// Flip the theme, update the page and return whether it is now dark
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<bool, JsValue> {
    let theme = Theme::toggle(&mut storage()?);
    apply_theme(theme);
    Ok(theme.is_dark())
}

/// Apply the stored theme to the page
#[wasm_bindgen(js_name = restoreTheme)]
pub fn restore_theme() -> Result<bool, JsValue> {
    let theme = Theme::load(&storage()?);
    apply_theme(theme);
    Ok(theme.is_dark())
}

#[wasm_bindgen]
pub fn login() -> Result<(), JsValue> {
    session::login(&mut storage()?);
    Ok(())
}

#[wasm_bindgen]
pub fn logout() -> Result<(), JsValue> {
    session::logout(&mut storage()?);
    Ok(())
}

/// Route to actually show when navigating to `route`
#[wasm_bindgen(js_name = guardRoute)]
pub fn guard_route(route: &str) -> Result<String, JsValue> {
    Ok(session::guard(&storage()?, route).to_string())
}
