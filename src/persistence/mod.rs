//! Profile save/load
//!
//! The whole profile is one JSON blob under [`PROFILE_KEY`]. Loading never
//! fails the caller: a missing or unreadable blob yields an empty profile.
//!
//! There is no cross-tab locking; the last writer wins.

use chrono::{DateTime, Utc};

use crate::consts::PROFILE_KEY;
use crate::engine::ProfileState;
use crate::platform::{KeyValueStore, StorageError};

/// Errors from reading or writing the profile blob
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("malformed profile data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and decode the stored profile, `None` if nothing is stored
pub fn try_load_profile(
    store: &impl KeyValueStore,
) -> Result<Option<ProfileState>, PersistenceError> {
    let Some(json) = store.get_item(PROFILE_KEY)? else {
        return Ok(None);
    };
    let state = serde_json::from_str(&json)?;
    Ok(Some(state))
}

/// Load the stored profile, falling back to an empty one created at `now`
pub fn load_profile(store: &impl KeyValueStore, now: DateTime<Utc>) -> ProfileState {
    match try_load_profile(store) {
        Ok(Some(state)) => {
            log::info!(
                "Loaded profile ({} habits, {} points)",
                state.habits.len(),
                state.points
            );
            state
        }
        Ok(None) => {
            log::info!("No saved profile, starting fresh");
            ProfileState::new(now)
        }
        Err(e) => {
            log::warn!("Discarding unreadable profile: {}", e);
            ProfileState::new(now)
        }
    }
}

/// Serialize the full profile and overwrite the stored blob
pub fn save_profile(
    store: &mut impl KeyValueStore,
    state: &ProfileState,
) -> Result<(), PersistenceError> {
    let json = serde_json::to_string(state)?;
    store.set_item(PROFILE_KEY, &json)?;
    log::debug!("Profile saved ({} habits)", state.habits.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn test_missing_blob_gives_default() {
        let store = MemoryStore::new();
        let now = Utc::now();
        let state = load_profile(&store, now);
        assert!(state.habits.is_empty());
        assert_eq!(state.points, 0);
        assert_eq!(state.created_at, now);
    }

    #[test]
    fn test_corrupt_blob_gives_default() {
        let mut store = MemoryStore::new();
        store.set_item(PROFILE_KEY, "{not json").unwrap();
        assert!(matches!(try_load_profile(&store), Err(PersistenceError::Json(_))));
        let state = load_profile(&store, Utc::now());
        assert!(state.habits.is_empty());

        store.set_item(PROFILE_KEY, r#"{"points":-5}"#).unwrap();
        assert_eq!(load_profile(&store, Utc::now()).points, 0);
    }

    #[test]
    fn test_partial_blob_fills_defaults() {
        let mut store = MemoryStore::new();
        store
            .set_item(
                PROFILE_KEY,
                r#"{"habits":[{"id":"h1","name":"Read","lastChecked":"2024-02-03"}]}"#,
            )
            .unwrap();
        let state = load_profile(&store, Utc::now());
        assert_eq!(state.points, 0);
        assert_eq!(state.habits.len(), 1);
        assert_eq!(state.habits[0].total, 0);
        assert_eq!(
            state.habits[0].last_checked,
            NaiveDate::from_ymd_opt(2024, 2, 3)
        );
    }

    #[test]
    fn test_null_points_keeps_habits() {
        let mut store = MemoryStore::new();
        store
            .set_item(
                PROFILE_KEY,
                r#"{"habits":[{"id":"h1","name":"Read","streak":2,"total":5}],"points":null,"createdAt":"2024-01-01T00:00:00Z"}"#,
            )
            .unwrap();
        let state = load_profile(&store, Utc::now());
        assert_eq!(state.points, 0);
        assert_eq!(state.habits.len(), 1);
        assert_eq!((state.habits[0].streak, state.habits[0].total), (2, 5));
    }

    #[test]
    fn test_null_counters_default_per_habit() {
        let mut store = MemoryStore::new();
        store
            .set_item(
                PROFILE_KEY,
                r#"{"habits":[{"id":"h1","name":"Read","streak":null,"total":null,"lastChecked":null,"createdAt":null}],"points":40}"#,
            )
            .unwrap();
        let state = load_profile(&store, Utc::now());
        assert_eq!(state.points, 40);
        assert_eq!(state.habits.len(), 1);
        let habit = &state.habits[0];
        assert_eq!((habit.streak, habit.total), (0, 0));
        assert_eq!(habit.last_checked, None);
    }

    #[test]
    fn test_null_profile_fields_default() {
        let mut store = MemoryStore::new();
        store
            .set_item(PROFILE_KEY, r#"{"habits":null,"points":null,"createdAt":null}"#)
            .unwrap();
        let before = Utc::now();
        let state = try_load_profile(&store).unwrap().unwrap();
        assert!(state.habits.is_empty());
        assert_eq!(state.points, 0);
        assert!(state.created_at >= before);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut store = MemoryStore::new();
        let mut state = ProfileState::new(Utc::now());
        state.add_habit("Read", Utc::now());
        state.add_habit("Run", Utc::now());
        let id = state.habits[1].id.clone();
        state.check_habit(&id, NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());

        save_profile(&mut store, &state).unwrap();
        let loaded = load_profile(&store, Utc::now());
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_blob_uses_camel_case() {
        let mut store = MemoryStore::new();
        let state = ProfileState::new(Utc::now());
        save_profile(&mut store, &state).unwrap();
        let json = store.get_item(PROFILE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["habits"].is_array());
        assert_eq!(value["points"], 0);
        assert!(value["createdAt"].is_string());
    }
}
