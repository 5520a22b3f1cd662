//! Light/dark theme preference
//!
//! Persisted separately from the profile, as a bare `"dark"`/`"light"` string.

use crate::consts::THEME_KEY;
use crate::platform::KeyValueStore;

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Load the stored theme; anything but `"dark"` means light
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get_item(THEME_KEY) {
            Ok(Some(value)) => Self::from_str(&value).unwrap_or_default(),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Could not read theme: {}", e);
                Self::default()
            }
        }
    }

    /// Save the theme
    pub fn save(&self, store: &mut impl KeyValueStore) {
        match store.set_item(THEME_KEY, self.as_str()) {
            Ok(()) => log::info!("Theme saved ({})", self.as_str()),
            Err(e) => log::error!("Failed to save theme: {}", e),
        }
    }

    /// Flip the stored theme and return the new value
    pub fn toggle(store: &mut impl KeyValueStore) -> Self {
        let theme = Self::load(store).toggled();
        theme.save(store);
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_default_is_light() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut store = MemoryStore::new();
        assert_eq!(Theme::toggle(&mut store), Theme::Dark);
        assert_eq!(store.get_item(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert!(Theme::load(&store).is_dark());
        assert_eq!(Theme::toggle(&mut store), Theme::Light);
        assert_eq!(store.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_unknown_value_is_light() {
        let mut store = MemoryStore::new();
        store.set_item(THEME_KEY, "solarized").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }
}
