//! Light/dark theme preference.
//!
//! The theme is plain state handed to whatever renders it; the only side
//! effect is one [`PreferenceStore::write`] per toggle. Browser code backs the
//! store with `localStorage`, tests use [`MemoryStore`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key for the boolean dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// String key-value persistence, e.g. browser `localStorage`.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Value for the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// The stored preference, if the user ever toggled.
#[must_use]
pub fn stored_theme(store: &impl PreferenceStore) -> Option<Theme> {
    store.read(DARK_MODE_KEY).map(|raw| Theme::from_dark(raw == "true"))
}

/// Stored preference, else the system color-scheme hint.
#[must_use]
pub fn load_theme(store: &impl PreferenceStore, system_prefers_dark: bool) -> Theme {
    stored_theme(store).unwrap_or(Theme::from_dark(system_prefers_dark))
}

/// Flip the theme and persist the new value.
pub fn toggle_theme(current: Theme, store: &mut impl PreferenceStore) -> Theme {
    let next = current.toggled();
    store.write(DARK_MODE_KEY, if next.is_dark() { "true" } else { "false" });
    tracing::debug!(theme = next.as_str(), "theme toggled");
    next
}

/// In-process store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}
