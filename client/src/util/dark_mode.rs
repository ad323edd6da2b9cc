//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies it to the
//! document: a `data-theme` attribute on `<html>` and the `dark-mode` class on
//! `<body>`. Toggle writes back through [`sleeplog::theme::toggle_theme`].
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native builds
//! no-op so tests stay deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use sleeplog::theme::{self, PreferenceStore, Theme};

/// `localStorage`-backed preference store. Writes are dropped when storage is
/// unavailable (private mode, quota, native builds).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                if storage.set_item(key, value).is_err() {
                    log::warn!("failed to persist {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Read the saved theme, falling back to the system color scheme.
pub fn read_preference() -> Theme {
    theme::load_theme(&LocalStorage, system_prefers_dark())
}

/// Reflect `theme` on the document.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = doc.document_element() {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
        if let Some(body) = doc.body() {
            let _ = body.class_list().toggle_with_force("dark-mode", theme.is_dark());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, persist it, and return the new value.
///
/// Rendering happens through [`apply`] when the caller stores the result.
pub fn toggle(current: Theme) -> Theme {
    theme::toggle_theme(current, &mut LocalStorage)
}
