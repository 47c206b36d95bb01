//! Browser `localStorage` helpers for UI preferences.
//!
//! Covers the dark mode toggle and each view's remembered filter. Only UI
//! preferences are stored here; records are never persisted.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and test builds
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
const DARK_MODE_KEY: &str = "hms_dark_mode";

/// Storage key for a view's filter, e.g. `hms_filter_patient`.
pub fn filter_key(noun: &str) -> String {
    format!("hms_filter_{}", noun.to_ascii_lowercase())
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            log::warn!("could not encode {key} for storage");
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Stored dark mode preference, falling back to the system color scheme.
pub fn read_dark_mode() -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(stored) = load_json::<bool>(DARK_MODE_KEY) {
            return stored;
        }
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply_dark_mode(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip dark mode, apply it and remember the choice.
pub fn toggle_dark_mode(current: bool) -> bool {
    let next = !current;
    apply_dark_mode(next);
    #[cfg(feature = "hydrate")]
    save_json(DARK_MODE_KEY, &next);
    next
}
