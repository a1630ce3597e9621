//! Theme Preference
//!
//! Light/dark/system preference persisted in local storage and applied to
//! the document as a `data-theme` attribute the stylesheet keys off.

use leptos::*;

const THEME_KEY: &str = "renograph_theme";

/// User-facing theme preference
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl ThemePreference {
    /// Persisted string form
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Parse a persisted value; anything unrecognized falls back to `System`
    pub fn from_stored(value: &str) -> Self {
        match value {
            "light" => ThemePreference::Light,
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    /// Label for the switcher control
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }
}

/// Theme store provided through context
#[derive(Clone)]
pub struct ThemeStore {
    pub preference: RwSignal<ThemePreference>,
}

impl ThemeStore {
    /// Persist and apply a new preference
    pub fn set(&self, preference: ThemePreference) {
        persist_preference(preference);
        apply_preference(preference);
        self.preference.set(preference);
    }
}

/// Provide the theme store, restoring and applying the persisted preference
pub fn provide_theme_store() {
    let preference = load_preference();
    apply_preference(preference);

    provide_context(ThemeStore {
        preference: create_rw_signal(preference),
    });
}

fn load_preference() -> ThemePreference {
    let stored = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            storage.get_item(THEME_KEY).ok().flatten()
        } else {
            None
        }
    } else {
        None
    };

    stored
        .map(|value| ThemePreference::from_stored(&value))
        .unwrap_or(ThemePreference::System)
}

fn persist_preference(preference: ThemePreference) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(THEME_KEY, preference.as_str());
        }
    }
}

/// Set `data-theme` on the root element, resolving `System` against the
/// browser's color-scheme preference
fn apply_preference(preference: ThemePreference) {
    let resolved = match preference {
        ThemePreference::Light => "light",
        ThemePreference::Dark => "dark",
        ThemePreference::System => {
            if system_prefers_dark() {
                "dark"
            } else {
                "light"
            }
        }
    };

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", resolved);
        }
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_strings_round_trip() {
        for preference in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(ThemePreference::from_stored(preference.as_str()), preference);
        }
    }

    #[test]
    fn test_unknown_stored_value_falls_back_to_system() {
        assert_eq!(ThemePreference::from_stored("solarized"), ThemePreference::System);
        assert_eq!(ThemePreference::from_stored(""), ThemePreference::System);
    }
}
