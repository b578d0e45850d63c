//! Light/dark theme choice and the CSS custom properties it drives.
//!
//! The stylesheet defines both palettes as `--l-*` and `--d-*` variables; the
//! active palette is selected by pointing each of [`THEMED_PROPERTIES`] at one
//! of them on the document root.

use crate::kv::{keys, KeyValueStore};

/// Custom properties rewritten when the theme changes.
pub const THEMED_PROPERTIES: [&str; 6] = [
    "--main-color",
    "--main-bg",
    "--login-field-bg",
    "--login-field-color",
    "--button-color",
    "--button-bg",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn palette_prefix(self) -> &'static str {
        match self {
            Theme::Light => "--l-",
            Theme::Dark => "--d-",
        }
    }

    /// `(property, value)` pairs to set on the document root.
    pub fn css_variables(self) -> Vec<(&'static str, String)> {
        THEMED_PROPERTIES
            .iter()
            .map(|prop| {
                let name = prop.trim_start_matches("--");
                (*prop, format!("var({}{name})", self.palette_prefix()))
            })
            .collect()
    }
}

/// Read the stored theme, defaulting to (and persisting) light when unset.
pub fn load_theme<S: KeyValueStore>(store: &S) -> Theme {
    match store.get(keys::THEME).as_deref().and_then(Theme::parse) {
        Some(theme) => theme,
        None => {
            store.set(keys::THEME, Theme::Light.as_str());
            Theme::Light
        }
    }
}

/// Flip the stored theme and return the new one.
pub fn toggle_theme<S: KeyValueStore>(store: &S) -> Theme {
    let next = load_theme(store).toggled();
    store.set(keys::THEME, next.as_str());
    next
}
