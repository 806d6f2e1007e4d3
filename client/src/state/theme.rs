//! Light/dark display preference.
//!
//! DESIGN
//! ======
//! Purely presentational. `ThemeState::load` runs once at startup and
//! `toggle` is the only mutation; every change is written back to storage
//! before it becomes current.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the toggle button: the mode you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    /// Read the persisted preference, falling back to `Light`.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mode = store
            .get(THEME_KEY)
            .and_then(|raw| ThemeMode::parse(&raw))
            .unwrap_or_default();
        Self { mode }
    }

    pub fn mode(self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode, persist it, and return the new value.
    pub fn toggle(&mut self, store: &impl KeyValueStore) -> ThemeMode {
        let next = self.mode.flipped();
        store.set(THEME_KEY, next.as_str());
        self.mode = next;
        leptos::logging::log!("theme toggled to {}", next.as_str());
        next
    }
}
