//! Persisted user preferences: theme and language.
//!
//! The only data this dashboard stores. Both keys hold plain attribute
//! strings; anything unreadable falls back to the defaults (light, English).

use crate::browser::storage::{Storage, StorageError};
use tablero_core::{Locale, ThemeMode};

/// localStorage key for the color mode.
pub const THEME_KEY: &str = "theme";
/// localStorage key for the language.
pub const LANGUAGE_KEY: &str = "language";

/// Typed access to the two persisted preferences.
#[derive(Debug, Default)]
pub struct Preferences {
    storage: Storage,
}

impl Preferences {
    /// Preferences backed by localStorage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Storage::local(),
        }
    }

    /// Preferences over an explicit storage (used by tests).
    #[must_use]
    pub const fn with_storage(storage: Storage) -> Self {
        Self { storage }
    }

    /// Stored theme, defaulting to light.
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.storage
            .get(THEME_KEY)
            .and_then(|value| ThemeMode::parse(&value))
            .unwrap_or_default()
    }

    /// Persist the theme.
    pub fn set_theme(&self, theme: ThemeMode) -> Result<(), StorageError> {
        self.storage.set(THEME_KEY, theme.as_str())
    }

    /// Stored locale, defaulting to English.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.storage
            .get(LANGUAGE_KEY)
            .and_then(|value| Locale::parse(&value))
            .unwrap_or_default()
    }

    /// Persist the locale.
    pub fn set_locale(&self, locale: Locale) -> Result<(), StorageError> {
        self.storage.set(LANGUAGE_KEY, locale.as_str())
    }
}
