//! Render parameters shared by all chart renderers.

use serde::{Deserialize, Serialize};
use tablero_core::{ChartPalette, Locale, ThemeMode};

/// Explicit render parameters: the two externally-owned flags every renderer
/// reads. Selected once per render call; a renderer never observes a partial
/// theme or locale change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderContext {
    /// Current color mode
    pub theme: ThemeMode,
    /// Current language
    pub locale: Locale,
}

impl RenderContext {
    /// Create a context from the two flags.
    #[must_use]
    pub const fn new(theme: ThemeMode, locale: Locale) -> Self {
        Self { theme, locale }
    }

    /// Palette matching the current theme.
    #[must_use]
    pub fn palette(&self) -> ChartPalette {
        ChartPalette::of(self.theme)
    }
}
