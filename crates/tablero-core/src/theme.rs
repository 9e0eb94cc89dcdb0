//! Theme mode and chart palettes.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Global light/dark color-mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode (default)
    #[default]
    Light,
    /// Dark mode
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Attribute value for `data-theme`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored attribute value; anything unrecognized is None.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Semantic chart colors, with light and dark variants.
///
/// Series colors are per-chart constants and do not vary with the theme; the
/// palette covers only the roles every chart shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPalette {
    /// Chart background fill
    pub background: Color,
    /// Horizontal grid lines
    pub grid: Color,
    /// Axis and slice label text
    pub axis_text: Color,
}

impl ChartPalette {
    /// Light palette: white card, gray-200 grid, gray-500 text.
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            grid: Color::rgb8(0xE5, 0xE7, 0xEB),
            axis_text: Color::rgb8(0x6B, 0x72, 0x80),
        }
    }

    /// Dark palette: slate-800 card, slate-700 grid, slate-400 text.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::rgb8(0x1E, 0x29, 0x3B),
            grid: Color::rgb8(0x33, 0x41, 0x55),
            axis_text: Color::rgb8(0x94, 0xA3, 0xB8),
        }
    }

    /// Palette for the given mode.
    #[must_use]
    pub fn of(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self::light()
    }
}
