//! Locale flag and text direction.

use serde::{Deserialize, Serialize};

/// Global language flag affecting label text and document direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default)
    #[default]
    En,
    /// Arabic
    Ar,
}

impl Locale {
    /// Every declared locale, in declaration order. Label tables are
    /// validated against this list.
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    /// The other locale.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// BCP 47 tag for the document `lang` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a stored tag; anything unrecognized is None.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Writing direction for this locale.
    #[must_use]
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::En => TextDirection::Ltr,
            Self::Ar => TextDirection::Rtl,
        }
    }
}

/// Document writing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right (default)
    #[default]
    Ltr,
    /// Right to left
    Rtl,
}

impl TextDirection {
    /// Attribute value for the document `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// True for right-to-left locales.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}
