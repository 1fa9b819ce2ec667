//! Supported display locales and their layout direction.

use std::fmt;

/// Display locale. The set is fixed; `So` is the primary locale every
/// localized field falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Somali (primary).
    #[default]
    So,
    /// English.
    En,
    /// Arabic, rendered right-to-left.
    Ar,
}

/// Text direction derived from the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Locale {
    /// All locales in display order.
    pub const ALL: [Self; 3] = [Self::So, Self::En, Self::Ar];

    /// The primary locale used as fallback for every lookup.
    pub const PRIMARY: Self = Self::So;

    /// Two-letter code used in locale file names and settings.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::So => "so",
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// What: Parse a locale from a code or an environment-style locale string.
    ///
    /// Inputs:
    /// - `s`: Code such as `"ar"`, `"en-US"` or `"so_SO.UTF-8"` (case-insensitive)
    ///
    /// Output:
    /// - `Some(Locale)` when the language part is one of the supported codes.
    ///
    /// Details:
    /// - Only the language subtag matters; region and encoding suffixes are ignored.
    #[must_use]
    pub fn from_code(s: &str) -> Option<Self> {
        let lang = s
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "so" => Some(Self::So),
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Next locale in the header switcher cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::So => Self::En,
            Self::En => Self::Ar,
            Self::Ar => Self::So,
        }
    }

    /// Layout direction: right-to-left for Arabic, left-to-right otherwise.
    #[must_use]
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::Ar => TextDirection::Rtl,
            Self::So | Self::En => TextDirection::Ltr,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
