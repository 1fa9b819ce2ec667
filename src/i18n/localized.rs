//! Per-locale text bundles used for every user-facing profile field.

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Text in each supported locale. Missing entries deserialize as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    /// Somali text (primary locale).
    #[serde(default)]
    pub so: String,
    /// English text.
    #[serde(default)]
    pub en: String,
    /// Arabic text.
    #[serde(default)]
    pub ar: String,
}

impl LocalizedString {
    /// Build a bundle from the three locale texts in `so, en, ar` order.
    #[must_use]
    pub fn new(so: impl Into<String>, en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            so: so.into(),
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// Raw text stored for `locale`, possibly empty.
    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::So => &self.so,
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }

    /// Mutable access to the text stored for `locale`.
    pub const fn get_mut(&mut self, locale: Locale) -> &mut String {
        match locale {
            Locale::So => &mut self.so,
            Locale::En => &mut self.en,
            Locale::Ar => &mut self.ar,
        }
    }

    /// Overwrite the text stored for `locale`.
    pub fn set(&mut self, locale: Locale, text: impl Into<String>) {
        *self.get_mut(locale) = text.into();
    }

    /// What: Resolve the display text for a locale.
    ///
    /// Inputs:
    /// - `locale`: Requested display locale
    ///
    /// Output:
    /// - The requested locale's text when non-empty, else the primary locale's
    ///   text, else an empty string.
    ///
    /// Details:
    /// - Total and side-effect free.
    #[must_use]
    pub fn resolve(&self, locale: Locale) -> &str {
        let requested = self.get(locale);
        if requested.is_empty() {
            self.get(Locale::PRIMARY)
        } else {
            requested
        }
    }

    /// Whether every locale entry is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.so.is_empty() && self.en.is_empty() && self.ar.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Resolution falls back to the primary locale when the requested text is empty
    ///
    /// - Input: Bundle with only `so` populated
    /// - Output: Every locale resolves to the Somali text
    fn resolve_falls_back_to_primary() {
        let s = LocalizedString::new("Xamse", "", "");
        for l in Locale::ALL {
            assert_eq!(s.resolve(l), "Xamse");
        }
    }

    #[test]
    fn resolve_prefers_requested_locale() {
        let s = LocalizedString::new("Muqdisho", "Mogadishu", "مقديشو");
        assert_eq!(s.resolve(Locale::En), "Mogadishu");
        assert_eq!(s.resolve(Locale::Ar), "مقديشو");
    }

    #[test]
    /// What: A bundle with no primary text yields empty strings for empty locales
    fn resolve_returns_empty_when_nothing_available() {
        let s = LocalizedString::new("", "Only English", "");
        assert_eq!(s.resolve(Locale::Ar), "");
        assert_eq!(s.resolve(Locale::En), "Only English");
    }

    #[test]
    fn missing_json_entries_deserialize_as_empty() {
        let s: LocalizedString =
            serde_json::from_str(r#"{"so":"Ganacsi"}"#).expect("valid localized json");
        assert_eq!(s.en, "");
        assert_eq!(s.resolve(Locale::En), "Ganacsi");
    }
}
