//! Internationalization (i18n) module for Diiwaan.
//!
//! Two separate concerns live here:
//! - **Profile text**: every user-facing profile field is a [`LocalizedString`]
//!   resolved with [`LocalizedString::resolve`], falling back to the primary locale.
//! - **Interface labels**: YAML tables under `config/locales/{code}.yml`, flattened
//!   into dot-notation keys and looked up through [`t`] and [`t_fmt1`].
//!
//! # Locale Files
//!
//! ```yaml
//! en:
//!   app:
//!     nav:
//!       politics: "Politics"
//! ```
//!
//! This becomes accessible as `app.nav.politics`. Missing keys in a table fall
//! back to the Somali table and finally to the key itself.

mod detection;
mod loader;
mod locale;
mod localized;
pub mod translations;

pub use detection::detect_system_locale;
pub use loader::{LocaleCatalog, load_locale_file};
pub use locale::{Locale, TextDirection};
pub use localized::LocalizedString;
pub use translations::{TranslationMap, translate_with_fallback};

use std::path::PathBuf;

/// What: Find the locales directory in development and installed locations.
///
/// Output:
/// - `Some(PathBuf)` pointing to the first existing locales directory found, or `None`
///
/// Details:
/// - Tries locations in order:
///   1. User override: `<config_dir>/locales`
///   2. Development location: `CARGO_MANIFEST_DIR/config/locales`
///   3. Installed location: `/usr/share/diiwaan/locales`
pub fn find_locales_dir() -> Option<PathBuf> {
    let user_path = crate::theme::config_dir().join("locales");
    if user_path.is_dir() {
        return Some(user_path);
    }

    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("locales");
    if dev_path.is_dir() {
        return Some(dev_path);
    }

    let installed_path = PathBuf::from("/usr/share/diiwaan/locales");
    if installed_path.is_dir() {
        return Some(installed_path);
    }

    None
}

/// What: Get a label for a given key in the active locale.
///
/// Inputs:
/// - `app`: `AppState` holding the catalog and active locale
/// - `key`: Dot-notation key (e.g., "app.nav.politics")
///
/// Output:
/// - Translated string, or the key itself if translation not found
pub fn t(app: &crate::state::AppState, key: &str) -> String {
    translate_with_fallback(
        key,
        app.catalog.table(app.locale),
        app.catalog.table(Locale::PRIMARY),
    )
}

/// What: Get a label with a single format argument.
///
/// Inputs:
/// - `app`: `AppState` holding the catalog and active locale
/// - `key`: Dot-notation key
/// - `arg`: Value substituted for the first `{}` placeholder
///
/// Output:
/// - Formatted translated string
pub fn t_fmt1<T: std::fmt::Display>(app: &crate::state::AppState, key: &str, arg: T) -> String {
    t(app, key).replacen("{}", &arg.to_string(), 1)
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[test]
    /// What: Labels follow the active locale and fall back to Somali
    ///
    /// - Input: Bundled catalog, locale switched between `so` and `en`
    /// - Output: Different label text per locale; unknown keys echo back
    fn t_follows_active_locale() {
        let mut app = AppState::default();
        app.locale = Locale::So;
        let so = t(&app, "app.nav.politics");
        app.locale = Locale::En;
        let en = t(&app, "app.nav.politics");
        assert_ne!(so, en);
        assert_eq!(t(&app, "app.no.such.key"), "app.no.such.key");
    }

    #[test]
    fn t_fmt1_substitutes_placeholder() {
        let mut app = AppState::default();
        app.locale = Locale::En;
        let s = t_fmt1(&app, "app.listing.showing", 7);
        assert!(s.contains('7'));
        assert!(!s.contains("{}"));
    }
}
