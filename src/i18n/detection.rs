//! System locale detection utilities.

use std::env;

use crate::i18n::Locale;

/// What: Detect a supported display locale from environment variables.
///
/// Inputs:
/// - None (reads from environment)
///
/// Output:
/// - `Some(Locale)` when one of the variables names a supported language
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES`, and `LANG` in order; the first variable that is
///   set decides, so an unsupported `LC_ALL` is not overridden by `LANG`
/// - The `C`/`POSIX` locales count as unset
#[must_use]
pub fn detect_system_locale() -> Option<Locale> {
    let locale_vars = ["LC_ALL", "LC_MESSAGES", "LANG"];

    for var_name in &locale_vars {
        if let Ok(value) = env::var(var_name) {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed == "C" || trimmed == "POSIX" {
                continue;
            }
            return Locale::from_code(trimmed);
        }
    }

    None
}
