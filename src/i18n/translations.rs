//! Translation map and lookup utilities.

use std::collections::HashMap;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up a label with fallback to the primary locale table.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Table of the active locale
/// - `fallback_translations`: Table of the primary locale
///
/// Output:
/// - Translated string (from primary or fallback, or key itself if both missing)
///
/// Details:
/// - Empty entries count as missing so a half-translated table still reads well
/// - The key itself is returned when both tables lack it, so gaps show on screen
pub fn translate_with_fallback(
    key: &str,
    translations: &TranslationMap,
    fallback_translations: &TranslationMap,
) -> String {
    if let Some(translation) = translations.get(key).filter(|s| !s.is_empty()) {
        return translation.clone();
    }

    if let Some(translation) = fallback_translations.get(key) {
        tracing::trace!(key, "label taken from the primary locale table");
        return translation.clone();
    }

    tracing::debug!(key, "label missing from every locale table");
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_with_fallback() {
        let mut primary = HashMap::new();
        primary.insert("app.nav.politics".to_string(), "Politics".to_string());
        primary.insert("app.nav.business".to_string(), String::new());

        let mut fallback = HashMap::new();
        fallback.insert("app.nav.politics".to_string(), "Siyaasadda".to_string());
        fallback.insert("app.nav.business".to_string(), "Ganacsiga".to_string());

        assert_eq!(
            translate_with_fallback("app.nav.politics", &primary, &fallback),
            "Politics"
        );
        assert_eq!(
            translate_with_fallback("app.nav.business", &primary, &fallback),
            "Ganacsiga"
        );
        assert_eq!(
            translate_with_fallback("app.nav.missing", &primary, &fallback),
            "app.nav.missing"
        );
    }
}
