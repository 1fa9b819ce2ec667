//! Locale file loading and parsing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::i18n::Locale;
use crate::i18n::translations::TranslationMap;

/// Label tables shipped inside the binary, used when no locales directory is found.
const BUNDLED: [(Locale, &str); 3] = [
    (Locale::So, include_str!("../../config/locales/so.yml")),
    (Locale::En, include_str!("../../config/locales/en.yml")),
    (Locale::Ar, include_str!("../../config/locales/ar.yml")),
];

/// What: Load a locale YAML file and parse it into a `TranslationMap`.
///
/// Inputs:
/// - `locale`: Locale whose file should be read
/// - `locales_dir`: Path to locales directory
///
/// Output:
/// - `Result<TranslationMap, String>` containing translations or error
///
/// # Errors
/// - Returns `Err` when the locale file does not exist in the locales directory
/// - Returns `Err` when the locale file cannot be read (I/O error)
/// - Returns `Err` when the locale file is empty
/// - Returns `Err` when the YAML content cannot be parsed
///
/// Details:
/// - Loads file from `locales_dir/{code}.yml`
pub fn load_locale_file(locale: Locale, locales_dir: &Path) -> Result<TranslationMap, String> {
    let file_path = locales_dir.join(format!("{}.yml", locale.code()));

    if !file_path.exists() {
        return Err(format!("Locale file not found: {}", file_path.display()));
    }

    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read locale file {}: {e}", file_path.display()))?;

    if contents.trim().is_empty() {
        return Err(format!("Locale file is empty: {}", file_path.display()));
    }

    parse_locale_yaml(&contents).map_err(|e| {
        format!(
            "Failed to parse locale file {}: {e}. Please check YAML syntax.",
            file_path.display()
        )
    })
}

/// What: Parse YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: YAML file content as string
///
/// Output:
/// - `Result<TranslationMap, String>` containing parsed translations
///
/// Details:
/// - Expects top-level key matching locale code (e.g., "so:")
/// - Flattens nested structure into dot-notation keys
pub(crate) fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = HashMap::new();
    if let Some(locale_obj) = doc.as_mapping() {
        for (_locale_key, locale_value) in locale_obj {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }
    Ok(translations)
}

/// Recursively flatten YAML mappings into dot-notation keys.
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        _ => {}
    }
}

/// Label tables for every supported locale, loaded once at startup so that
/// switching the display locale never touches the filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    /// Tables keyed by locale.
    tables: HashMap<Locale, TranslationMap>,
}

impl LocaleCatalog {
    /// What: Load every locale table from a directory.
    ///
    /// Inputs:
    /// - `locales_dir`: Directory holding `so.yml`, `en.yml` and `ar.yml`
    ///
    /// Output:
    /// - Catalog with one table per locale; unreadable files yield empty tables.
    ///
    /// Details:
    /// - Failures are logged as warnings and never abort startup.
    #[must_use]
    pub fn load(locales_dir: &Path) -> Self {
        let mut tables = HashMap::new();
        for locale in Locale::ALL {
            match load_locale_file(locale, locales_dir) {
                Ok(map) => {
                    tracing::debug!(locale = %locale, keys = map.len(), "loaded locale table");
                    tables.insert(locale, map);
                }
                Err(e) => {
                    tracing::warn!(locale = %locale, error = %e, "failed to load locale table");
                    tables.insert(locale, TranslationMap::new());
                }
            }
        }
        Self { tables }
    }

    /// What: Build the catalog from the tables compiled into the binary.
    ///
    /// Output:
    /// - Catalog populated from the bundled YAML sources.
    #[must_use]
    pub fn bundled() -> Self {
        let mut tables = HashMap::new();
        for (locale, src) in BUNDLED {
            let map = parse_locale_yaml(src).unwrap_or_else(|e| {
                tracing::error!(locale = %locale, error = %e, "bundled locale table is invalid");
                TranslationMap::new()
            });
            tables.insert(locale, map);
        }
        Self { tables }
    }

    /// Table for `locale`; empty when it failed to load.
    #[must_use]
    pub fn table(&self, locale: Locale) -> &TranslationMap {
        static EMPTY: std::sync::OnceLock<TranslationMap> = std::sync::OnceLock::new();
        self.tables
            .get(&locale)
            .unwrap_or_else(|| EMPTY.get_or_init(TranslationMap::new))
    }
}
