use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::i18n::Locale;
use crate::state::app_state::{DEFAULT_CLOSE_DELAY, DEFAULT_PUBLIC_URL};
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Preferred display locale; `None` defers to the system locale.
    pub locale: Option<Locale>,
    /// Shared secret for the admin toggle.
    pub admin_secret: String,
    /// Origin and path used to build shareable profile links.
    pub public_url: String,
    /// Seed location (`bundled`, a file path or an HTTP(S) URL); `None` means bundled.
    pub seed_source: Option<String>,
    /// Delay before a closed overlay clears its snapshot.
    pub overlay_close_delay: Duration,
    /// Remove a never-saved record when its first edit is cancelled.
    pub discard_unsaved_on_cancel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: None,
            admin_secret: "admin".to_string(),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            seed_source: None,
            overlay_close_delay: DEFAULT_CLOSE_DELAY,
            discard_unsaved_on_cancel: false,
        }
    }
}

/// Default `settings.conf` written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "\
# Diiwaan settings
#
# Display locale: so, en or ar. Leave empty to follow the system locale.
locale =
# Shared secret that unlocks the admin editor. Not a security boundary.
admin_secret = admin
# Base address used for shareable profile links.
public_url = https://diiwaan.so/
# Seed data: bundled, a path to a JSON file, or an http(s) URL.
seed_source = bundled
# Delay in milliseconds before a closed profile panel is cleared.
overlay_close_delay_ms = 300
# Delete a brand-new profile when its first edit is cancelled.
discard_unsaved_on_cancel = false
";

/// Interpret common truthy spellings.
fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Settings to populate in place
///
/// Details:
/// - Unknown keys and unparsable values are logged and skipped so a typo
///   never prevents startup.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "locale" | "language" | "lang" => {
                if val.is_empty() {
                    settings.locale = None;
                } else if let Some(locale) = Locale::from_code(&val) {
                    settings.locale = Some(locale);
                } else {
                    warn!(value = %val, "unknown locale in settings");
                }
            }
            "admin_secret" => {
                if !val.is_empty() {
                    settings.admin_secret = val;
                }
            }
            "public_url" => {
                if !val.is_empty() {
                    settings.public_url = val;
                }
            }
            "seed_source" | "seed" => {
                settings.seed_source = (!val.is_empty()).then_some(val);
            }
            "overlay_close_delay_ms" => match val.parse::<u64>() {
                Ok(ms) => settings.overlay_close_delay = Duration::from_millis(ms),
                Err(_) => warn!(value = %val, "invalid overlay_close_delay_ms"),
            },
            "discard_unsaved_on_cancel" => {
                settings.discard_unsaved_on_cancel = parse_bool(&val);
            }
            other => debug!(key = other, "ignoring unknown settings key"),
        }
    }
}

/// What: Load settings from a specific file.
///
/// Output:
/// - Defaults overlaid with the file's values; defaults alone when the file is missing.
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            debug!(path = %path.display(), "loaded settings");
        }
        Err(e) => debug!(path = %path.display(), error = %e, "no settings file"),
    }
    out
}

/// Load the user's settings from `<config_dir>/settings.conf`.
#[must_use]
pub fn settings() -> Settings {
    load_settings_from(&super::paths::settings_path())
}

/// What: Write the default settings file when none exists yet.
///
/// Details:
/// - Existing files are never touched.
pub fn ensure_settings_file() {
    let path = super::paths::settings_path();
    if path.exists() {
        return;
    }
    match fs::write(&path, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => tracing::info!(path = %path.display(), "wrote default settings"),
        Err(e) => warn!(path = %path.display(), error = %e, "could not write default settings"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Every supported key is read and inline comments are stripped
    fn parse_settings_reads_all_keys() {
        let mut s = Settings::default();
        parse_settings(
            "\
# comment
locale = ar_SA.UTF-8
admin_secret = hunter2   # local only
public_url = https://example.org/people
seed_source = /srv/seed.json
overlay_close_delay_ms = 150
discard_unsaved_on_cancel = yes
mystery = 1
",
            &mut s,
        );
        assert_eq!(s.locale, Some(Locale::Ar));
        assert_eq!(s.admin_secret, "hunter2");
        assert_eq!(s.public_url, "https://example.org/people");
        assert_eq!(s.seed_source.as_deref(), Some("/srv/seed.json"));
        assert_eq!(s.overlay_close_delay, Duration::from_millis(150));
        assert!(s.discard_unsaved_on_cancel);
    }

    #[test]
    /// What: Bad values keep defaults
    fn invalid_values_keep_defaults() {
        let mut s = Settings::default();
        parse_settings(
            "locale = xx\noverlay_close_delay_ms = soon\nadmin_secret =\n",
            &mut s,
        );
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: The skeleton parses back to the defaults
    fn skeleton_matches_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, SETTINGS_SKELETON_CONTENT).expect("write skeleton");
        let mut expected = Settings::default();
        expected.seed_source = Some("bundled".to_string());
        assert_eq!(load_settings_from(&path), expected);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(
            load_settings_from(&dir.path().join("absent.conf")),
            Settings::default()
        );
    }
}
