//! Palette, configuration paths and user settings for Diiwaan.

/// Path resolution for config directories.
mod paths;
/// Settings parsing and first-run skeleton.
mod settings;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{
    SETTINGS_SKELETON_CONTENT, Settings, ensure_settings_file, load_settings_from,
    parse_settings, settings,
};
pub use types::Theme;

/// Palette used by the renderer.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Details:
/// - Callers should lock the mutex to guard environment-variable or disk state changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
