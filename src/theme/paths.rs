use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the config base.
const APP_DIR: &str = "diiwaan";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// XDG config directory for Diiwaan: `$XDG_CONFIG_HOME/diiwaan`, else
/// `$HOME/.config/diiwaan` (ensured to exist).
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::debug!(path = %dir.display(), error = %e, "could not create config dir");
    }
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of `settings.conf` inside `base`.
pub(crate) fn settings_path_in(base: &Path) -> PathBuf {
    base.join("settings.conf")
}

/// Path of the user's `settings.conf` (may not exist yet).
pub fn settings_path() -> PathBuf {
    settings_path_in(&config_dir())
}

#[cfg(test)]
mod tests {
    #[test]
    /// What: Config and log directories follow `XDG_CONFIG_HOME`
    fn paths_follow_xdg_config_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig = std::env::var_os("XDG_CONFIG_HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe { std::env::set_var("XDG_CONFIG_HOME", base.path()) };
        let cfg = super::config_dir();
        let logs = super::logs_dir();
        assert_eq!(cfg, base.path().join("diiwaan"));
        assert!(logs.ends_with("diiwaan/logs"));
        assert!(logs.is_dir());
        assert!(super::settings_path().ends_with("diiwaan/settings.conf"));
        unsafe {
            if let Some(v) = orig {
                std::env::set_var("XDG_CONFIG_HOME", v);
            } else {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }
}
