use zeroize::Zeroizing;

use crate::args::{Args, resolve_locale, seed_source};
use crate::i18n::{LocaleCatalog, detect_system_locale, find_locales_dir};
use crate::logic::PendingDeepLink;
use crate::sources::SeedSource;
use crate::state::AppState;
use crate::theme::Settings;

/// What: Build the initial application state.
///
/// Inputs:
/// - `args`: Parsed command line
/// - `settings`: Values from `settings.conf`
/// - `catalog`: Label tables for every locale
///
/// Output:
/// - State with an empty store marked as loading and the startup deep link armed.
#[must_use]
pub fn build_app_state(args: &Args, settings: &Settings, catalog: LocaleCatalog) -> AppState {
    let locale = resolve_locale(args.lang, settings.locale, detect_system_locale());
    tracing::info!(locale = %locale, "resolved display locale");
    let deep_link = PendingDeepLink::armed(args.deep_link_target());
    if let Some(id) = deep_link.target() {
        tracing::debug!(id, "startup deep link armed");
    }
    AppState {
        locale,
        catalog,
        deep_link,
        loading: true,
        admin_secret: Zeroizing::new(settings.admin_secret.clone()),
        public_url: settings.public_url.clone(),
        close_delay: settings.overlay_close_delay,
        discard_unsaved_on_cancel: settings.discard_unsaved_on_cancel,
        ..AppState::default()
    }
}

/// What: Read settings and locale files and build the startup state.
///
/// Output:
/// - Initial state and the seed source to load.
///
/// Details:
/// - Headless runs never write the default settings file.
/// - Locale tables come from the first `locales` directory found, else the
///   copies compiled into the binary.
pub fn initialize_app_state(args: &Args, headless: bool) -> (AppState, SeedSource) {
    if !headless {
        crate::theme::ensure_settings_file();
    }
    let settings = crate::theme::settings();
    let catalog = find_locales_dir().map_or_else(LocaleCatalog::bundled, |dir| {
        tracing::debug!(dir = %dir.display(), "loading locale tables");
        LocaleCatalog::load(&dir)
    });
    let source = seed_source(args, &settings);
    (build_app_state(args, &settings, catalog), source)
}
