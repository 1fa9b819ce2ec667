//! Shared utilities for argument processing.

use crate::i18n::Locale;
use crate::sources::SeedSource;
use crate::theme::Settings;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Pick the display locale.
///
/// Details:
/// - Command line first, then `settings.conf`, then the system locale,
///   finally the primary locale.
#[must_use]
pub fn resolve_locale(
    cli: Option<Locale>,
    configured: Option<Locale>,
    system: Option<Locale>,
) -> Locale {
    cli.or(configured).or(system).unwrap_or(Locale::PRIMARY)
}

/// Seed source from the command line, then `settings.conf`; bundled when neither names one.
#[must_use]
pub fn seed_source(args: &crate::args::Args, settings: &Settings) -> SeedSource {
    SeedSource::parse(
        args.seed
            .as_deref()
            .or(settings.seed_source.as_deref())
            .unwrap_or_default(),
    )
}
