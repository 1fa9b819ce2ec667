//! Command-line argument definition and processing.

use clap::Parser;

use crate::i18n::Locale;
use crate::state::ProfileId;

/// Diiwaan - a localized directory of public figures for the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "diiwaan")]
#[command(version)]
#[command(about = "A localized directory of politicians and businesses for the terminal", long_about = None)]
pub struct Args {
    /// Display language (so, en, ar); overrides settings and the system locale
    #[arg(long, value_parser = parse_locale)]
    pub lang: Option<Locale>,

    /// Startup location carrying a `profileId` query parameter, e.g. "https://diiwaan.so/?profileId=3"
    #[arg(long)]
    pub location: Option<String>,

    /// Open the profile with this id at startup (shorthand for --location "?profileId=<id>")
    #[arg(long)]
    pub profile_id: Option<ProfileId>,

    /// Seed data: "bundled", a JSON file path or an http(s) URL
    #[arg(long)]
    pub seed: Option<String>,

    /// Print the directory to stdout and exit instead of starting the interface
    #[arg(long)]
    pub list: bool,

    /// Filter for --list (substring of name or role in the display language)
    #[arg(short, long, requires = "list")]
    pub search: Option<String>,

    /// Directory for --list when no search is given (politics, business)
    #[arg(long, requires = "list", value_parser = parse_directory)]
    pub directory: Option<crate::state::Category>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Clap value parser for `--lang`.
fn parse_locale(value: &str) -> Result<Locale, String> {
    Locale::from_code(value).ok_or_else(|| format!("unsupported language '{value}' (use so, en or ar)"))
}

/// Clap value parser for `--directory`.
fn parse_directory(value: &str) -> Result<crate::state::Category, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "politics" | "politician" | "politicians" => Ok(crate::state::Category::Politician),
        "business" | "businesses" => Ok(crate::state::Category::Business),
        other => Err(format!("unknown directory '{other}' (use politics or business)")),
    }
}

impl Args {
    /// What: Profile id requested for the startup deep link.
    ///
    /// Output:
    /// - `--profile-id` when given, else the id parsed from `--location`.
    ///
    /// Details:
    /// - An unparsable location is ignored, like any broken deep link.
    #[must_use]
    pub fn deep_link_target(&self) -> Option<ProfileId> {
        self.profile_id
            .filter(|id| *id > 0)
            .or_else(|| {
                self.location
                    .as_deref()
                    .and_then(crate::logic::parse_location)
            })
    }
}

/// What: Handle non-interactive command-line modes.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Some(exit_code)` when a CLI mode ran and the process should exit;
///   `None` to continue into the interactive interface.
pub async fn process_args(args: &Args) -> Option<i32> {
    if args.list {
        return Some(super::list::handle_list(args).await);
    }
    None
}
