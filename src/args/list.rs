//! `--list`: print the directory to stdout.

use crate::i18n::{Locale, LocaleCatalog, translate_with_fallback};
use crate::logic::filter_profiles;
use crate::sources::load_profiles;
use crate::state::{Category, Profile};

/// What: Render one listing line.
///
/// Output:
/// - `"<id>  <name> - <role> (<location>)"` with a check mark for verified records.
#[must_use]
pub fn format_line(profile: &Profile, locale: Locale) -> String {
    format!(
        "{:>4}  {}{} - {} ({})",
        profile.id,
        profile.name.resolve(locale),
        if profile.verified { " ✓" } else { "" },
        profile.role.resolve(locale),
        profile.location.resolve(locale),
    )
}

/// What: Select and format the lines printed by `--list`.
///
/// Inputs:
/// - `profiles`: Loaded records
/// - `query`: Optional search term
/// - `category`: Directory listed when no term is given (politicians by default)
/// - `locale`: Display locale
#[must_use]
pub fn listing_lines(
    profiles: &[Profile],
    query: Option<&str>,
    category: Option<Category>,
    locale: Locale,
) -> Vec<String> {
    let view = category.unwrap_or(Category::Politician).directory();
    filter_profiles(profiles, query.unwrap_or_default(), view, locale)
        .into_iter()
        .map(|p| format_line(p, locale))
        .collect()
}

/// What: Load the seed and print the requested listing.
///
/// Output:
/// - Process exit code: `0` on success, `1` when the seed fails to load.
pub async fn handle_list(args: &super::Args) -> i32 {
    let settings = crate::theme::settings();
    let locale = super::resolve_locale(
        args.lang,
        settings.locale,
        crate::i18n::detect_system_locale(),
    );
    let source = super::seed_source(args, &settings);
    let profiles = match load_profiles(&source).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };
    let lines = listing_lines(&profiles, args.search.as_deref(), args.directory, locale);
    if lines.is_empty() {
        let catalog = LocaleCatalog::bundled();
        println!(
            "{}",
            translate_with_fallback(
                "app.listing.no_results",
                catalog.table(locale),
                catalog.table(Locale::PRIMARY),
            )
        );
    }
    for line in lines {
        println!("{line}");
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocalizedString;

    fn record(id: u64, category: Category, so: &str, en: &str) -> Profile {
        let mut p = Profile::blank(id, category);
        p.name = LocalizedString::new(so, en, "");
        p
    }

    #[test]
    /// What: Listing uses the requested directory and the display locale
    fn listing_filters_by_directory() {
        let profiles = vec![
            record(1, Category::Politician, "Xamse", "Hamza"),
            record(2, Category::Business, "Dahab", "Dahab Bank"),
        ];
        let lines = listing_lines(&profiles, None, Some(Category::Business), Locale::En);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Dahab Bank"));

        let lines = listing_lines(&profiles, Some("ham"), Some(Category::Business), Locale::En);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Hamza"));
        assert!(lines[0].contains("Mogadishu"));
    }

    #[test]
    fn format_line_marks_verified() {
        let mut p = record(3, Category::Business, "Geeska", "");
        p.verified = true;
        assert!(format_line(&p, Locale::En).contains("Geeska ✓"));
    }
}
