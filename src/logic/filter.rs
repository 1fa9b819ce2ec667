//! Directory and search filtering over the profile store.

use crate::i18n::Locale;
use crate::state::{ActiveView, Profile};

/// What: Select the profiles to list for a query, view and locale.
///
/// Inputs:
/// - `profiles`: Records in store order
/// - `query`: Raw query text
/// - `view`: Active top-level view
/// - `locale`: Display locale used to resolve names and roles
///
/// Output:
/// - Matching records, preserving the relative order of `profiles`.
///
/// Details:
/// - The query is trimmed and lower-cased; a record matches when its resolved
///   name or role contains it as a substring.
/// - A non-empty query searches across every category and ignores `view`.
/// - An empty query lists the category of the active directory; the landing
///   view yields nothing (the caller renders the landing layout instead).
#[must_use]
pub fn filter_profiles<'a>(
    profiles: &'a [Profile],
    query: &str,
    view: ActiveView,
    locale: Locale,
) -> Vec<&'a Profile> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return match view.category() {
            Some(category) => profiles.iter().filter(|p| p.category == category).collect(),
            None => Vec::new(),
        };
    }
    profiles
        .iter()
        .filter(|p| matches_term(p, &term, locale))
        .collect()
}

/// Substring match on the resolved name or role; `term` must already be lower-case.
fn matches_term(profile: &Profile, term: &str, locale: Locale) -> bool {
    profile.name.resolve(locale).to_lowercase().contains(term)
        || profile.role.resolve(locale).to_lowercase().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocalizedString;
    use crate::state::Category;

    fn profile(id: u64, so: &str, en: &str, role_en: &str, category: Category) -> Profile {
        let mut p = Profile::blank(id, category);
        p.name = LocalizedString::new(so, en, "");
        p.role = LocalizedString::new("", role_en, "");
        p
    }

    fn ids(list: &[&Profile]) -> Vec<u64> {
        list.iter().map(|p| p.id).collect()
    }

    #[test]
    /// What: Search falls back to the primary-locale name
    ///
    /// - Input: Only `so` name "Xamse", query "xam", locale en
    /// - Output: The profile matches
    fn search_falls_back_to_primary_name() {
        let profiles = vec![profile(1, "Xamse", "", "", Category::Politician)];
        let out = filter_profiles(&profiles, "xam", ActiveView::Landing, Locale::En);
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    /// What: Empty query lists only the active directory's category
    fn empty_query_filters_by_directory() {
        let profiles = vec![
            profile(1, "A", "A", "", Category::Politician),
            profile(2, "B", "B", "", Category::Business),
        ];
        let out = filter_profiles(&profiles, "", ActiveView::BusinessDirectory, Locale::So);
        assert_eq!(ids(&out), vec![2]);
        let out = filter_profiles(&profiles, "  ", ActiveView::PoliticsDirectory, Locale::So);
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    /// What: Landing with an empty query yields nothing
    fn landing_without_query_is_empty() {
        let profiles = vec![profile(1, "A", "A", "", Category::Politician)];
        assert!(filter_profiles(&profiles, "", ActiveView::Landing, Locale::En).is_empty());
    }

    #[test]
    /// What: Search results do not depend on the active view
    fn search_ignores_active_view() {
        let profiles = vec![
            profile(1, "Cali", "Ali", "Minister", Category::Politician),
            profile(2, "Dahab", "Dahab", "Bank minister", Category::Business),
            profile(3, "Hodan", "Hodan", "Trader", Category::Business),
        ];
        let reference = ids(&filter_profiles(
            &profiles,
            "MINISTER ",
            ActiveView::Landing,
            Locale::En,
        ));
        assert_eq!(reference, vec![1, 2]);
        for view in [ActiveView::PoliticsDirectory, ActiveView::BusinessDirectory] {
            assert_eq!(
                ids(&filter_profiles(&profiles, "MINISTER ", view, Locale::En)),
                reference
            );
        }
    }

    #[test]
    fn empty_store_yields_empty_result() {
        let out = filter_profiles(&[], "x", ActiveView::PoliticsDirectory, Locale::Ar);
        assert!(out.is_empty());
    }
}
