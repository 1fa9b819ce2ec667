//! Top-level view transitions: directory selection, search and locale.

use crate::i18n::{Locale, TextDirection};
use crate::state::{AppState, Category};

/// What: Switch to the directory listing of `category`.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `category`: Directory to show
///
/// Details:
/// - Clears any stray query so the listing shows the whole category.
/// - Resets the listing cursor to the first card.
pub fn select_category(app: &mut AppState, category: Category) {
    app.view = category.directory();
    app.query.clear();
    app.search_focused = false;
    app.selected = 0;
    app.clamp_selection();
    tracing::debug!(view = ?app.view, "selected directory");
}

/// What: Replace the search query.
///
/// Details:
/// - The active view is left untouched; a non-empty query renders search
///   results over whichever view is active.
pub fn search(app: &mut AppState, query: &str) {
    query.clone_into(&mut app.query);
    app.selected = 0;
    app.clamp_selection();
}

/// Append one typed character to the query.
pub fn push_query_char(app: &mut AppState, ch: char) {
    app.query.push(ch);
    app.selected = 0;
    app.clamp_selection();
}

/// Remove the last character of the query.
pub fn pop_query_char(app: &mut AppState) {
    if app.query.pop().is_some() {
        app.selected = 0;
        app.clamp_selection();
    }
}

/// What: Return to the landing screen with an empty query.
///
/// Details:
/// - Also the "clear search" action: dropping the query always goes home.
pub fn reset_to_home(app: &mut AppState) {
    app.view = crate::state::ActiveView::Landing;
    app.query.clear();
    app.search_focused = false;
    app.selected = 0;
    app.landing_selected = 0;
    app.clamp_selection();
    tracing::debug!("reset to landing");
}

/// What: Change the display locale.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `locale`: New display locale
///
/// Details:
/// - Records and the store are untouched; only label lookups and resolved
///   profile text change. Search results may change because matching uses
///   the resolved text, hence the cursor clamp.
pub fn set_locale(app: &mut AppState, locale: Locale) {
    if app.locale == locale {
        return;
    }
    app.locale = locale;
    app.clamp_selection();
    tracing::info!(locale = %locale, "display locale changed");
}

/// Advance to the next locale in the fixed cycle.
pub fn cycle_locale(app: &mut AppState) {
    set_locale(app, app.locale.next());
}

/// Layout direction implied by the active locale.
#[must_use]
pub const fn layout_direction(app: &AppState) -> TextDirection {
    app.locale.direction()
}

/// What: Move the listing cursor by `delta` rows.
///
/// Details:
/// - Saturates at both ends of the visible listing.
pub fn move_selection(app: &mut AppState, delta: isize) {
    let len = app.visible_profiles().len();
    if len == 0 {
        app.clamp_selection();
        return;
    }
    app.selected = app.selected.saturating_add_signed(delta).min(len - 1);
    app.list_state.select(Some(app.selected));
}

/// Number of selectable tiles on the landing screen (category cards plus insights).
pub const LANDING_TILES: usize = 2 + crate::state::INSIGHTS.len();

/// Move the landing cursor by `delta`, saturating at both ends.
pub fn move_landing_selection(app: &mut AppState, delta: isize) {
    app.landing_selected = app
        .landing_selected
        .saturating_add_signed(delta)
        .min(LANDING_TILES - 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActiveView, Profile, ProfileStore};

    fn app_with_store() -> AppState {
        AppState {
            store: ProfileStore::from_seed(vec![
                Profile::blank(1, Category::Politician),
                Profile::blank(2, Category::Business),
                Profile::blank(3, Category::Business),
            ]),
            ..AppState::default()
        }
    }

    #[test]
    /// What: Choosing a category clears any stray query
    fn select_category_clears_query() {
        let mut app = app_with_store();
        search(&mut app, "stray");
        select_category(&mut app, Category::Business);
        assert_eq!(app.view, ActiveView::BusinessDirectory);
        assert!(app.query.is_empty());
        assert_eq!(app.visible_profiles().len(), 2);
    }

    #[test]
    /// What: Searching never changes the active view
    fn search_keeps_active_view() {
        let mut app = app_with_store();
        select_category(&mut app, Category::Politician);
        search(&mut app, "abc");
        assert_eq!(app.view, ActiveView::PoliticsDirectory);
        assert_eq!(app.query, "abc");
        assert!(!app.shows_landing());
    }

    #[test]
    fn reset_to_home_returns_to_landing() {
        let mut app = app_with_store();
        select_category(&mut app, Category::Business);
        push_query_char(&mut app, 'x');
        reset_to_home(&mut app);
        assert_eq!(app.view, ActiveView::Landing);
        assert!(app.query.is_empty());
        assert!(app.shows_landing());
    }

    #[test]
    /// What: Arabic flips layout to right-to-left, other locales stay left-to-right
    fn locale_decides_direction() {
        let mut app = AppState::default();
        set_locale(&mut app, Locale::Ar);
        assert_eq!(layout_direction(&app), TextDirection::Rtl);
        cycle_locale(&mut app);
        assert_eq!(app.locale, Locale::So);
        assert_eq!(layout_direction(&app), TextDirection::Ltr);
        set_locale(&mut app, Locale::En);
        assert_eq!(layout_direction(&app), TextDirection::Ltr);
    }

    #[test]
    fn query_editing_pushes_and_pops() {
        let mut app = app_with_store();
        push_query_char(&mut app, 'a');
        push_query_char(&mut app, 'b');
        pop_query_char(&mut app);
        assert_eq!(app.query, "a");
        reset_to_home(&mut app);
        assert!(app.query.is_empty());
        assert_eq!(app.view, crate::state::ActiveView::Landing);
    }

    #[test]
    fn selection_moves_within_bounds() {
        let mut app = app_with_store();
        select_category(&mut app, Category::Business);
        move_selection(&mut app, 5);
        assert_eq!(app.selected, 1);
        move_selection(&mut app, -9);
        assert_eq!(app.selected, 0);
        move_landing_selection(&mut app, 10);
        assert_eq!(app.landing_selected, LANDING_TILES - 1);
    }
}
