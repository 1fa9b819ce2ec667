//! Central `AppState` container.

use std::time::Duration;

use ratatui::widgets::ListState;
use zeroize::Zeroizing;

use crate::i18n::{Locale, LocaleCatalog};
use crate::logic::deeplink::PendingDeepLink;
use crate::state::modal::Modal;
use crate::state::overlay::Overlay;
use crate::state::store::ProfileStore;
use crate::state::types::{ActiveView, Profile};

/// Default delay between closing the overlay and clearing its snapshot.
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Default public address used to build shareable profile links.
pub const DEFAULT_PUBLIC_URL: &str = "https://diiwaan.so/";

/// Application state mutated by event handlers and read by the renderer.
///
/// All transitions are plain functions over this struct (see `crate::logic`),
/// so every transition can be exercised in isolation without a terminal.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    /// Active display locale.
    pub locale: Locale,
    /// Active top-level screen.
    pub view: ActiveView,
    /// Current free-text query; non-empty switches the listing to search results.
    pub query: String,
    /// Whether typed characters go to the query.
    pub search_focused: bool,
    /// Unlocks create/edit/delete affordances. Not a security boundary.
    pub admin: bool,
    /// Session profile collection.
    pub store: ProfileStore,
    /// Detail overlay.
    pub overlay: Overlay,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Highlighted card in the listing.
    pub selected: usize,
    /// Ratatui selection state mirroring `selected`.
    pub list_state: ListState,
    /// Highlighted tile on the landing screen (two category cards, then insights).
    pub landing_selected: usize,
    /// Startup deep link waiting for the store to contain its target.
    pub deep_link: PendingDeepLink,
    /// Label tables for every locale.
    pub catalog: LocaleCatalog,
    /// `true` until the first seed load completes (successfully or not).
    pub loading: bool,

    // Settings snapshot
    /// Shared secret compared against the admin prompt input.
    pub admin_secret: Zeroizing<String>,
    /// Origin and path used to build profile links.
    pub public_url: String,
    /// Exit delay before the overlay snapshot is cleared.
    pub close_delay: Duration,
    /// Remove a never-saved record when its first edit is cancelled.
    pub discard_unsaved_on_cancel: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            locale: Locale::PRIMARY,
            view: ActiveView::Landing,
            query: String::new(),
            search_focused: false,
            admin: false,
            store: ProfileStore::default(),
            overlay: Overlay::default(),
            modal: Modal::None,
            selected: 0,
            list_state: ListState::default(),
            landing_selected: 0,
            deep_link: PendingDeepLink::default(),
            catalog: LocaleCatalog::bundled(),
            loading: false,
            admin_secret: Zeroizing::new("admin".to_string()),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            close_delay: DEFAULT_CLOSE_DELAY,
            discard_unsaved_on_cancel: false,
        }
    }
}

impl AppState {
    /// What: Profiles visible under the current view, query and locale.
    ///
    /// Output:
    /// - Filtered records in store order.
    #[must_use]
    pub fn visible_profiles(&self) -> Vec<&Profile> {
        crate::logic::filter_profiles(self.store.as_slice(), &self.query, self.view, self.locale)
    }

    /// Whether the landing layout is shown instead of a listing.
    #[must_use]
    pub fn shows_landing(&self) -> bool {
        self.view == ActiveView::Landing && self.query.trim().is_empty()
    }

    /// Profile under the listing cursor.
    #[must_use]
    pub fn selected_profile(&self) -> Option<&Profile> {
        self.visible_profiles().get(self.selected).copied()
    }

    /// What: Clamp the listing cursor after the visible set changed.
    ///
    /// Details:
    /// - Keeps the ratatui `ListState` in sync with `selected`.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_profiles().len();
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::Category;

    #[test]
    /// What: Initial state matches the documented start screen
    fn default_state_is_landing_with_primary_locale() {
        let app = AppState::default();
        assert_eq!(app.view, ActiveView::Landing);
        assert_eq!(app.locale, Locale::So);
        assert!(app.query.is_empty());
        assert!(!app.admin);
        assert!(!app.overlay.is_open);
        assert!(app.shows_landing());
    }

    #[test]
    /// What: Clamping follows the visible listing length
    fn clamp_selection_tracks_visible_len() {
        let mut app = AppState::default();
        app.store = ProfileStore::from_seed(vec![
            Profile::blank(1, Category::Politician),
            Profile::blank(2, Category::Politician),
        ]);
        app.view = ActiveView::PoliticsDirectory;
        app.selected = 9;
        app.clamp_selection();
        assert_eq!(app.selected, 1);
        assert_eq!(app.list_state.selected(), Some(1));

        app.view = ActiveView::BusinessDirectory;
        app.clamp_selection();
        assert_eq!(app.selected, 0);
        assert_eq!(app.list_state.selected(), None);
    }
}
