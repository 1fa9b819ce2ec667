//! TUI rendering for Diiwaan.
//!
//! The frame is split into a header (brand, directory tabs, search box), a
//! body that shows either the landing screen or a directory listing, and a
//! one-line key hint footer. The detail overlay and modal dialogs are drawn
//! last so they sit on top of everything else.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod footer;
mod header;
pub mod helpers;
mod landing;
mod listing;
mod modals;
mod overlay;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; mutable because the listing keeps a `ListState`
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_nav(f, app, chunks[0]);
    header::render_search(f, app, chunks[1]);
    if app.shows_landing() {
        landing::render_landing(f, app, chunks[2]);
    } else {
        listing::render_listing(f, app, chunks[2]);
    }
    footer::render_footer(f, app, chunks[3]);

    if app.overlay.is_open {
        overlay::render_overlay(f, app, area);
    }
    modals::render_modal(f, app, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::state::{Category, Modal, Profile, ProfileStore};
    use ratatui::{Terminal, backend::TestBackend};

    fn seeded_app() -> AppState {
        let mut a = Profile::blank(1, Category::Politician);
        a.name.so = "Xamse Cali".into();
        a.name.en = "Hamza Ali".into();
        a.role.en = "Minister".into();
        a.verified = true;
        let mut b = Profile::blank(2, Category::Business);
        b.name.so = "Dahab Group".into();
        AppState {
            store: ProfileStore::from_seed(vec![a, b]),
            ..AppState::default()
        }
    }

    /// Draw a frame and flatten the buffer into one string.
    fn render(app: &mut AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut term = Terminal::new(backend).expect("terminal");
        term.draw(|f| ui(f, app)).expect("draw");
        let buffer = term.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    /// What: Landing screen shows the brand and the category cards
    fn draws_landing() {
        let mut app = seeded_app();
        app.locale = Locale::En;
        let screen = render(&mut app, 120, 40);
        assert!(screen.contains("Diiwaan"));
        assert!(screen.contains("Politicians"));
        assert!(screen.contains("Trending now"));
    }

    #[test]
    /// What: A directory listing shows its cards and result count
    fn draws_listing_with_count() {
        let mut app = seeded_app();
        app.locale = Locale::En;
        crate::logic::view::select_category(&mut app, Category::Politician);
        let screen = render(&mut app, 120, 40);
        assert!(screen.contains("Hamza Ali"));
        assert!(screen.contains("Showing 1 results"));
        assert!(!screen.contains("Dahab Group"));
    }

    #[test]
    /// What: Overlay and modals draw without panicking on a small terminal
    fn draws_overlay_and_modals_on_tiny_terminal() {
        let mut app = seeded_app();
        app.admin = true;
        crate::logic::editor::open(&mut app, 1);
        let _ = render(&mut app, 20, 8);
        crate::logic::editor::enter_edit(&mut app);
        let _ = render(&mut app, 20, 8);
        app.modal = Modal::Help;
        let _ = render(&mut app, 20, 8);
        app.modal = Modal::ShareMenu { selected: 2 };
        let _ = render(&mut app, 100, 30);
    }

    #[test]
    /// What: Empty search results show the clear-search hint
    fn draws_empty_state() {
        let mut app = seeded_app();
        app.locale = Locale::En;
        crate::logic::view::search(&mut app, "zzzz");
        let screen = render(&mut app, 120, 30);
        assert!(screen.contains("No profiles match your search."));
        assert!(screen.contains("Clear search"));
    }
}
