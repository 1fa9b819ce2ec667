//! Listing, landing and search keymap (no modal, overlay closed).

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{admin, editor, view};
use crate::state::{AppState, Category, INSIGHTS, Modal};

/// What: Handle a key while the search box has focus.
///
/// Details:
/// - Printable characters edit the query; Esc and Enter leave the box and
///   keep the query; arrows still move the listing cursor.
fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Esc | KeyCode::Enter => app.search_focused = false,
        KeyCode::Backspace => view::pop_query_char(app),
        KeyCode::Up => view::move_selection(app, -1),
        KeyCode::Down => view::move_selection(app, 1),
        KeyCode::Char(ch) => view::push_query_char(app, ch),
        _ => {}
    }
}

/// What: Activate the highlighted landing tile.
///
/// Details:
/// - Tiles are the two category cards followed by the insight articles.
fn activate_landing_tile(app: &mut AppState) {
    match app.landing_selected {
        0 => view::select_category(app, Category::Politician),
        1 => view::select_category(app, Category::Business),
        n => {
            let index = n - 2;
            if index < INSIGHTS.len() {
                app.modal = Modal::Article { index };
            }
        }
    }
}

/// What: Handle a key on the landing screen or a listing.
///
/// Output:
/// - `true` when the application should exit.
pub(super) fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> bool {
    if app.search_focused {
        handle_search_key(ke, app);
        return false;
    }
    let landing = app.shows_landing();
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => app.search_focused = true,
        KeyCode::Char('1') => view::select_category(app, Category::Politician),
        KeyCode::Char('2') => view::select_category(app, Category::Business),
        KeyCode::Char('h') | KeyCode::Home => view::reset_to_home(app),
        KeyCode::Char('l') => view::cycle_locale(app),
        KeyCode::Char('a') => admin::open_prompt(app),
        KeyCode::Char('n') => {
            if editor::add_profile(app).is_none() {
                tracing::debug!("adding profiles requires admin mode");
            }
        }
        KeyCode::Char('?') => app.modal = Modal::Help,
        KeyCode::Char('x') | KeyCode::Esc => view::reset_to_home(app),
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') if landing => {
            view::move_landing_selection(app, -1);
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') if landing => {
            view::move_landing_selection(app, 1);
        }
        KeyCode::Enter if landing => activate_landing_tile(app),
        KeyCode::Up | KeyCode::Char('k') => view::move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => view::move_selection(app, 1),
        KeyCode::PageUp => view::move_selection(app, -10),
        KeyCode::PageDown => view::move_selection(app, 10),
        KeyCode::Enter => {
            if let Some(id) = app.selected_profile().map(|p| p.id) {
                editor::open(app, id);
            }
        }
        _ => {}
    }
    false
}
