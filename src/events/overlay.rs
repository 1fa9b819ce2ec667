//! Key handling for the detail overlay and its edit form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{editor, share};
use crate::state::{AppState, Modal, OverlayMode};

/// What: Handle a key press while the overlay is open.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `close_tx`: Channel for overlay close tokens
pub(super) fn handle_overlay_key(
    ke: KeyEvent,
    app: &mut AppState,
    close_tx: &mpsc::UnboundedSender<u64>,
) {
    match app.overlay.mode {
        OverlayMode::Edit => handle_edit_key(ke, app, close_tx),
        OverlayMode::View => handle_view_key(ke, app, close_tx),
    }
}

/// Read-only tabs: navigation, share, edit and delete.
fn handle_view_key(ke: KeyEvent, app: &mut AppState, close_tx: &mpsc::UnboundedSender<u64>) {
    match ke.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            let token = editor::close(app);
            super::schedule_close(close_tx, token);
        }
        KeyCode::Tab | KeyCode::Right => editor::next_tab(app),
        KeyCode::BackTab | KeyCode::Left => editor::prev_tab(app),
        KeyCode::Char('e') => {
            if !editor::enter_edit(app) {
                tracing::debug!("edit requires admin mode");
            }
        }
        KeyCode::Char('s') => {
            share::open_menu(app);
        }
        KeyCode::Char('c') => {
            share::copy_link(app);
        }
        KeyCode::Char('d') => {
            editor::request_delete(app);
        }
        KeyCode::Char('?') => app.modal = Modal::Help,
        _ => {}
    }
}

/// Edit form: field cursor, typing, save, delete and cancel.
fn handle_edit_key(ke: KeyEvent, app: &mut AppState, close_tx: &mpsc::UnboundedSender<u64>) {
    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        match ke.code {
            KeyCode::Char('s' | 'S') => {
                editor::save(app);
            }
            KeyCode::Char('d' | 'D') => {
                editor::request_delete(app);
            }
            _ => {}
        }
        return;
    }
    match ke.code {
        KeyCode::Esc => {
            let token = editor::cancel_edit(app);
            super::schedule_close(close_tx, token);
        }
        KeyCode::Up | KeyCode::BackTab => editor::prev_field(app),
        KeyCode::Down | KeyCode::Tab | KeyCode::Enter => editor::next_field(app),
        KeyCode::Backspace => editor::backspace(app),
        KeyCode::Char(ch) => editor::input_char(app, ch),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_event;
    use super::super::tests::{ctrl, key, seeded_app};
    use crate::state::{DetailTab, Modal};
    use crossterm::event::KeyCode;
    use tokio::sync::mpsc;

    #[test]
    /// What: Esc in the editor cancels the draft without touching the store
    fn esc_cancels_edit() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = seeded_app();
        app.admin = true;
        crate::logic::editor::open(&mut app, 1);
        handle_event(key(KeyCode::Char('e')), &mut app, &tx);
        for _ in 0..4 {
            handle_event(key(KeyCode::Down), &mut app, &tx); // name (en)
        }
        handle_event(key(KeyCode::Char('X')), &mut app, &tx);
        handle_event(key(KeyCode::Esc), &mut app, &tx);
        assert!(!app.overlay.is_editing());
        assert!(app.overlay.is_open);
        assert_eq!(app.store.get(1).map(|p| p.name.en.as_str()), Some("Hamza"));
    }

    #[test]
    /// What: Ctrl-D in the editor asks to delete, and confirming removes the record
    fn ctrl_d_deletes_from_editor() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = seeded_app();
        app.admin = true;
        crate::logic::editor::open(&mut app, 2);
        handle_event(key(KeyCode::Char('e')), &mut app, &tx);
        handle_event(ctrl('d'), &mut app, &tx);
        assert!(matches!(app.modal, Modal::ConfirmDelete { id: 2 }));
        assert!(app.overlay.is_editing());

        handle_event(key(KeyCode::Char('y')), &mut app, &tx);
        assert!(!app.store.contains(2));
        assert!(!app.overlay.is_open);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn tab_keys_cycle_detail_tabs() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = seeded_app();
        crate::logic::editor::open(&mut app, 1);
        handle_event(key(KeyCode::Tab), &mut app, &tx);
        handle_event(key(KeyCode::Tab), &mut app, &tx);
        assert_eq!(app.overlay.tab, DetailTab::WorkHistory);
        handle_event(key(KeyCode::BackTab), &mut app, &tx);
        assert_eq!(app.overlay.tab, DetailTab::Biography);
    }

    #[test]
    /// What: Edit keys are ignored outside admin mode
    fn view_mode_edit_requires_admin() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = seeded_app();
        crate::logic::editor::open(&mut app, 1);
        handle_event(key(KeyCode::Char('e')), &mut app, &tx);
        handle_event(ctrl('s'), &mut app, &tx);
        assert!(!app.overlay.is_editing());
        handle_event(key(KeyCode::Char('d')), &mut app, &tx);
        assert!(app.modal.is_none());
    }
}
