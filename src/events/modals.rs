//! Key handling while a modal dialog is active.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{admin, editor, share};
use crate::state::{AppState, Modal, ShareTarget};

/// What: Handle a key press for the active modal.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `close_tx`: Channel for overlay close tokens (delete may close the overlay)
///
/// Details:
/// - Every modal consumes all keys; nothing leaks to the overlay or listing.
pub(super) fn handle_modal_key(
    ke: KeyEvent,
    app: &mut AppState,
    close_tx: &mpsc::UnboundedSender<u64>,
) {
    match &mut app.modal {
        Modal::None => {}
        Modal::Alert { .. } | Modal::Help | Modal::Article { .. } => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('?')) {
                app.modal = Modal::None;
            }
        }
        Modal::AdminLogin { input } => match ke.code {
            KeyCode::Esc => app.modal = Modal::None,
            KeyCode::Enter => {
                admin::submit_prompt(app);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(ch) => input.push(ch),
            _ => {}
        },
        Modal::ConfirmLogout => match ke.code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => admin::logout(app),
            KeyCode::Esc | KeyCode::Char('n' | 'N') => app.modal = Modal::None,
            _ => {}
        },
        Modal::ConfirmDelete { id } => match ke.code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => {
                let id = *id;
                let token = editor::confirm_delete(app, id);
                super::schedule_close(close_tx, token);
            }
            KeyCode::Esc | KeyCode::Char('n' | 'N') => app.modal = Modal::None,
            _ => {}
        },
        Modal::ShareMenu { selected } => match ke.code {
            KeyCode::Up | KeyCode::Char('k') => *selected = selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                *selected = (*selected + 1).min(ShareTarget::ALL.len() - 1);
            }
            KeyCode::Enter => {
                let target = ShareTarget::ALL[(*selected).min(ShareTarget::ALL.len() - 1)];
                share::activate(app, target);
            }
            KeyCode::Esc => app.modal = Modal::None,
            _ => {}
        },
    }
}
