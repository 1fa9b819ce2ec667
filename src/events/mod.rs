//! Event handling layer for Diiwaan's TUI.
//!
//! Keys are routed in priority order: the active modal, then the detail
//! overlay, then the listing/landing keymap.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::AppState;

mod global;
mod modals;
mod overlay;

/// What: Forward an overlay close token to the runtime so it can schedule the deferred clear.
///
/// Details:
/// - A closed channel only means the runtime is shutting down; the token is dropped.
pub(crate) fn schedule_close(close_tx: &mpsc::UnboundedSender<u64>, token: Option<u64>) {
    if let Some(token) = token
        && close_tx.send(token).is_err()
    {
        tracing::debug!(token, "close channel gone; skipping deferred clear");
    }
}

/// Whether the key is Ctrl-C.
const fn is_ctrl_c(ke: &KeyEvent) -> bool {
    matches!(ke.code, KeyCode::Char('c')) && ke.modifiers.contains(KeyModifiers::CONTROL)
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Mutable application state
/// - `close_tx`: Receives session tokens of closed overlays
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState, close_tx: &mpsc::UnboundedSender<u64>) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if is_ctrl_c(&ke) {
        return true;
    }
    if !app.modal.is_none() {
        modals::handle_modal_key(ke, app, close_tx);
        return false;
    }
    if app.overlay.is_open {
        overlay::handle_overlay_key(ke, app, close_tx);
        return false;
    }
    global::handle_global_key(ke, app)
}
