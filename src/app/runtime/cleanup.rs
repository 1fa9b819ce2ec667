use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::channels::Channels;

/// What: Stop background work on exit.
///
/// Details:
/// - Signals the input thread to exit and logs whether an edit was abandoned.
pub fn cleanup_on_exit(app: &AppState, channels: &Channels) {
    tracing::debug!("main loop exited");
    if app.overlay.is_editing() {
        tracing::info!(id = ?app.overlay.open_id, "unsaved edit discarded on exit");
    }
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
}
