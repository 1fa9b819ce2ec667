use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::background::schedule_clear;
use super::channels::Channels;
use super::handlers::{handle_close_done, handle_seed_result, handle_tick};

/// Terminal type driven by the loop.
pub type Term = Terminal<CrosstermBackend<std::io::Stdout>>;

/// What: Drive the UI until the user quits.
///
/// Inputs:
/// - `terminal`: Terminal to draw into; `None` when headless
/// - `app`: Application state
/// - `channels`: Channels shared with the background workers
/// - `headless`: Exit once the seed load has been handled
///
/// Details:
/// - Redraws before waiting on the next message.
pub async fn run_event_loop(
    mut terminal: Option<&mut Term>,
    app: &mut AppState,
    channels: &mut Channels,
    headless: bool,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "draw failed");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, app, &channels.close_req_tx) {
                    break;
                }
            }
            Some(result) = channels.seed_rx.recv() => {
                handle_seed_result(app, result);
                if headless {
                    tracing::info!(profiles = app.store.len(), "headless run finished");
                    break;
                }
            }
            Some(token) = channels.close_req_rx.recv() => {
                schedule_clear(token, app.close_delay, channels.close_done_tx.clone());
            }
            Some(token) = channels.close_done_rx.recv() => {
                handle_close_done(app, token);
            }
            Some(()) = channels.tick_rx.recv() => {
                handle_tick(app);
            }
            else => break,
        }
    }
}
