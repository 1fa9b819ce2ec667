use ratatui::{Terminal, backend::CrosstermBackend};

use crate::args::Args;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
mod event_loop;
mod handlers;
mod init;

use background::{spawn_event_thread, spawn_seed_loader, spawn_tick_worker};
use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;
use init::initialize_app_state;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the Diiwaan TUI end-to-end.
///
/// Inputs:
/// - `args`: Parsed command line (locale, seed source, startup deep link)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Builds state from settings and arguments, starts the seed load, the
///   input thread and the tick timer, then drives the event loop.
/// - Headless runs (see [`crate::util::HEADLESS_ENV`]) skip the terminal and
///   exit after the seed load has been handled.
pub async fn run(args: &Args) -> Result<()> {
    let headless = crate::util::is_headless();
    let (mut app, source) = initialize_app_state(args, headless);
    let mut channels = Channels::new();

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    spawn_seed_loader(source, channels.seed_tx.clone());
    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    run_event_loop(terminal.as_mut(), &mut app, &mut channels, headless).await;

    cleanup_on_exit(&app, &channels);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
