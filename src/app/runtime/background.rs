use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{SeedSource, load_profiles};

use super::channels::SeedResult;

/// Interval of the housekeeping tick that expires transient indicators.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// What: Spawn the periodic tick worker.
///
/// Details:
/// - Stops once the receiving side is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Load the seed in the background and report the outcome once.
///
/// Inputs:
/// - `source`: Where to read profiles from
/// - `seed_tx`: Receives the loaded records or a readable error
pub fn spawn_seed_loader(source: SeedSource, seed_tx: mpsc::UnboundedSender<SeedResult>) {
    tokio::spawn(async move {
        tracing::info!(source = %source, "loading profiles");
        let result = load_profiles(&source).await;
        if seed_tx.send(result).is_err() {
            tracing::debug!("seed receiver dropped before load finished");
        }
    });
}

/// What: Report `token` on `done_tx` after `delay`.
///
/// Details:
/// - The overlay ignores tokens from older sessions, so reopening a profile
///   before the delay elapses keeps it on screen.
pub fn schedule_clear(token: u64, delay: Duration, done_tx: mpsc::UnboundedSender<u64>) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = done_tx.send(token);
    });
}

/// What: Spawn event reading thread for terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Atomic flag to signal thread cancellation
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is checked promptly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    // transient read errors are ignored
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    /// What: Deferred clears arrive after the delay with their token
    async fn schedule_clear_delivers_token() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        schedule_clear(7, Duration::from_millis(10), tx);
        let token = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timely")
            .expect("token");
        assert_eq!(token, 7);
    }

    #[tokio::test]
    async fn bundled_seed_loader_reports_profiles() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_seed_loader(SeedSource::Bundled, tx);
        let result = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timely")
            .expect("result");
        assert!(!result.expect("bundled seed parses").is_empty());
    }
}
