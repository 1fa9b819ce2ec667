use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::Profile;

/// Outcome of one seed load.
pub type SeedResult = Result<Vec<Profile>, String>;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the senders and receivers shared by the main event loop and
///   the background workers (input thread, tick timer, seed loader and
///   deferred overlay clears).
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    pub seed_tx: mpsc::UnboundedSender<SeedResult>,
    pub seed_rx: mpsc::UnboundedReceiver<SeedResult>,
    /// Session tokens of overlays that just closed.
    pub close_req_tx: mpsc::UnboundedSender<u64>,
    pub close_req_rx: mpsc::UnboundedReceiver<u64>,
    /// Tokens whose close delay has elapsed.
    pub close_done_tx: mpsc::UnboundedSender<u64>,
    pub close_done_rx: mpsc::UnboundedReceiver<u64>,
}

impl Channels {
    /// Create every channel pair and the input-thread cancellation flag.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        let (seed_tx, seed_rx) = mpsc::unbounded_channel::<SeedResult>();
        let (close_req_tx, close_req_rx) = mpsc::unbounded_channel::<u64>();
        let (close_done_tx, close_done_rx) = mpsc::unbounded_channel::<u64>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            tick_tx,
            tick_rx,
            seed_tx,
            seed_rx,
            close_req_tx,
            close_req_rx,
            close_done_tx,
            close_done_rx,
        }
    }
}
