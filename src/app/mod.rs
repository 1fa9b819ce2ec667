//! Diiwaan application module.
//!
//! Terminal setup lives in `terminal`; the event loop, background workers
//! and channel handlers live under `runtime`.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::run;
