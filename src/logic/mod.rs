//! Core non-UI logic split into modular submodules.
//!
//! Every transition is a plain function over [`crate::state::AppState`], so the
//! event layer stays thin and each rule can be tested without a terminal.

pub mod admin;
pub mod deeplink;
pub mod editor;
pub mod filter;
pub mod gating;
pub mod share;
pub mod view;

pub use deeplink::{PendingDeepLink, parse_location, resolve_pending};
pub use editor::CancelOutcome;
pub use filter::filter_profiles;
pub use gating::{Capabilities, capabilities};
