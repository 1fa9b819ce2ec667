//! Library entry for Diiwaan exposing the directory core for the binary and integration tests.

pub mod app;
pub mod args;
pub mod events;
pub mod i18n;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
