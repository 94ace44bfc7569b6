//! Library entry for postdeck exposing the reader logic for the binary and integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod events;
pub mod i18n;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;
