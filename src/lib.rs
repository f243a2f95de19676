//! Navigation and gesture core for a content scheduling dashboard.
//!
//! The core owns which page is shown, which overlays are open and the order
//! of the bottom navigation bar. Input recognizers turn touch, wheel and
//! keyboard input into commands that `state::State` applies.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod logger;
pub mod state;
pub mod store;
pub mod ui;
