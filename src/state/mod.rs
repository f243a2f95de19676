//! Application state management module.
//!
//! This module contains the core state management for the dashboard:
//! - Page identifiers and parsed routes
//! - The navigation controller and the state it owns
//! - The root `State` container wiring recognizers, drag reordering and the
//!   persisted order together

mod navigation;
mod page;
mod state_impl;

pub use navigation::{Mode, NavigationState, Navigator, Overlays};
pub use page::{PageId, Route, SettingsSection, PRIMARY_DESTINATIONS};
pub use state_impl::State;
