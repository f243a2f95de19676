//! Event handling module.
//!
//! This module contains handlers for different event sources:
//! - Terminal events: user input polled on a separate thread
//! - Storage events: persisted values changed by another instance

pub mod storage;
pub mod terminal;
