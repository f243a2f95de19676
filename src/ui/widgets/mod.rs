//! Reusable UI widget components.
//!
//! This module contains the styling helpers shared by the render modules.

pub mod styling;
