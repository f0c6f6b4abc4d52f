//! Application orchestration layer
//!
//! This module provides high-level orchestration functions that coordinate
//! between config, logging, and the TUI without containing detailed
//! implementation logic.

/// Mounting the navigation container and running it
pub mod launch;

pub use launch::{render_tree_json, run};
