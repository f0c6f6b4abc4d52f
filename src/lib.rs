//! Wallie Library
//!
//! This library provides the pieces of the Wallie sign-up screen: design
//! tokens and assets, configuration, a stack navigator with a single route,
//! and a terminal renderer built on Ratatui.

// Module declarations
pub mod app;
pub mod branding;
pub mod config;
pub mod logging;
pub mod models;
pub mod tui;
