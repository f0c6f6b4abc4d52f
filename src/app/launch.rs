use anyhow::{Context, Result};

use crate::config::Config;
use crate::tui::{self, NavigationContainer};

/// Mounts the navigation container and runs it until the user quits.
///
/// # Errors
///
/// Fails when the container cannot be mounted or the terminal cannot be
/// driven. The terminal is restored before the loop's error is returned.
pub fn run(config: &Config) -> Result<()> {
    let mut shell = NavigationContainer::mount(config)?;

    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut shell, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result?;

    tracing::info!(route = shell.current_route(), "Exited");
    Ok(())
}

/// Mounts the navigation container and returns its view tree as pretty JSON.
///
/// # Errors
///
/// Fails when the container cannot be mounted.
pub fn render_tree_json(config: &Config) -> Result<String> {
    let shell = NavigationContainer::mount(config)?;
    serde_json::to_string_pretty(&shell.view_tree()).context("Failed to serialize view tree")
}
