//! Terminal user interface: screens, navigation, and the event loop.
//!
//! This module contains the main TUI loop, terminal setup and teardown,
//! and all UI widgets using Ratatui.

pub mod component;
pub mod gradient;
pub mod keyboard_avoiding;
pub mod navigation;
pub mod sign_up;
pub mod theme;
pub mod view;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

// Re-export TUI components
pub use component::{Component, Screen, ScreenContext, ScreenEvent};
pub use gradient::LinearGradient;
pub use keyboard_avoiding::{KeyboardBehavior, Platform};
pub use navigation::{NavigationContainer, ScreenOptions, ShellOutcome, StackNavigator};
pub use sign_up::SignUpScreen;
pub use theme::Theme;
pub use view::{NodeKind, Region, ViewNode};

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<B: Backend>(shell: &mut NavigationContainer, terminal: &mut Terminal<B>) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    shell.resize(Rect::new(0, 0, size.width, size.height));

    loop {
        terminal
            .draw(|f| shell.render(f))
            .context("Failed to draw frame")?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if shell.handle_event(&event) == ShellOutcome::Quit {
                tracing::info!("Quit requested");
                break;
            }
        }
    }

    Ok(())
}
