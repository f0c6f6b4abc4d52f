//! Theme system for consistent UI colors across dark and light modes.
//!
//! This module provides a centralized theme management system that automatically
//! detects the OS theme (dark/light mode) and applies appropriate colors.
//! The navigation shell derives its own theme from this one by overriding the
//! border token.

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Padding},
};

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for titles and emphasis
    pub primary: Color,
    /// Main background color (behind chrome that has no gradient)
    pub background: Color,
    /// Border color; `None` is transparent (no border glyphs drawn)
    pub border: Option<Color>,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode, and returns the matching theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the theme for a user preference.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            background: Color::Black,
            border: Some(Color::Gray),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            background: Color::White,
            border: Some(Color::Rgb(180, 180, 180)),
        }
    }

    /// Copy of this theme with the border token replaced.
    #[must_use]
    pub fn with_border(mut self, border: Option<Color>) -> Self {
        self.border = border;
        self
    }

    /// Whether borders are transparent.
    #[must_use]
    pub const fn is_border_transparent(&self) -> bool {
        self.border.is_none()
    }

    /// A bordered block styled with the border token.
    ///
    /// A transparent border draws nothing but keeps the one-cell inset, so
    /// content lands in the same place either way.
    #[must_use]
    pub fn border_block(&self) -> Block<'static> {
        match self.border {
            Some(color) => Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
            None => Block::default().padding(Padding::uniform(1)),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
