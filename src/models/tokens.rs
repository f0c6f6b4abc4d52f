//! Design tokens: the color, spacing, and font tables shared by every view.
//!
//! Tokens are built once at startup (optionally with config overrides) and
//! shared read-only behind an `Arc`. One design unit of spacing equals one
//! terminal cell.

// Token math works on small terminal dimensions
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use ratatui::style::Modifier;

use super::RgbColor;
use crate::config::ColorsConfig;

/// Named color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colors {
    /// Gradient start color
    pub lime: RgbColor,
    /// Gradient end color
    pub emerald: RgbColor,
    /// Foreground for header text and icon tint
    pub white: RgbColor,
    /// Muted foreground for placeholders
    pub gray: RgbColor,
}

impl Colors {
    /// The stock palette.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            lime: RgbColor::new(0x00, 0xBA, 0x63),
            emerald: RgbColor::new(0x2B, 0xC9, 0x78),
            white: RgbColor::new(0xFF, 0xFF, 0xFF),
            gray: RgbColor::new(0xBE, 0xC1, 0xD2),
        }
    }

    /// Background gradient stops, start first.
    #[must_use]
    pub const fn gradient(&self) -> [RgbColor; 2] {
        [self.lime, self.emerald]
    }
}

/// Spacing and dimension table, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizes {
    /// Base spacing unit
    pub padding: u16,
    /// Height reserved for the logo
    pub logo_height: u16,
    /// Height of the (empty) form container
    pub form_min_height: u16,
    /// Icon box as (width, height)
    pub icon: (u16, u16),
}

impl Sizes {
    /// The stock spacing table.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            padding: 1,
            logo_height: 8,
            form_min_height: 3,
            icon: (2, 1),
        }
    }

    /// `padding * factor`, rounded to the nearest cell.
    #[must_use]
    pub fn pad(&self, factor: f32) -> u16 {
        (self.padding as f32 * factor).round().max(0.0) as u16
    }
}

/// A font definition.
///
/// Terminals have a single face and size; only the weight survives
/// rendering (as `Modifier::BOLD`). Size and line height are kept for the
/// view tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    /// Font family name
    pub family: &'static str,
    /// Font size in design units
    pub size: u16,
    /// Line height in design units
    pub line_height: u16,
}

impl Font {
    /// Text modifier that approximates this font in a terminal.
    #[must_use]
    pub fn modifier(&self) -> Modifier {
        if self.family.ends_with("-Bold") {
            Modifier::BOLD
        } else {
            Modifier::empty()
        }
    }
}

/// Named font table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fonts {
    /// Heading 4 (screen titles)
    pub h4: Font,
    /// Small body text
    pub body4: Font,
}

impl Fonts {
    /// The stock font table.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            h4: Font {
                family: "Roboto-Bold",
                size: 18,
                line_height: 22,
            },
            body4: Font {
                family: "Roboto-Regular",
                size: 14,
                line_height: 22,
            },
        }
    }
}

/// Every token table in one immutable bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignTokens {
    /// Colors
    pub colors: Colors,
    /// Spacing
    pub sizes: Sizes,
    /// Fonts
    pub fonts: Fonts,
}

impl DesignTokens {
    /// The stock token set.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            colors: Colors::standard(),
            sizes: Sizes::standard(),
            fonts: Fonts::standard(),
        }
    }

    /// Builds the token set, applying color overrides from config.
    pub fn from_config(colors: &ColorsConfig) -> Result<Self> {
        let mut tokens = Self::standard();
        if let Some([start, end]) = &colors.gradient {
            tokens.colors.lime =
                RgbColor::from_hex(start).context("Invalid gradient start color")?;
            tokens.colors.emerald =
                RgbColor::from_hex(end).context("Invalid gradient end color")?;
        }
        Ok(tokens)
    }
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self::standard()
    }
}
