//! Icon and image assets rendered as text art.
//!
//! Every asset has a built-in default. Config may point an asset at a text
//! file instead; a file that cannot be used turns the asset into a missing
//! one, which views draw as a placeholder.

// Allow intentional type casts for scaling math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use crate::config::AssetsConfig;

/// Built-in back arrow icon.
pub const BACK_ICON_ART: &str = "❮";

/// Built-in logo art.
pub const LOGO_ART: &str = r" __      __   _ _ _
 \ \    / /_ _| | (_)___
  \ \/\/ / _` | | | / -_)
   \_/\_/\__,_|_|_|_\___|";

/// A named piece of text art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Asset name (used for placeholders and logging)
    pub name: String,
    /// Art lines, `None` when the asset is missing
    lines: Option<Vec<String>>,
}

impl Asset {
    /// Creates an asset from inline art.
    #[must_use]
    pub fn from_art(name: &str, art: &str) -> Self {
        let lines: Vec<String> = art.lines().map(str::to_string).collect();
        Self {
            name: name.to_string(),
            lines: if lines.is_empty() { None } else { Some(lines) },
        }
    }

    /// Creates a missing asset.
    #[must_use]
    pub fn missing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            lines: None,
        }
    }

    /// Reads art from a text file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no art.
    pub fn from_file(name: &str, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read asset file: {}", path.display()))?;
        if content.trim().is_empty() {
            anyhow::bail!("Asset file is empty: {}", path.display());
        }
        Ok(Self::from_art(name, content.trim_end()))
    }

    /// Whether the asset has art to draw.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.lines.is_some()
    }

    /// Art lines (empty for missing assets).
    #[must_use]
    pub fn lines(&self) -> &[String] {
        self.lines.as_deref().unwrap_or(&[])
    }

    /// Native size as (width, height) in cells.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        let lines = self.lines();
        let width = lines
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0);
        (
            width.min(u16::MAX as usize) as u16,
            lines.len().min(u16::MAX as usize) as u16,
        )
    }

    /// Art scaled down to fit `bounds` with the aspect ratio preserved.
    ///
    /// Art that already fits is returned at native size.
    #[must_use]
    pub fn scaled_to(&self, bounds: (u16, u16)) -> Vec<String> {
        let src = self.size();
        let (w, h) = contain(src, bounds);
        if (w, h) == src {
            return self.lines().to_vec();
        }
        let grid: Vec<Vec<char>> = self.lines().iter().map(|l| l.chars().collect()).collect();
        (0..h)
            .map(|row| {
                let sy = (row as usize * src.1 as usize) / h as usize;
                (0..w)
                    .map(|col| {
                        let sx = (col as usize * src.0 as usize) / w as usize;
                        grid.get(sy)
                            .and_then(|line| line.get(sx))
                            .copied()
                            .unwrap_or(' ')
                    })
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

/// Proportional fit of `src` into `bounds` (down-scaling only).
///
/// Returns (0, 0) when either side is empty.
#[must_use]
pub fn contain(src: (u16, u16), bounds: (u16, u16)) -> (u16, u16) {
    if src.0 == 0 || src.1 == 0 || bounds.0 == 0 || bounds.1 == 0 {
        return (0, 0);
    }
    if src.0 <= bounds.0 && src.1 <= bounds.1 {
        return src;
    }
    let factor = (bounds.0 as f32 / src.0 as f32).min(bounds.1 as f32 / src.1 as f32);
    let w = ((src.0 as f32 * factor).floor() as u16).clamp(1, bounds.0);
    let h = ((src.1 as f32 * factor).floor() as u16).clamp(1, bounds.1);
    (w, h)
}

/// All assets used by the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetStore {
    /// Back navigation icon
    pub back_icon: Asset,
    /// Application logo
    pub logo: Asset,
}

impl AssetStore {
    /// Built-in assets only.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            back_icon: Asset::from_art("back", BACK_ICON_ART),
            logo: Asset::from_art("logo", LOGO_ART),
        }
    }

    /// Loads assets, honoring config overrides.
    ///
    /// Never fails: unreadable overrides are logged and become missing assets.
    #[must_use]
    pub fn load(config: &AssetsConfig) -> Self {
        let builtin = Self::builtin();
        Self {
            back_icon: Self::resolve("back", config.back_icon.as_deref(), builtin.back_icon),
            logo: Self::resolve("logo", config.logo.as_deref(), builtin.logo),
        }
    }

    fn resolve(name: &str, path: Option<&Path>, fallback: Asset) -> Asset {
        let Some(path) = path else {
            return fallback;
        };
        match Asset::from_file(name, path) {
            Ok(asset) => {
                tracing::debug!(asset = name, path = %path.display(), "Loaded asset override");
                asset
            }
            Err(e) => {
                tracing::warn!(asset = name, "Asset unavailable, drawing placeholder: {e:#}");
                Asset::missing(name)
            }
        }
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::builtin()
    }
}
