//! Data models for design tokens, colors, and assets.
//!
//! These are plain values built once at startup and shared read-only.
//! Models are independent of terminal I/O and event handling.

pub mod assets;
pub mod rgb;
pub mod tokens;

// Re-export all model types
pub use assets::{contain, Asset, AssetStore};
pub use rgb::RgbColor;
pub use tokens::{Colors, DesignTokens, Font, Fonts, Sizes};
