//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths) to make
//! future rebranding easier. Change values here to rebrand the entire application.

/// The human-readable display name of the application.
///
/// Used in:
/// - Startup banner
/// - Help text
pub const APP_DISPLAY_NAME: &str = "Wallie";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in:
/// - Cargo.toml package name
/// - Default log file name
pub const APP_BINARY_NAME: &str = "wallie";

/// The directory name for application data (config, logs).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Wallie";

/// Short description for package metadata and help text.
pub const APP_DESCRIPTION: &str = "Terminal rendition of the Wallie sign-up screen";
