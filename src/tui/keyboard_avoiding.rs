//! Layout adjustment for platforms with on-screen keyboards.
//!
//! On platforms whose keyboard overlays the app, the screen area is shrunk
//! from the bottom so content shifts up above the keyboard.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Platform profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    /// iOS: keyboard overlays content
    Ios,
    /// Android: the system resizes the window itself
    Android,
    /// Desktop terminals: no on-screen keyboard
    Desktop,
}

impl Platform {
    /// Platform of the build target.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else {
            Self::Desktop
        }
    }
}

/// How content reacts to an on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardBehavior {
    /// Pad the bottom by the keyboard height
    Padding,
    /// Leave layout alone
    None,
}

impl KeyboardBehavior {
    /// Behavior used on `platform`.
    #[must_use]
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Self::Padding,
            Platform::Android | Platform::Desktop => Self::None,
        }
    }

    /// Area left for content when `keyboard_inset` rows are covered.
    #[must_use]
    pub const fn avoid(self, area: Rect, keyboard_inset: u16) -> Rect {
        match self {
            Self::Padding => Rect {
                height: area.height.saturating_sub(keyboard_inset),
                ..area
            },
            Self::None => area,
        }
    }
}
