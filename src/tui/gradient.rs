//! Two-stop diagonal background gradient.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_lossless)]

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::models::RgbColor;

/// Diagonal gradient from the top-left (start) to the bottom-right (end).
///
/// Only cell backgrounds are painted; symbols and foregrounds are left as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearGradient {
    /// Stops in paint order: start, end
    pub colors: [RgbColor; 2],
}

impl LinearGradient {
    /// Creates a gradient from its two stops.
    #[must_use]
    pub const fn new(colors: [RgbColor; 2]) -> Self {
        Self { colors }
    }

    /// Color at cell (`x`, `y`) of a `width` x `height` area.
    #[must_use]
    pub fn color_at(&self, x: u16, y: u16, width: u16, height: u16) -> RgbColor {
        let axis = |pos: u16, len: u16| -> f32 {
            if len <= 1 {
                0.0
            } else {
                pos as f32 / (len - 1) as f32
            }
        };
        let t = (axis(x, width) + axis(y, height)) / 2.0;
        let [start, end] = self.colors;
        start.lerp(&end, t)
    }
}

impl Widget for LinearGradient {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        for y in 0..area.height {
            for x in 0..area.width {
                let color = self.color_at(x, y, area.width, area.height).to_ratatui_color();
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_bg(color);
                }
            }
        }
    }
}
