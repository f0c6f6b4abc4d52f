//! Sign Up screen: header, logo, and an empty form over a gradient.
//!
//! Content is laid out in its own coordinate space (row 0 = top of the
//! scrollable content), drawn into an off-screen buffer, and the visible
//! window is copied over the gradient.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::component::{Component, Screen, ScreenContext, ScreenEvent};
use super::gradient::LinearGradient;
use super::view::{NodeKind, Region, ViewNode};
use crate::models::{Asset, DesignTokens};

/// Route name the screen registers under.
pub const ROUTE_NAME: &str = "SignUp";

/// Header label.
pub const HEADER_LABEL: &str = "Sign Up";

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: u16 = 1;

/// Region rectangles in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLayout {
    /// Pressable header row (full width)
    pub header: Rect,
    /// Logo box (full width, image centered inside)
    pub logo: Rect,
    /// Form container
    pub form: Rect,
    /// Total content height
    pub height: u16,
}

impl ContentLayout {
    /// Lays out the three regions for a viewport `width` cells wide.
    #[must_use]
    pub fn new(tokens: &DesignTokens, width: u16) -> Self {
        let sizes = tokens.sizes;

        let header = Rect::new(0, sizes.pad(3.0), width, sizes.icon.1.max(1));

        let logo = Rect::new(
            0,
            header.bottom().saturating_add(sizes.pad(5.0)),
            width,
            sizes.logo_height,
        );

        let margin = sizes.pad(3.0).min(width / 2);
        let form = Rect::new(
            margin,
            logo.bottom().saturating_add(sizes.pad(3.0)),
            width.saturating_sub(margin * 2),
            sizes.form_min_height,
        );

        Self {
            header,
            logo,
            form,
            height: form.bottom(),
        }
    }

    /// Regions with their rectangles, top to bottom.
    #[must_use]
    pub const fn regions(&self) -> [(Region, Rect); 3] {
        [
            (Region::Header, self.header),
            (Region::Logo, self.logo),
            (Region::Form, self.form),
        ]
    }
}

/// State for the Sign Up screen.
///
/// The only state is the scroll position; nothing the user does changes
/// what the screen shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpScreen {
    /// Rows scrolled past the top
    scroll: u16,
    /// Area the screen was last sized to (after keyboard avoidance)
    viewport: Rect,
}

impl SignUpScreen {
    /// Creates the screen scrolled to the top.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    fn max_scroll(&self, tokens: &DesignTokens) -> u16 {
        let layout = ContentLayout::new(tokens, self.viewport.width);
        layout.height.saturating_sub(self.viewport.height)
    }

    fn scroll_by(&mut self, delta: i32, tokens: &DesignTokens) {
        let max = i32::from(self.max_scroll(tokens));
        self.scroll = (i32::from(self.scroll) + delta).clamp(0, max) as u16;
    }

    /// Header back action. Only logs for now; no navigation happens.
    fn press_header(&self) -> ScreenEvent {
        tracing::info!(route = ROUTE_NAME, "{HEADER_LABEL}");
        ScreenEvent::HeaderPressed
    }

    fn render_header(buf: &mut Buffer, area: Rect, context: &ScreenContext) {
        let tokens = &context.tokens;
        let sizes = tokens.sizes;
        let white = tokens.colors.white.to_ratatui_color();

        let icon_x = area.x.saturating_add(sizes.pad(2.0));
        let (icon_w, icon_h) = sizes.icon;
        let icon_area = Rect::new(icon_x, area.y, icon_w, icon_h).intersection(area);
        draw_asset(
            buf,
            icon_area,
            &context.assets.back_icon,
            Style::default().fg(white),
            "?",
            context,
        );

        let label_x = icon_x
            .saturating_add(icon_w)
            .saturating_add(sizes.pad(1.5));
        if label_x >= area.right() {
            return;
        }
        let width = (area.right() - label_x) as usize;
        let style = Style::default()
            .fg(white)
            .add_modifier(tokens.fonts.h4.modifier());
        buf.set_stringn(label_x, area.y, HEADER_LABEL, width, style);
    }

    fn render_logo(buf: &mut Buffer, area: Rect, context: &ScreenContext) {
        // Image box: half the width, full logo height, centered
        let box_w = area.width / 2;
        let image_area = Rect::new(
            area.x + (area.width - box_w) / 2,
            area.y,
            box_w,
            area.height,
        );
        let style = Style::default().fg(context.tokens.colors.white.to_ratatui_color());
        draw_asset(buf, image_area, &context.assets.logo, style, "[logo]", context);
    }

    fn render_form(buf: &mut Buffer, area: Rect, context: &ScreenContext) {
        // Full name, phone number, and password fields are not built yet
        context.theme.border_block().render(area, buf);
    }
}

/// Draws `asset` centered in `area`, or `placeholder` when it is missing.
fn draw_asset(
    buf: &mut Buffer,
    area: Rect,
    asset: &Asset,
    style: Style,
    placeholder: &str,
    context: &ScreenContext,
) {
    if area.is_empty() {
        return;
    }
    let lines = if asset.is_available() {
        asset.scaled_to((area.width, area.height))
    } else {
        vec![placeholder.to_string()]
    };
    let style = if asset.is_available() {
        style
    } else {
        Style::default()
            .fg(context.tokens.colors.gray.to_ratatui_color())
            .add_modifier(context.tokens.fonts.body4.modifier())
    };

    let art_h = (lines.len() as u16).min(area.height);
    let art_w = lines
        .iter()
        .map(|l| l.width() as u16)
        .max()
        .unwrap_or(0)
        .min(area.width);
    let x = area.x + (area.width - art_w) / 2;
    let y = area.y + (area.height - art_h) / 2;
    for (row, line) in lines.iter().take(art_h as usize).enumerate() {
        buf.set_stringn(x, y + row as u16, line, art_w as usize, style);
    }
}

/// Copies the visible window of `content` onto `dest` at `area`.
///
/// Blank content cells are skipped and content without its own background
/// keeps the destination background, so the gradient shows through.
fn blit(content: &Buffer, dest: &mut Buffer, area: Rect, scroll: u16) {
    let blank = Cell::default();
    for row in 0..area.height {
        let src_y = row.saturating_add(scroll);
        if src_y >= content.area.height {
            break;
        }
        for col in 0..area.width {
            let Some(src) = content.cell((col, src_y)) else {
                continue;
            };
            if *src == blank {
                continue;
            }
            let Some(dst) = dest.cell_mut((area.x + col, area.y + row)) else {
                continue;
            };
            dst.set_symbol(src.symbol());
            dst.fg = src.fg;
            dst.modifier = src.modifier;
            if src.bg != Color::Reset {
                dst.bg = src.bg;
            }
        }
    }
}

impl Component for SignUpScreen {
    type Context = ScreenContext;
    type Event = ScreenEvent;

    fn handle_input(&mut self, key: KeyEvent, context: &ScreenContext) -> Option<ScreenEvent> {
        let tokens = &context.tokens;
        let page = i32::from(self.viewport.height.max(1));
        match (key.code, key.modifiers) {
            (KeyCode::Backspace | KeyCode::Left, _) | (KeyCode::Char('b'), KeyModifiers::NONE) => {
                return Some(self.press_header());
            }
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                self.scroll_by(-1, tokens);
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                self.scroll_by(1, tokens);
            }
            (KeyCode::PageUp, _) => self.scroll_by(-page, tokens),
            (KeyCode::PageDown, _) => self.scroll_by(page, tokens),
            (KeyCode::Home, _) => self.scroll = 0,
            (KeyCode::End, _) => self.scroll = self.max_scroll(tokens),
            _ => {}
        }
        None
    }

    fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        context: &ScreenContext,
    ) -> Option<ScreenEvent> {
        let tokens = &context.tokens;
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-i32::from(WHEEL_STEP), tokens),
            MouseEventKind::ScrollDown => self.scroll_by(i32::from(WHEEL_STEP), tokens),
            MouseEventKind::Down(MouseButton::Left) => {
                let area = self.viewport;
                let inside = mouse.column >= area.x
                    && mouse.column < area.right()
                    && mouse.row >= area.y
                    && mouse.row < area.bottom();
                if !inside {
                    return None;
                }
                let layout = ContentLayout::new(tokens, area.width);
                let content_y = mouse.row - area.y + self.scroll.min(self.max_scroll(tokens));
                if content_y >= layout.header.y && content_y < layout.header.bottom() {
                    return Some(self.press_header());
                }
            }
            _ => {}
        }
        None
    }

    fn resize(&mut self, area: Rect, context: &ScreenContext) {
        self.viewport = context
            .keyboard_behavior
            .avoid(area, context.keyboard_inset);
        self.scroll = self.scroll.min(self.max_scroll(&context.tokens));
    }

    fn render(&self, f: &mut Frame, area: Rect, context: &ScreenContext) {
        let area = context
            .keyboard_behavior
            .avoid(area, context.keyboard_inset);
        if area.is_empty() {
            return;
        }

        LinearGradient::new(context.tokens.colors.gradient()).render(area, f.buffer_mut());

        let layout = ContentLayout::new(&context.tokens, area.width);
        let mut content = Buffer::empty(Rect::new(0, 0, area.width, layout.height));
        Self::render_header(&mut content, layout.header, context);
        Self::render_logo(&mut content, layout.logo, context);
        Self::render_form(&mut content, layout.form, context);

        let scroll = self
            .scroll
            .min(layout.height.saturating_sub(area.height));
        blit(&content, f.buffer_mut(), area, scroll);
    }
}

impl Screen for SignUpScreen {
    fn route_name(&self) -> &'static str {
        ROUTE_NAME
    }

    fn view_tree(&self, context: &ScreenContext) -> ViewNode {
        let tokens = &context.tokens;
        let assets = &context.assets;

        let header = ViewNode::with_children(
            NodeKind::Pressable {
                action: format!("log:{HEADER_LABEL}"),
            },
            vec![
                ViewNode::leaf(NodeKind::Image {
                    asset: assets.back_icon.name.clone(),
                    tint: Some(tokens.colors.white.to_hex()),
                    available: assets.back_icon.is_available(),
                }),
                ViewNode::leaf(NodeKind::Text {
                    content: HEADER_LABEL.to_string(),
                    font: tokens.fonts.h4.family.to_string(),
                }),
            ],
        )
        .region(Region::Header);

        let logo = ViewNode::with_children(
            NodeKind::Container,
            vec![ViewNode::leaf(NodeKind::Image {
                asset: assets.logo.name.clone(),
                tint: None,
                available: assets.logo.is_available(),
            })],
        )
        .region(Region::Logo);

        let form = ViewNode::leaf(NodeKind::Container).region(Region::Form);

        let [start, end] = tokens.colors.gradient();
        ViewNode::with_children(
            NodeKind::KeyboardAvoiding {
                behavior: context.keyboard_behavior,
            },
            vec![ViewNode::with_children(
                NodeKind::LinearGradient {
                    colors: [start.to_hex(), end.to_hex()],
                },
                vec![ViewNode::with_children(
                    NodeKind::ScrollView,
                    vec![header, logo, form],
                )],
            )],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetStore;
    use crate::tui::keyboard_avoiding::KeyboardBehavior;
    use crate::tui::Theme;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn context() -> ScreenContext {
        ScreenContext {
            tokens: Arc::new(DesignTokens::standard()),
            assets: Arc::new(AssetStore::builtin()),
            theme: Theme::dark().with_border(None),
            keyboard_behavior: KeyboardBehavior::None,
            keyboard_inset: 0,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(screen: &SignUpScreen, ctx: &ScreenContext, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                screen.render(f, area, ctx);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_layout_positions() {
        let layout = ContentLayout::new(&DesignTokens::standard(), 60);
        assert_eq!(layout.header, Rect::new(0, 3, 60, 1));
        assert_eq!(layout.logo, Rect::new(0, 9, 60, 8));
        assert_eq!(layout.form, Rect::new(3, 20, 54, 3));
        assert_eq!(layout.height, 23);
    }

    #[test]
    fn test_layout_region_order() {
        let layout = ContentLayout::new(&DesignTokens::standard(), 60);
        let regions: Vec<Region> = layout.regions().iter().map(|(r, _)| *r).collect();
        assert_eq!(regions, [Region::Header, Region::Logo, Region::Form]);
        let ys: Vec<u16> = layout.regions().iter().map(|(_, rect)| rect.y).collect();
        assert!(ys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_layout_narrow_width() {
        let layout = ContentLayout::new(&DesignTokens::standard(), 4);
        assert_eq!(layout.form.x, 2);
        assert_eq!(layout.form.width, 0);
    }

    #[test]
    fn test_renders_header_label_and_icon() {
        let ctx = context();
        let buf = draw(&SignUpScreen::new(), &ctx, 60, 30);
        let header = row_text(&buf, 3);
        assert!(header.contains(HEADER_LABEL), "header row: {header:?}");
        assert_eq!(buf[(2, 3)].symbol(), "❮");
        assert_eq!(buf[(6, 3)].symbol(), "S");
        assert_eq!(buf[(6, 3)].fg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_renders_logo_centered() {
        let ctx = context();
        let buf = draw(&SignUpScreen::new(), &ctx, 60, 30);
        // Four art rows centered in the eight-row logo box starting at row 9
        assert!(row_text(&buf, 10).trim().is_empty());
        assert!(!row_text(&buf, 11).trim().is_empty());
        assert!(!row_text(&buf, 14).trim().is_empty());
        assert!(row_text(&buf, 15).trim().is_empty());
    }

    #[test]
    fn test_gradient_fills_background() {
        let ctx = context();
        let buf = draw(&SignUpScreen::new(), &ctx, 40, 20);
        let [start, end] = ctx.tokens.colors.gradient();
        assert_eq!(buf[(0, 0)].bg, start.to_ratatui_color());
        assert_eq!(buf[(39, 19)].bg, end.to_ratatui_color());
        // Text keeps the gradient behind it
        assert_ne!(buf[(6, 3)].bg, Color::Reset);
    }

    #[test]
    fn test_missing_logo_draws_placeholder() {
        let mut ctx = context();
        ctx.assets = Arc::new(AssetStore {
            back_icon: Asset::missing("back"),
            logo: Asset::missing("logo"),
        });
        let buf = draw(&SignUpScreen::new(), &ctx, 60, 30);
        assert!(row_text(&buf, 12).contains("[logo]"));
        assert_eq!(buf[(2, 3)].symbol(), "?");
        assert!(row_text(&buf, 3).contains(HEADER_LABEL));
    }

    #[test]
    fn test_wide_glyph_logo_centered_by_cells() {
        let mut ctx = context();
        ctx.assets = Arc::new(AssetStore {
            back_icon: AssetStore::builtin().back_icon,
            logo: Asset::from_art("logo", "日本"),
        });
        let buf = draw(&SignUpScreen::new(), &ctx, 60, 30);
        // Box is x 15..45; four cells of art start at 15 + (30 - 4) / 2
        assert_eq!(buf[(28, 12)].symbol(), "日");
        assert_eq!(buf[(30, 12)].symbol(), "本");
    }

    #[test]
    fn test_header_press_by_key() {
        let ctx = context();
        let mut screen = SignUpScreen::new();
        for code in [KeyCode::Backspace, KeyCode::Left, KeyCode::Char('b')] {
            assert_eq!(
                screen.handle_input(key(code), &ctx),
                Some(ScreenEvent::HeaderPressed)
            );
        }
        assert_eq!(screen, SignUpScreen::new());
    }

    #[test]
    fn test_header_press_by_click() {
        let ctx = context();
        let mut screen = SignUpScreen::new();
        screen.resize(Rect::new(0, 0, 60, 30), &ctx);
        assert_eq!(
            screen.handle_mouse(click(30, 3), &ctx),
            Some(ScreenEvent::HeaderPressed)
        );
        assert_eq!(screen.handle_mouse(click(30, 4), &ctx), None);
        assert_eq!(screen.handle_mouse(click(30, 200), &ctx), None);
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let ctx = context();
        let mut screen = SignUpScreen::new();
        screen.resize(Rect::new(0, 0, 60, 10), &ctx);

        screen.handle_input(key(KeyCode::Up), &ctx);
        assert_eq!(screen.scroll(), 0);

        for _ in 0..100 {
            screen.handle_input(key(KeyCode::Down), &ctx);
        }
        assert_eq!(screen.scroll(), 13);

        screen.handle_input(key(KeyCode::Home), &ctx);
        assert_eq!(screen.scroll(), 0);
        screen.handle_input(key(KeyCode::End), &ctx);
        assert_eq!(screen.scroll(), 13);
        screen.handle_input(key(KeyCode::PageUp), &ctx);
        assert_eq!(screen.scroll(), 3);
    }

    #[test]
    fn test_scrolled_click_hits_header() {
        let ctx = context();
        let mut screen = SignUpScreen::new();
        screen.resize(Rect::new(0, 0, 60, 10), &ctx);
        screen.handle_input(key(KeyCode::Down), &ctx);
        screen.handle_input(key(KeyCode::Down), &ctx);
        assert_eq!(
            screen.handle_mouse(click(0, 1), &ctx),
            Some(ScreenEvent::HeaderPressed)
        );
    }

    #[test]
    fn test_tall_viewport_does_not_scroll() {
        let ctx = context();
        let mut screen = SignUpScreen::new();
        screen.resize(Rect::new(0, 0, 60, 40), &ctx);
        screen.handle_input(key(KeyCode::PageDown), &ctx);
        assert_eq!(screen.scroll(), 0);
    }

    #[test]
    fn test_scrolled_render_moves_content_up() {
        let ctx = context();
        let mut screen = SignUpScreen::new();
        screen.resize(Rect::new(0, 0, 60, 10), &ctx);
        screen.handle_input(key(KeyCode::Down), &ctx);
        let buf = draw(&screen, &ctx, 60, 10);
        assert!(row_text(&buf, 2).contains(HEADER_LABEL));
    }

    #[test]
    fn test_keyboard_padding_shrinks_viewport() {
        let mut ctx = context();
        ctx.keyboard_behavior = KeyboardBehavior::Padding;
        ctx.keyboard_inset = 5;
        let mut screen = SignUpScreen::new();
        screen.resize(Rect::new(0, 0, 60, 20), &ctx);
        screen.handle_input(key(KeyCode::End), &ctx);
        assert_eq!(screen.scroll(), 8);

        let buf = draw(&SignUpScreen::new(), &ctx, 60, 20);
        // Rows under the keyboard are left unpainted
        assert_eq!(buf[(0, 19)].bg, Color::Reset);
        assert_ne!(buf[(0, 14)].bg, Color::Reset);
    }

    #[test]
    fn test_resize_reclamps_scroll() {
        let ctx = context();
        let mut screen = SignUpScreen::new();
        screen.resize(Rect::new(0, 0, 60, 10), &ctx);
        screen.handle_input(key(KeyCode::End), &ctx);
        screen.resize(Rect::new(0, 0, 60, 20), &ctx);
        assert_eq!(screen.scroll(), 3);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let ctx = context();
        let screen = SignUpScreen::new();
        let _ = draw(&screen, &ctx, 1, 1);
        let _ = draw(&screen, &ctx, 3, 2);
    }

    #[test]
    fn test_view_tree_regions_in_order() {
        let ctx = context();
        let tree = SignUpScreen::new().view_tree(&ctx);
        assert_eq!(tree.regions(), [Region::Header, Region::Logo, Region::Form]);
    }

    #[test]
    fn test_form_has_no_inputs() {
        let ctx = context();
        let tree = SignUpScreen::new().view_tree(&ctx);
        let form = tree.find_region(Region::Form).unwrap();
        assert_eq!(form.interactive_count(), 0);
        assert!(form.children.is_empty());
        assert_eq!(tree.interactive_count(), 1);
    }

    #[test]
    fn test_view_tree_gradient_stops_in_order() {
        let ctx = context();
        let tree = SignUpScreen::new().view_tree(&ctx);
        let stops: Vec<&[String; 2]> = tree
            .iter()
            .filter_map(|n| match &n.kind {
                NodeKind::LinearGradient { colors } => Some(colors),
                _ => None,
            })
            .collect();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0], &["#00BA63".to_string(), "#2BC978".to_string()]);
    }
}
