//! Component trait pattern for TUI screens.
//!
//! This module defines the traits and types used to implement self-contained,
//! testable screens that handle their own input and rendering.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;

use super::keyboard_avoiding::KeyboardBehavior;
use super::view::ViewNode;
use super::Theme;
use crate::models::{AssetStore, DesignTokens};

/// Shared read-only data every screen renders from.
#[derive(Debug, Clone)]
pub struct ScreenContext {
    /// Design tokens
    pub tokens: Arc<DesignTokens>,
    /// Icons and images
    pub assets: Arc<AssetStore>,
    /// Navigation theme
    pub theme: Theme,
    /// Keyboard avoidance behavior for this platform
    pub keyboard_behavior: KeyboardBehavior,
    /// Rows covered by an on-screen keyboard
    pub keyboard_inset: u16,
}

/// A component that can be rendered and handle input with shared context.
///
/// Components are self-contained UI elements that manage their own state,
/// handle input, and can emit events to communicate with the parent.
pub trait Component {
    /// The type of context this component needs
    type Context;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event>;

    /// Handle mouse input.
    ///
    /// Default implementation ignores the mouse.
    fn handle_mouse(&mut self, _mouse: MouseEvent, _context: &Self::Context) -> Option<Self::Event> {
        None
    }

    /// Tell the component the area it will be rendered into.
    ///
    /// Called before the first render and whenever the terminal is resized.
    fn resize(&mut self, _area: Rect, _context: &Self::Context) {}

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, context: &Self::Context);
}

/// Events a screen emits to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// The header's back action was activated
    HeaderPressed,
}

/// A component bound to a route.
pub trait Screen: Component<Context = ScreenContext, Event = ScreenEvent> {
    /// Route this screen is registered under.
    fn route_name(&self) -> &'static str;

    /// Structural description of what the screen renders.
    fn view_tree(&self, context: &ScreenContext) -> ViewNode;
}
