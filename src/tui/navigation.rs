//! Stack navigator and the navigation container that hosts it.
//!
//! The container owns the shared screen context (tokens, assets, navigation
//! theme) and routes terminal events to the visible screen. Only one route is
//! registered and no transitions are defined, so the visible route never
//! changes after mount.

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};
use std::sync::Arc;

use super::component::{Component, Screen, ScreenContext, ScreenEvent};
use super::keyboard_avoiding::KeyboardBehavior;
use super::sign_up::{self, SignUpScreen};
use super::view::{NodeKind, ViewNode};
use super::Theme;
use crate::config::Config;
use crate::models::{AssetStore, DesignTokens};

/// Builds a screen for a route.
type ScreenFactory = Box<dyn FnOnce(&ScreenContext) -> Box<dyn Screen>>;

/// Options applied to every screen in a navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOptions {
    /// Draw a header bar with the route name above the screen
    pub header_shown: bool,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self { header_shown: true }
    }
}

/// Builder for [`StackNavigator`].
#[derive(Default)]
pub struct StackNavigatorBuilder {
    options: ScreenOptions,
    initial_route: Option<String>,
    screens: Vec<(&'static str, ScreenFactory)>,
}

impl StackNavigatorBuilder {
    /// Sets the options applied to every screen.
    pub fn screen_options(mut self, options: ScreenOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the route shown on mount (defaults to the first registered one).
    pub fn initial_route_name(mut self, name: impl Into<String>) -> Self {
        self.initial_route = Some(name.into());
        self
    }

    /// Registers a screen under `name`.
    pub fn screen<F>(mut self, name: &'static str, factory: F) -> Self
    where
        F: FnOnce(&ScreenContext) -> Box<dyn Screen> + 'static,
    {
        let factory: ScreenFactory = Box::new(factory);
        self.screens.push((name, factory));
        self
    }

    /// Validates the registry and mounts the initial route.
    ///
    /// # Errors
    ///
    /// Fails when no screen is registered, a route name is registered twice,
    /// the initial route is unknown, or a screen reports a different route
    /// name than it was registered under.
    pub fn build(self, context: &ScreenContext) -> Result<StackNavigator> {
        let Some(first) = self.screens.first().map(|(name, _)| *name) else {
            anyhow::bail!("Navigator has no screens registered");
        };

        let mut routes: Vec<&'static str> = Vec::with_capacity(self.screens.len());
        for (name, _) in &self.screens {
            if routes.contains(name) {
                anyhow::bail!("Route '{name}' is registered more than once");
            }
            routes.push(*name);
        }

        let initial = self.initial_route.unwrap_or_else(|| first.to_string());
        let (name, factory) = self
            .screens
            .into_iter()
            .find(|(name, _)| *name == initial)
            .with_context(|| {
                format!(
                    "Initial route '{initial}' is not registered (known routes: {})",
                    routes.join(", ")
                )
            })?;

        let active = factory(context);
        if active.route_name() != name {
            anyhow::bail!(
                "Screen registered as '{name}' reports route '{}'",
                active.route_name()
            );
        }

        Ok(StackNavigator {
            options: self.options,
            routes,
            active,
        })
    }
}

/// Navigator with one visible screen.
pub struct StackNavigator {
    options: ScreenOptions,
    routes: Vec<&'static str>,
    active: Box<dyn Screen>,
}

impl StackNavigator {
    /// Starts building a navigator.
    #[must_use]
    pub fn builder() -> StackNavigatorBuilder {
        StackNavigatorBuilder::default()
    }

    /// Name of the visible route.
    #[must_use]
    pub fn current_route(&self) -> &'static str {
        self.active.route_name()
    }

    /// Registered route names, in registration order.
    #[must_use]
    pub fn routes(&self) -> &[&'static str] {
        &self.routes
    }

    /// Screen options in effect.
    #[must_use]
    pub const fn options(&self) -> ScreenOptions {
        self.options
    }

    /// Area left to the screen once header chrome is taken out.
    #[must_use]
    pub fn screen_area(&self, area: Rect) -> Rect {
        if self.options.header_shown {
            Rect {
                y: area.y.saturating_add(1),
                height: area.height.saturating_sub(1),
                ..area
            }
        } else {
            area
        }
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Keep running
    Continue,
    /// Leave the event loop
    Quit,
}

/// Top-level container: navigation theme, shared context, and navigator.
pub struct NavigationContainer {
    context: ScreenContext,
    navigator: StackNavigator,
}

impl NavigationContainer {
    /// Wraps an already built navigator.
    #[must_use]
    pub const fn new(context: ScreenContext, navigator: StackNavigator) -> Self {
        Self { context, navigator }
    }

    /// Mounts the application: Sign Up as the only route, no header chrome,
    /// transparent borders.
    ///
    /// # Errors
    ///
    /// Fails on invalid color overrides in the config.
    pub fn mount(config: &Config) -> Result<Self> {
        let tokens = DesignTokens::from_config(&config.colors)
            .context("Failed to build design tokens")?;
        let assets = AssetStore::load(&config.assets);
        let theme = Theme::from_mode(config.ui.theme_mode).with_border(None);
        let platform = config.ui.platform();

        let context = ScreenContext {
            tokens: Arc::new(tokens),
            assets: Arc::new(assets),
            theme,
            keyboard_behavior: KeyboardBehavior::for_platform(platform),
            keyboard_inset: config.ui.keyboard_inset,
        };

        let navigator = StackNavigator::builder()
            .screen_options(ScreenOptions {
                header_shown: false,
            })
            .initial_route_name(sign_up::ROUTE_NAME)
            .screen(sign_up::ROUTE_NAME, |_| Box::new(SignUpScreen::new()))
            .build(&context)?;

        tracing::info!(
            route = navigator.current_route(),
            ?platform,
            "Mounted navigation container"
        );

        Ok(Self::new(context, navigator))
    }

    /// Name of the visible route.
    #[must_use]
    pub fn current_route(&self) -> &'static str {
        self.navigator.current_route()
    }

    /// Shared screen context.
    #[must_use]
    pub const fn context(&self) -> &ScreenContext {
        &self.context
    }

    /// The navigator.
    #[must_use]
    pub const fn navigator(&self) -> &StackNavigator {
        &self.navigator
    }

    /// Sizes the visible screen for a terminal of `area`.
    pub fn resize(&mut self, area: Rect) {
        let screen_area = self.navigator.screen_area(area);
        self.navigator.active.resize(screen_area, &self.context);
    }

    /// Routes one terminal event.
    pub fn handle_event(&mut self, event: &Event) -> ShellOutcome {
        let screen_event = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit_key(key) {
                    return ShellOutcome::Quit;
                }
                self.navigator.active.handle_input(*key, &self.context)
            }
            Event::Mouse(mouse) => self.navigator.active.handle_mouse(*mouse, &self.context),
            Event::Resize(width, height) => {
                self.resize(Rect::new(0, 0, *width, *height));
                None
            }
            _ => None,
        };

        if let Some(screen_event) = screen_event {
            self.dispatch(screen_event);
        }
        ShellOutcome::Continue
    }

    fn dispatch(&self, event: ScreenEvent) {
        match event {
            ScreenEvent::HeaderPressed => {
                tracing::debug!(
                    route = self.current_route(),
                    "Header pressed; no transition defined, staying on route"
                );
            }
        }
    }

    /// Renders the container into the whole frame.
    pub fn render(&self, f: &mut Frame) {
        let area = f.area();
        let theme = &self.context.theme;
        f.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        if self.navigator.options.header_shown {
            let chrome = Rect { height: 1.min(area.height), ..area };
            let title = Paragraph::new(self.current_route()).style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            );
            f.render_widget(title, chrome);
        }

        let screen_area = self.navigator.screen_area(area);
        self.navigator.active.render(f, screen_area, &self.context);
    }

    /// Structural description of everything the container renders.
    #[must_use]
    pub fn view_tree(&self) -> ViewNode {
        ViewNode::with_children(
            NodeKind::Navigator {
                route: self.current_route().to_string(),
                header_shown: self.navigator.options.header_shown,
            },
            vec![self.navigator.active.view_tree(&self.context)],
        )
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Char('q') | KeyCode::Esc, KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::tui::view::Region;
    use ratatui::{backend::TestBackend, Terminal};

    fn config() -> Config {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        config
    }

    fn context() -> ScreenContext {
        ScreenContext {
            tokens: Arc::new(DesignTokens::standard()),
            assets: Arc::new(AssetStore::builtin()),
            theme: Theme::dark(),
            keyboard_behavior: KeyboardBehavior::None,
            keyboard_inset: 0,
        }
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_mount_shows_sign_up() {
        let shell = NavigationContainer::mount(&config()).unwrap();
        assert_eq!(shell.current_route(), "SignUp");
        assert_eq!(shell.navigator().routes(), ["SignUp"]);
        assert!(!shell.navigator().options().header_shown);
    }

    #[test]
    fn test_mount_uses_transparent_borders() {
        let shell = NavigationContainer::mount(&config()).unwrap();
        assert!(shell.context().theme.is_border_transparent());
        assert_eq!(shell.context().theme.primary, Theme::dark().primary);
    }

    #[test]
    fn test_mount_rejects_bad_gradient() {
        let mut config = config();
        config.colors.gradient = Some(["nope".to_string(), "#FFFFFF".to_string()]);
        assert!(NavigationContainer::mount(&config).is_err());
    }

    #[test]
    fn test_builder_requires_screens() {
        assert!(StackNavigator::builder().build(&context()).is_err());
    }

    #[test]
    fn test_builder_rejects_unknown_initial_route() {
        let result = StackNavigator::builder()
            .initial_route_name("Login")
            .screen(sign_up::ROUTE_NAME, |_| Box::new(SignUpScreen::new()))
            .build(&context());
        let err = result.err().unwrap();
        assert!(err.to_string().contains("Login"));
    }

    #[test]
    fn test_builder_rejects_duplicate_routes() {
        let result = StackNavigator::builder()
            .screen(sign_up::ROUTE_NAME, |_| Box::new(SignUpScreen::new()))
            .screen(sign_up::ROUTE_NAME, |_| Box::new(SignUpScreen::new()))
            .build(&context());
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_mismatched_route_name() {
        let result = StackNavigator::builder()
            .screen("Login", |_| Box::new(SignUpScreen::new()))
            .build(&context());
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_defaults_to_first_route() {
        let navigator = StackNavigator::builder()
            .screen(sign_up::ROUTE_NAME, |_| Box::new(SignUpScreen::new()))
            .build(&context())
            .unwrap();
        assert_eq!(navigator.current_route(), "SignUp");
        assert!(navigator.options().header_shown);
    }

    #[test]
    fn test_screen_area_with_header() {
        let navigator = StackNavigator::builder()
            .screen(sign_up::ROUTE_NAME, |_| Box::new(SignUpScreen::new()))
            .build(&context())
            .unwrap();
        assert_eq!(
            navigator.screen_area(Rect::new(0, 0, 80, 24)),
            Rect::new(0, 1, 80, 23)
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut shell = NavigationContainer::mount(&config()).unwrap();
        assert_eq!(
            shell.handle_event(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            ShellOutcome::Quit
        );
        assert_eq!(
            shell.handle_event(&key(KeyCode::Esc, KeyModifiers::NONE)),
            ShellOutcome::Quit
        );
        assert_eq!(
            shell.handle_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ShellOutcome::Quit
        );
        assert_eq!(
            shell.handle_event(&key(KeyCode::Char('c'), KeyModifiers::NONE)),
            ShellOutcome::Continue
        );
    }

    #[test]
    fn test_header_press_keeps_route() {
        let mut shell = NavigationContainer::mount(&config()).unwrap();
        let before = shell.view_tree();
        let outcome = shell.handle_event(&key(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(outcome, ShellOutcome::Continue);
        assert_eq!(shell.current_route(), "SignUp");
        assert_eq!(shell.view_tree(), before);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut shell = NavigationContainer::mount(&config()).unwrap();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(shell.handle_event(&Event::Key(release)), ShellOutcome::Continue);
    }

    #[test]
    fn test_view_tree_root_is_navigator() {
        let shell = NavigationContainer::mount(&config()).unwrap();
        let tree = shell.view_tree();
        assert_eq!(
            tree.kind,
            NodeKind::Navigator {
                route: "SignUp".to_string(),
                header_shown: false,
            }
        );
        assert_eq!(tree.regions(), [Region::Header, Region::Logo, Region::Form]);
    }

    #[test]
    fn test_render_with_header_chrome() {
        let navigator = StackNavigator::builder()
            .screen(sign_up::ROUTE_NAME, |_| Box::new(SignUpScreen::new()))
            .build(&context())
            .unwrap();
        let shell = NavigationContainer::new(context(), navigator);
        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        terminal.draw(|f| shell.render(f)).unwrap();
        let buf = terminal.backend().buffer();
        let title: String = (0..6).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(title, "SignUp");
        // Screen content starts one row lower
        let header: String = (0..40).map(|x| buf[(x, 4)].symbol()).collect();
        assert!(header.contains("Sign Up"));
    }
}
