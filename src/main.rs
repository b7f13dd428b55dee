//! Zellij plugin wrapper and entry point.
//!
//! This is the presentation shell: it owns the [`zcalc::AppState`], turns
//! Zellij events into library events, and turns returned actions into Zellij
//! API calls. All calculator behavior lives in the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Key, Mouse and Visible events
//! 3. **Update**: Translate events, delegate to `handle_event`, run actions
//! 4. **Render**: Call the library renderer
//!
//! # Input listeners
//!
//! Key and mouse subscriptions are held only while the pane is visible. On
//! `Visible(false)` they are released, on `Visible(true)` they are taken
//! again, so a hidden calculator never consumes input.
//!
//! # Event Mapping
//!
//! - `Key` → [`zcalc::app::map_key`]
//! - `Mouse(LeftClick)` on the keypad → the clicked button's input
//! - `Mouse(ScrollUp/ScrollDown)` on the history panel → history scrolling
//!
//! The plugin only builds for `wasm32` targets. A native build produces a
//! small binary that explains how to build the plugin.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(shim::State);

#[cfg(target_arch = "wasm32")]
mod shim {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use zcalc::app::{map_key, AppState, PanelMode};
    use zcalc::ui::keypad::button_at;
    use zcalc::{handle_event, Action, Config, Event as AppEvent};

    /// Input event types held while the pane is visible.
    const INPUT_EVENTS: [EventType; 2] = [EventType::Key, EventType::Mouse];

    /// Plugin state wrapper.
    ///
    /// Adds the last rendered pane size to the library state, which mouse
    /// hit-testing needs.
    pub struct State {
        app: AppState,
        rows: usize,
        cols: usize,
        listening: bool,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: zcalc::initialize(&Config::default()),
                rows: 0,
                cols: 0,
                listening: false,
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            zcalc::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();
            tracing::debug!(config = ?config, "parsed configuration");

            self.app = zcalc::initialize(&config);

            request_permission(&[PermissionType::ChangeApplicationState]);
            subscribe(&[EventType::Visible, EventType::PermissionRequestResult]);
            self.acquire_input();

            tracing::debug!("plugin load complete");
        }

        fn update(&mut self, event: Event) -> bool {
            let event_type = Self::event_name(&event);
            let _guard = tracing::debug_span!("plugin_update", event_type = %event_type).entered();

            let app_event = match event {
                Event::Key(ref key) => map_key(key, self.app.panel),
                Event::Mouse(mouse) => self.map_mouse(mouse),
                Event::Visible(true) => {
                    self.acquire_input();
                    return true;
                }
                Event::Visible(false) => {
                    self.release_input();
                    return false;
                }
                Event::PermissionRequestResult(status) => {
                    let granted = matches!(status, PermissionStatus::Granted);
                    tracing::debug!(granted, "permission result");
                    return false;
                }
                _ => None,
            };

            let Some(app_event) = app_event else {
                return false;
            };

            let (should_render, actions) = handle_event(&mut self.app, &app_event);
            tracing::debug!(action_count = actions.len(), should_render, "event handled");
            for action in &actions {
                Self::execute_action(action);
            }
            should_render
        }

        fn render(&mut self, rows: usize, cols: usize) {
            self.rows = rows;
            self.cols = cols;
            zcalc::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn acquire_input(&mut self) {
            if !self.listening {
                tracing::debug!("subscribing to input events");
                subscribe(&INPUT_EVENTS);
                self.listening = true;
            }
        }

        fn release_input(&mut self) {
            if self.listening {
                tracing::debug!("releasing input events");
                unsubscribe(&INPUT_EVENTS);
                self.listening = false;
            }
        }

        /// Left clicks press keypad buttons; the wheel scrolls the history.
        ///
        /// Click lines are 0-indexed, the keypad geometry is 1-indexed.
        fn map_mouse(&self, mouse: Mouse) -> Option<AppEvent> {
            match (mouse, self.app.panel) {
                (Mouse::LeftClick(line, col), PanelMode::Keypad) => {
                    let row = usize::try_from(line).ok()? + 1;
                    let input = button_at(row, col, self.cols, self.rows)?;
                    tracing::debug!(row, col, input = ?input, "keypad click");
                    Some(AppEvent::Calculator(input))
                }
                (Mouse::ScrollUp(_), PanelMode::History) => Some(AppEvent::ScrollHistoryUp),
                (Mouse::ScrollDown(_), PanelMode::History) => Some(AppEvent::ScrollHistoryDown),
                _ => None,
            }
        }

        fn event_name(event: &Event) -> String {
            match event {
                Event::Key(key) => format!("Key({:?})", key.bare_key),
                Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
                Event::Visible(visible) => format!("Visible({visible})"),
                Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
                _ => "Other".to_string(),
            }
        }

        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => hide_self(),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "zcalc {} is a Zellij plugin; build it with `cargo build --target wasm32-wasip1`",
        env!("CARGO_PKG_VERSION")
    );
}
