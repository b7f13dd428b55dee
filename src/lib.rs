//! zcalc: a calculator plugin for Zellij.
//!
//! zcalc provides:
//! - Binary operators with left-to-right chaining (`3 + 4 + 5 =` shows `7`, then `12`)
//! - Power, square root and degree-based trigonometry
//! - A history of completed calculations and a single memory slot
//! - Keyboard input and a clickable on-screen keypad

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Presentation state
//! │  - Event handling, key mapping                      │
//! │  - Panel mode, history scrolling                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐       ┌───────────────────────┐
//! │ Engine (engine/)      │       │ UI Layer (ui/)        │
//! │ - State machine       │       │ - Rendering           │
//! │ - Evaluator           │       │ - Theming             │
//! │ - Input buffer, store │       │ - Keypad geometry     │
//! └───────────────────────┘       └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Core types
//! │  - Operators and digits                             │
//! │  - History entries, errors                          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to an OTLP JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state with event/action model
//! - [`domain`]: Core domain types (operators, history entries, errors)
//! - [`engine`]: The calculation core, free of any Zellij dependency
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zcalc.wasm" {
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!         show_history "false"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zcalc::domain::{Digit, Operator};
//! use zcalc::engine::Input;
//! use zcalc::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let three = Digit::new(3).unwrap();
//! let four = Digit::new(4).unwrap();
//! for input in [
//!     Input::Digit(three),
//!     Input::Operator(Operator::Add),
//!     Input::Digit(four),
//!     Input::Evaluate,
//! ] {
//!     handle_event(&mut state, &Event::Calculator(input));
//! }
//!
//! assert_eq!(state.calculator.display(), "7");
//! assert_eq!(state.calculator.history()[0].description(), "3 add 4");
//! ```

pub mod app;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, PanelMode};
pub use domain::{CalcError, Result};
pub use engine::{Calculator, Input, Snapshot};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default `EnvFilter` directive.
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zcalc.wasm" {
///     theme "catppuccin-latte"
///     theme_file "~/.config/zcalc/theme.toml"
///     trace_level "debug"
///     show_history "true"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for spans, e.g. `debug` or `zcalc::engine=trace`.
    pub trace_level: String,

    /// Whether the history panel is open when the plugin starts.
    pub show_history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
            show_history: false,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing keys take their defaults. Malformed values are logged and also
    /// fall back to the default, so a typo never stops the plugin loading.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zcalc::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-frappe".to_string());
    /// map.insert("show_history".to_string(), "true".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
    /// assert!(config.show_history);
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let show_history = config
            .get("show_history")
            .map_or(Ok(false), |v| parse_bool("show_history", v))
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, "using default for show_history");
                false
            });

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level")
                .unwrap_or_else(|| DEFAULT_TRACE_LEVEL.to_string()),
            show_history,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(CalcError::Config(format!(
            "{key}: expected true or false, got {other:?}"
        ))),
    }
}

/// Loads the configured theme, falling back to the default on any failure.
fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Creates the application state for a configuration.
///
/// The calculator starts idle with a display of `0`, empty history and an
/// empty memory slot.
///
/// # Example
///
/// ```rust
/// use zcalc::{initialize, Config, PanelMode};
///
/// let config = Config {
///     show_history: true,
///     ..Default::default()
/// };
/// let state = initialize(&config);
/// assert_eq!(state.panel, PanelMode::History);
/// assert_eq!(state.calculator.display(), "0");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zcalc plugin");

    let mut state = AppState::new(load_theme(config));
    if config.show_history {
        state.panel = PanelMode::History;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_empty_map_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn test_malformed_show_history_falls_back() {
        let config = Config::from_zellij(&map(&[("show_history", "sometimes")]));
        assert!(!config.show_history);
    }

    #[test]
    fn test_parse_bool_error() {
        let err = parse_bool("show_history", "maybe").unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));
        assert!(err.to_string().contains("show_history"));
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("trace_level", "")]));
        assert_eq!(config.theme_name, None);
        assert_eq!(config.trace_level, "info");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn test_theme_file_takes_precedence() {
        let latte = include_str!("../themes/catppuccin-latte.toml");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(latte.as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-latte");
    }

    #[test]
    fn test_missing_theme_file_falls_back() {
        let config = Config {
            theme_file: Some("/nonexistent/zcalc-theme.toml".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }
}
