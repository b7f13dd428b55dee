//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes come either from the built-in Catppuccin variants or from a
//! user TOML file. Colors are hex strings converted to 24-bit ANSI sequences
//! at render time.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! display_fg = "#cdd6f4"
//! expression_fg = "#a6adc8"
//! memory_indicator_fg = "#f9e2af"
//! key_bg = "#313244"
//! digit_key_fg = "#cdd6f4"
//! operator_key_fg = "#89b4fa"
//! function_key_fg = "#cba6f7"
//! memory_key_fg = "#94e2d5"
//! equals_key_fg = "#1e1e2e"
//! equals_key_bg = "#a6e3a1"
//! clear_key_fg = "#f38ba8"
//! clear_entry_key_fg = "#fab387"
//! active_key_fg = "#1e1e2e"
//! active_key_bg = "#f5c2e7"
//! empty_state_fg = "#89b4fa"
//! history_result_fg = "#a6e3a1"
//! ```
//!
//! # Example
//!
//! ```rust
//! use zcalc::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{CalcError, Result};
use crate::ui::keypad::ButtonKind;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Footer and secondary text.
    pub text_dim: String,
    /// Border and separator line color.
    pub border: String,

    /// Current value in the display.
    pub display_fg: String,
    /// Pending expression above the value.
    pub expression_fg: String,
    /// The `M` marker shown while memory holds a value.
    pub memory_indicator_fg: String,

    /// Background shared by all keypad buttons except `=` and the active one.
    pub key_bg: String,
    pub digit_key_fg: String,
    pub operator_key_fg: String,
    pub function_key_fg: String,
    pub memory_key_fg: String,
    pub equals_key_fg: String,
    pub equals_key_bg: String,
    pub clear_key_fg: String,
    pub clear_entry_key_fg: String,
    /// Button of the pending operator.
    pub active_key_fg: String,
    pub active_key_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
    /// Result column of the history panel.
    pub history_result_fg: String,
}

impl ThemeColors {
    /// Foreground and background for a keypad button.
    #[must_use]
    pub fn key(&self, kind: ButtonKind, is_active: bool) -> (&str, &str) {
        if is_active {
            return (self.active_key_fg.as_str(), self.active_key_bg.as_str());
        }

        let fg = match kind {
            ButtonKind::Digit => &self.digit_key_fg,
            ButtonKind::Operator => &self.operator_key_fg,
            ButtonKind::Function => &self.function_key_fg,
            ButtonKind::Memory => &self.memory_key_fg,
            ButtonKind::Equals => {
                return (self.equals_key_fg.as_str(), self.equals_key_bg.as_str());
            }
            ButtonKind::Clear => &self.clear_key_fg,
            ButtonKind::ClearEntry => &self.clear_entry_key_fg,
        };
        (fg.as_str(), self.key_bg.as_str())
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of the built-in themes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zcalc::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file. A leading `~` refers to `/host`.
    ///
    /// # Errors
    ///
    /// - [`CalcError::Io`] if the file cannot be read
    /// - [`CalcError::Theme`] if the TOML is invalid or a color is missing
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = crate::infrastructure::expand_tilde(&path.as_ref().to_string_lossy());
        let contents = fs::read_to_string(&path)?;

        toml::from_str(&contents).map_err(|e| CalcError::Theme(format!("{path}: {e}")))
    }

    /// Converts a hex color to RGB. Malformed colors become white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which is caught by the
    /// unit tests below.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
