//! Panel mode for the presentation layer.
//!
//! Which panel is visible is purely a rendering concern and lives in
//! `AppState`, never in the calculator itself.
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::PanelMode;
//!
//! let mode = PanelMode::Keypad;
//! assert_eq!(mode.toggled(), PanelMode::History);
//! ```

/// Panel shown below the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelMode {
    /// Button grid. Mouse clicks are mapped to buttons.
    #[default]
    Keypad,

    /// Scrollable log of completed calculations.
    ///
    /// Up/Down scroll the log; keyboard calculator input keeps working.
    History,
}

impl PanelMode {
    /// Returns the other panel.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Keypad => Self::History,
            Self::History => Self::Keypad,
        }
    }
}
