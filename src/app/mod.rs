//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the calculation
//! engine. It owns everything that is presentation-only: which panel is open,
//! how far the history is scrolled, and how keys map to events.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key / Mouse → Events → Event Handler → Calculator / AppState → Actions → Side Effects
//!                                              ↓
//!                                          Snapshot → View Model → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keys`]: Keyboard translation table
//! - [`modes`]: Panel mode type
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::{handle_event, AppState, Event};
//! use zcalc::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::ToggleHistory);
//! assert!(should_render);
//! assert!(actions.is_empty());
//! ```

pub mod actions;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use modes::PanelMode;
pub use state::AppState;
