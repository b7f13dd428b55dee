//! Keyboard translation table.
//!
//! Maps a Zellij key press to at most one application [`Event`]. The
//! calculator keys mirror the on-screen buttons; everything else is shell
//! navigation.

use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

use super::handler::Event;
use super::modes::PanelMode;
use crate::domain::{Digit, Operator};
use crate::engine::Input;

/// Translates a key press into an application event.
///
/// Keys held with `Ctrl`, `Alt` or `Super` are left to Zellij. History
/// scrolling is only mapped while the history panel is shown.
///
/// # Examples
///
/// ```
/// use zcalc::app::{keys::map_key, Event, PanelMode};
/// use zcalc::engine::Input;
/// use zellij_tile::prelude::{BareKey, KeyWithModifier};
///
/// let enter = KeyWithModifier::new(BareKey::Enter);
/// assert_eq!(
///     map_key(&enter, PanelMode::Keypad),
///     Some(Event::Calculator(Input::Evaluate))
/// );
/// ```
#[must_use]
pub fn map_key(key: &KeyWithModifier, panel: PanelMode) -> Option<Event> {
    let held = [KeyModifier::Ctrl, KeyModifier::Alt, KeyModifier::Super];
    if held.iter().any(|m| key.key_modifiers.contains(m)) {
        return None;
    }

    let input = match key.bare_key {
        BareKey::Char(c) if c.is_ascii_digit() => Input::Digit(Digit::from_char(c)?),
        BareKey::Char('.') => Input::Decimal,
        BareKey::Char('+') => Input::Operator(Operator::Add),
        BareKey::Char('-') => Input::Operator(Operator::Subtract),
        BareKey::Char('*') => Input::Operator(Operator::Multiply),
        BareKey::Char('/') => Input::Operator(Operator::Divide),
        BareKey::Char('^') => Input::Operator(Operator::Power),
        BareKey::Char('v') => Input::Operator(Operator::Sqrt),
        BareKey::Char('s') => Input::Operator(Operator::Sin),
        BareKey::Char('c') => Input::Operator(Operator::Cos),
        BareKey::Char('t') => Input::Operator(Operator::Tan),
        BareKey::Enter | BareKey::Char('=') => Input::Evaluate,
        BareKey::Esc => Input::Clear,
        BareKey::Backspace | BareKey::Delete => Input::ClearEntry,
        BareKey::Char('S') => Input::MemoryStore,
        BareKey::Char('R') => Input::MemoryRecall,
        BareKey::Char('X') => Input::MemoryClear,
        BareKey::Char('H') => Input::HistoryClear,
        BareKey::Char('h') => return Some(Event::ToggleHistory),
        BareKey::Char('q') => return Some(Event::CloseFocus),
        BareKey::Up if panel == PanelMode::History => return Some(Event::ScrollHistoryUp),
        BareKey::Down if panel == PanelMode::History => return Some(Event::ScrollHistoryDown),
        _ => return None,
    };

    Some(Event::Calculator(input))
}
