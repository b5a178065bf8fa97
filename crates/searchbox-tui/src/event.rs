//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! The search box is always in insert mode: every printable character types.
//!
//! | Key(s)                   | Event           |
//! |--------------------------|-----------------|
//! | `Ctrl+c`                 | `Quit`          |
//! | printable char           | `Char(c)`       |
//! | `Backspace`              | `Backspace`     |
//! | `Esc`                    | `ClearQuery`    |
//! | `←` / `→`                | `ChipPrev` / `ChipNext` |
//! | `Delete`                 | `RemoveChip`    |
//! | `Ctrl+f`                 | `FilterPicker`  |
//! | `PageDown`, `Ctrl+n`     | `NextScenario`  |
//! | `PageUp`, `Ctrl+p`       | `PrevScenario`  |
//! | `F1`                     | `ToggleHelp`    |
//! | terminal resize          | `Resize(w, h)`  |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the demo.
    Quit,
    /// A printable character typed into the search box.
    Char(char),
    /// Delete the last character of the query.
    Backspace,
    /// Press the clear affordance.
    ClearQuery,
    /// Move the chip selection left.
    ChipPrev,
    /// Move the chip selection right.
    ChipNext,
    /// Remove the selected filter chip.
    RemoveChip,
    /// Click the filter button.
    FilterPicker,
    NextScenario,
    PrevScenario,
    ToggleHelp,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`].
///
/// Returns `None` for mouse events, focus events, and unbound keys.
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('f') if key.modifiers == Mod::CONTROL => Some(AppEvent::FilterPicker),
        Char('n') if key.modifiers == Mod::CONTROL => Some(AppEvent::NextScenario),
        Char('p') if key.modifiers == Mod::CONTROL => Some(AppEvent::PrevScenario),

        PageDown => Some(AppEvent::NextScenario),
        PageUp => Some(AppEvent::PrevScenario),
        F(1) => Some(AppEvent::ToggleHelp),

        Left => Some(AppEvent::ChipPrev),
        Right => Some(AppEvent::ChipNext),
        Delete => Some(AppEvent::RemoveChip),

        // Shifted characters (uppercase, symbols) type like any other
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Esc => Some(AppEvent::ClearQuery),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
