//! # View Events
//!
//! Raw signals coming from the host UI: focus changes, key presses, pointer
//! presses, text edits, panel selections and shortcut clicks. The
//! `RangeController` turns these into open/submit/cancel behaviour.

use super::types::{PointerTarget, SelectKind, SlotIndex};
use crossterm::event::KeyEvent;

/// Input events from the user or the host page
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent<D> {
    /// A slot's text input received focus
    Focus(SlotIndex),

    /// A slot's text input lost focus
    Blur(SlotIndex),

    /// Key pressed while a slot's text input has focus
    KeyPressed { slot: SlotIndex, key: KeyEvent },

    /// Text of a slot's input was edited
    TextChanged { slot: SlotIndex, text: String },

    /// Pointer pressed somewhere on the page
    PointerDown(PointerTarget),

    /// The calendar panel reported a date for the active slot
    PanelSelect { date: D, kind: SelectKind },

    /// A range shortcut was clicked
    RangeSelected(String),

    /// The pointer entered (`Some`) or left (`None`) a range shortcut
    RangeHovered(Option<String>),

    /// The clear button was pressed
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn key_pressed_should_carry_key_data() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        let event: InputEvent<u32> = InputEvent::KeyPressed {
            slot: SlotIndex::End,
            key,
        };

        match event {
            InputEvent::KeyPressed { slot, key } => {
                assert_eq!(slot, SlotIndex::End);
                assert_eq!(key.code, KeyCode::Enter);
            }
            _ => panic!("Expected KeyPressed event"),
        }
    }
}
