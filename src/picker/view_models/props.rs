//! # Collaborator Props
//!
//! What the rendering side receives from the controller: props for the two
//! text inputs, the calendar panel and the popup trigger, plus the panel
//! callback interface.

use crate::picker::events::{RangeValue, SlotIndex};
use crate::picker::models::{get_slot, DateAdapter};
use crate::picker::view_models::core::RangeController;
use crossterm::event::KeyEvent;

/// Calendar panel callbacks used by the controller
pub trait CalendarPanel: Send + Sync {
    /// Handle a key forwarded from the input; true when consumed
    fn on_key_down(&mut self, key: &KeyEvent) -> bool;

    /// Popup closed; release anything tied to keyboard forwarding
    fn on_close(&mut self) {}
}

/// Props for one slot's text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    pub value: String,
    pub placeholder: String,
    pub disabled: bool,
    pub read_only: bool,
    pub focused: bool,
}

/// Props for the calendar panel of the active slot
#[derive(Debug, Clone, PartialEq)]
pub struct PanelProps<D> {
    pub active: SlotIndex,
    /// Draft date of the active slot
    pub value: Option<D>,
    /// Date whose month the panel should show
    pub picker_value: Option<D>,
    pub hover_value: RangeValue<D>,
    /// Labels of the range shortcuts, in configuration order
    pub ranges: Vec<String>,
    /// The panel owns the keyboard
    pub focused: bool,
}

/// Props for the popup trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupProps {
    pub visible: bool,
    pub active: SlotIndex,
}

impl<A: DateAdapter> RangeController<A> {
    pub fn input_props(&self, slot: SlotIndex) -> InputProps {
        let keyboard_in_panel = self.panel_focused && self.open_state.is_slot_open(slot);
        InputProps {
            value: self.slot_text(slot),
            placeholder: self.options.placeholder[slot.index()].clone(),
            disabled: self.is_slot_disabled(slot),
            read_only: self.options.input_read_only || keyboard_in_panel,
            focused: self.slots[slot].focused,
        }
    }

    pub fn panel_props(&self) -> PanelProps<A::Date> {
        let active = self.open_state.active();
        let value = get_slot(self.reconciler.draft(), active).cloned();
        let picker_value = value
            .clone()
            .or_else(|| self.options.default_picker_value[active.index()].clone());

        PanelProps {
            active,
            value,
            picker_value,
            hover_value: self.hover_value.clone(),
            ranges: self.range_labels().into_iter().map(str::to_string).collect(),
            focused: self.panel_focused,
        }
    }

    pub fn popup_props(&self) -> PopupProps {
        PopupProps {
            visible: self.open_state.is_open(),
            active: self.open_state.active(),
        }
    }

    /// Hand a key to the panel while the popup is open
    pub(super) fn forward_key_down(&mut self, key: &KeyEvent) -> bool {
        if !self.open_state.is_open() {
            return false;
        }
        match self.panel.as_mut() {
            Some(panel) => {
                let handled = panel.on_key_down(key);
                tracing::trace!("Forwarded {:?} to panel, handled={}", key.code, handled);
                handled
            }
            None => false,
        }
    }
}
