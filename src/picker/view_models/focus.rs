//! # Imperative Focus
//!
//! `focus()` and `blur()` for hosts. Neither touches the committed value,
//! the draft or the open state.

use crate::picker::events::{PickerEvent, SlotIndex};
use crate::picker::models::DateAdapter;
use crate::picker::view_models::core::RangeController;

/// Capability of taking and releasing keyboard focus
pub trait Focusable {
    fn focus(&mut self);
    fn blur(&mut self);
}

impl<A: DateAdapter> Focusable for RangeController<A> {
    /// Focus the start input
    fn focus(&mut self) {
        let slot = SlotIndex::Start;
        if self.is_slot_disabled(slot) {
            tracing::debug!("Imperative focus ignored: start slot disabled");
            return;
        }
        if !self.open_state.is_open() {
            self.open_state.activate(slot);
        }
        if !self.slots[slot].focused {
            self.slots[slot].focused = true;
            self.emit(PickerEvent::Focus { slot });
        }
    }

    /// Blur both inputs
    fn blur(&mut self) {
        for slot in SlotIndex::ALL {
            if self.slots[slot].focused {
                self.slots[slot].focused = false;
                self.emit(PickerEvent::Blur { slot });
            }
        }
    }
}
