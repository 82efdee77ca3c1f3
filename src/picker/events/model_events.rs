//! # Model Events
//!
//! Notifications emitted when the picker's value or popup state changes.
//! These are the outward-facing callbacks of the control.

use super::types::{RangeValue, SlotIndex};

/// Events emitted to the host when the picker changes
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent<D> {
    /// A new range value was committed
    Change {
        value: RangeValue<D>,
        texts: [String; 2],
    },

    /// The draft changed from a panel selection (live preview)
    CalendarChange {
        value: RangeValue<D>,
        texts: [String; 2],
    },

    /// Popup visibility changed
    OpenChange { open: bool },

    /// A slot's input gained focus
    Focus { slot: SlotIndex },

    /// A slot's input lost focus
    Blur { slot: SlotIndex },
}

impl<D> PickerEvent<D> {
    pub fn is_change(&self) -> bool {
        matches!(self, PickerEvent::Change { .. })
    }

    pub fn is_calendar_change(&self) -> bool {
        matches!(self, PickerEvent::CalendarChange { .. })
    }
}
