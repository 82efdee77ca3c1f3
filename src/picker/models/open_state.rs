//! # Open-State Coordination
//!
//! Tracks which slot is active and whether its popup is open. Only one slot
//! can be open at a time; opening the other slot switches instead of
//! stacking. The coordinator only answers "what changed"; draft sync and
//! notifications are the orchestrator's job.

use crate::picker::events::SlotIndex;

/// Popup state of the whole control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenState {
    Closed,
    Open(SlotIndex),
}

/// Result of an open request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTransition {
    /// Request refused (control disabled)
    Ignored,
    /// Popup became visible
    Opened,
    /// Popup stayed visible, active slot changed or stayed
    Switched { from: SlotIndex },
}

/// Result of a close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTransition {
    /// Slot was not the active open one
    Ignored,
    /// Popup hidden; `commit` tells whether the draft must be committed
    Closed { commit: bool },
}

#[derive(Debug, Clone)]
pub struct OpenStateCoordinator {
    open: bool,
    active: SlotIndex,
    disabled: bool,
}

impl OpenStateCoordinator {
    pub fn new() -> Self {
        Self {
            open: false,
            active: SlotIndex::Start,
            disabled: false,
        }
    }

    pub fn state(&self) -> OpenState {
        if self.open {
            OpenState::Open(self.active)
        } else {
            OpenState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open state of a single slot's popup
    pub fn is_slot_open(&self, slot: SlotIndex) -> bool {
        self.open && self.active == slot
    }

    pub fn active(&self) -> SlotIndex {
        self.active
    }

    /// Mark a slot active without touching visibility (focus moves)
    pub fn activate(&mut self, slot: SlotIndex) {
        self.active = slot;
    }

    pub fn request_open(&mut self, slot: SlotIndex) -> OpenTransition {
        if self.disabled {
            tracing::debug!("Open of {} slot ignored: control disabled", slot.name());
            return OpenTransition::Ignored;
        }

        let from = self.active;
        self.active = slot;
        if self.open {
            return OpenTransition::Switched { from };
        }

        self.open = true;
        OpenTransition::Opened
    }

    /// Close if `slot` is the active open slot. A silent close skips the
    /// draft commit; submit and cancel paths use it.
    pub fn request_close(&mut self, slot: SlotIndex, silent: bool) -> CloseTransition {
        if !self.open || self.active != slot {
            return CloseTransition::Ignored;
        }

        self.open = false;
        CloseTransition::Closed { commit: !silent }
    }

    /// Disable or enable the whole control. Disabling an open control closes
    /// it; the returned flag reports that edge.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        self.disabled = disabled;
        if disabled && self.open {
            self.open = false;
            return true;
        }
        false
    }
}

impl Default for OpenStateCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
