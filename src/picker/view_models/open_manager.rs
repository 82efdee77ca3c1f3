//! # Open Management
//!
//! Applies open-state transitions: seeds the draft on open, commits and
//! syncs back on close, and keeps the popup closed while disabled.

use crate::picker::events::{Disabled, PickerEvent, SlotIndex};
use crate::picker::models::{CloseTransition, DateAdapter, OpenTransition};
use crate::picker::view_models::core::RangeController;

impl<A: DateAdapter> RangeController<A> {
    /// Open a slot's popup, or switch the open popup to it
    pub fn open(&mut self, slot: SlotIndex) {
        if self.is_slot_disabled(slot) {
            tracing::debug!("Open of disabled {} slot ignored", slot.name());
            return;
        }

        match self.open_state.request_open(slot) {
            OpenTransition::Ignored => {}
            OpenTransition::Opened => {
                self.reconciler.begin_session();
                self.reset_all_texts();
                self.panel_focused = false;
                self.blur_guard = None;
                tracing::debug!("Popup opened on {} slot", slot.name());
                self.emit(PickerEvent::OpenChange { open: true });
            }
            OpenTransition::Switched { from } if from != slot => {
                self.reset_text(from);
                self.panel_focused = false;
                self.blur_guard = None;
                tracing::debug!("Popup switched from {} to {} slot", from.name(), slot.name());
            }
            OpenTransition::Switched { .. } => {}
        }
    }

    /// Close a slot's popup, committing the draft
    pub fn close(&mut self, slot: SlotIndex) {
        self.close_with(slot, false);
    }

    /// Close without committing; submit and cancel have already settled the
    /// draft
    pub(super) fn close_with(&mut self, slot: SlotIndex, silent: bool) {
        match self.open_state.request_close(slot, silent) {
            CloseTransition::Ignored => {
                tracing::trace!("Close of {} slot ignored: not open", slot.name());
            }
            CloseTransition::Closed { commit } => {
                if commit {
                    let draft = self.reconciler.draft().clone();
                    self.trigger_change(draft);
                }
                self.finish_close();
            }
        }
    }

    fn finish_close(&mut self) {
        tracing::debug!("Popup closed");
        self.emit(PickerEvent::OpenChange { open: false });
        if let Some(panel) = self.panel.as_mut() {
            panel.on_close();
        }
        self.sync_back();
    }

    /// Return to the idle state: draft equals committed value, no typing
    pub(super) fn sync_back(&mut self) {
        self.reconciler.reset_draft();
        self.reset_all_texts();
        self.panel_focused = false;
        self.blur_guard = None;
        self.hover_value = None;
    }

    /// Change which parts of the control are disabled. A popup whose slot
    /// becomes disabled closes silently.
    pub fn set_disabled(&mut self, disabled: Disabled) {
        tracing::debug!("Disabled changed to {:?}", disabled);
        self.options.disabled = disabled;

        if self.open_state.set_disabled(disabled.whole_control()) {
            self.finish_close();
            return;
        }

        let active = self.open_state.active();
        if self.open_state.is_slot_open(active) && self.is_slot_disabled(active) {
            self.close_with(active, true);
        }
    }
}
