//! # Commit Management
//!
//! Every path that settles the draft: submit, cancel, panel selection,
//! range shortcuts, clear and host-controlled value updates. Within one
//! action the order is always draft update, `CalendarChange`, then commit
//! and `Change`.

use crate::picker::events::{PickerEvent, RangeValue, SelectKind, SlotIndex};
use crate::picker::models::{CommitOutcome, DateAdapter};
use crate::picker::view_models::core::RangeController;

impl<A: DateAdapter> RangeController<A> {
    /// Commit a candidate and notify the host when the value changed
    pub(super) fn trigger_change(&mut self, candidate: RangeValue<A::Date>) -> CommitOutcome<A::Date> {
        let outcome = self
            .reconciler
            .commit(&self.adapter, candidate, self.options.allow_empty);

        match &outcome {
            CommitOutcome::Changed(value) => {
                let texts = self.format_value(value);
                tracing::info!("Range value changed to [{}, {}]", texts[0], texts[1]);
                self.emit(PickerEvent::Change {
                    value: value.clone(),
                    texts,
                });
            }
            other => tracing::debug!("Commit settled without change: {:?}", other),
        }
        outcome
    }

    fn emit_calendar_change(&mut self, value: RangeValue<A::Date>) {
        let texts = self.format_value(&value);
        self.emit(PickerEvent::CalendarChange { value, texts });
    }

    /// Commit the whole draft and close the slot's popup
    pub fn submit(&mut self, slot: SlotIndex) {
        if !self.open_state.is_slot_open(slot) {
            tracing::trace!("Submit on {} slot ignored: not open", slot.name());
            return;
        }
        let draft = self.reconciler.draft().clone();
        self.trigger_change(draft);
        self.close_with(slot, true);
    }

    /// Throw the draft of both slots away and close the slot's popup
    pub fn cancel(&mut self, slot: SlotIndex) {
        if !self.open_state.is_slot_open(slot) {
            tracing::trace!("Cancel on {} slot ignored: not open", slot.name());
            return;
        }
        tracing::debug!("Draft discarded on {} slot", slot.name());
        self.reconciler.discard();
        self.close_with(slot, true);
    }

    /// A date picked in the active slot's panel
    pub fn select_date(&mut self, date: A::Date, kind: SelectKind) {
        if !self.open_state.is_open() {
            tracing::debug!("Panel selection ignored: popup closed");
            return;
        }
        let slot = self.open_state.active();
        if self.is_slot_disabled(slot) {
            return;
        }
        if self.is_date_disabled(slot, &date) {
            tracing::debug!("Panel selection {:?} rejected: disabled date", date);
            return;
        }
        // The pointer press that armed the guard has completed
        self.blur_guard = None;

        let draft = self.reconciler.set_draft_slot(Some(date), slot).clone();
        self.reset_text(slot);
        self.emit_calendar_change(draft);

        if kind == SelectKind::Submit {
            let other = !slot;
            if self.draft_slot(other).is_none() && !self.is_slot_disabled(other) {
                self.open(other);
            } else {
                self.submit(slot);
            }
        }
    }

    /// Apply a preset range: both notifications fire and the popup closes
    pub fn select_range(&mut self, label: &str) {
        if self.options.disabled.whole_control() {
            tracing::debug!("Range '{}' ignored: control disabled", label);
            return;
        }
        let value = match self.options.shortcut(label) {
            Some(shortcut) => shortcut.resolve(),
            None => {
                tracing::warn!("Unknown range shortcut '{}'", label);
                return;
            }
        };

        tracing::debug!("Range shortcut '{}' selected", label);
        self.reconciler.set_draft(value.clone());
        self.emit_calendar_change(value.clone());
        self.trigger_change(value);

        if self.open_state.is_open() {
            let active = self.open_state.active();
            self.close_with(active, true);
        } else {
            self.sync_back();
        }
    }

    /// Expose a shortcut's range to panels while it is hovered
    pub fn preview_range(&mut self, label: Option<&str>) {
        self.hover_value = label
            .and_then(|label| self.options.shortcut(label))
            .and_then(|shortcut| shortcut.resolve());
    }

    /// Commit the empty value directly, regardless of allow-empty
    pub fn clear(&mut self) {
        if SlotIndex::ALL.iter().any(|slot| self.is_slot_disabled(*slot)) {
            tracing::debug!("Clear ignored: control has disabled parts");
            return;
        }

        if self.reconciler.committed().is_some() {
            self.trigger_change(None);
        } else {
            self.reconciler.discard();
        }

        if self.open_state.is_open() {
            let active = self.open_state.active();
            self.close_with(active, true);
        } else {
            self.sync_back();
        }
    }

    /// Host-controlled value update; switches to controlled mode
    pub fn set_value(&mut self, value: RangeValue<A::Date>) {
        tracing::debug!("Controlled value set: {:?}", value);
        self.reconciler.set_controlled(&self.adapter, value);
        self.reset_all_texts();
    }

    /// Return value ownership to the picker
    pub fn release_control(&mut self) {
        self.reconciler.release_control();
    }
}
