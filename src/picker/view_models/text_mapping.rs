//! # Text Mapping
//!
//! Per-slot conversion between the draft date and the editable text. A slot
//! is either displaying (text derived from the draft) or typing (text is
//! authoritative and parsed on every change).

use crate::picker::events::SlotIndex;
use crate::picker::models::{get_slot, DateAdapter};
use crate::picker::view_models::core::RangeController;

/// Formatted candidates of one draft date, primary format first
pub struct ValueTexts<'a, A: DateAdapter> {
    adapter: &'a A,
    locale: &'a str,
    formats: &'a [String],
    fallback: &'a str,
    date: Option<&'a A::Date>,
}

impl<'a, A: DateAdapter> ValueTexts<'a, A> {
    /// Start a fresh pass over the candidates
    pub fn iter(&self) -> ValueTextsIter<'a, A> {
        ValueTextsIter {
            adapter: self.adapter,
            locale: self.locale,
            formats: self.formats,
            fallback: self.fallback,
            date: self.date,
            position: 0,
        }
    }

    /// Display text; empty when the slot has no date
    pub fn primary(&self) -> String {
        self.iter().next().unwrap_or_default()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.iter().any(|candidate| candidate == text)
    }
}

/// Lazy iterator behind `ValueTexts`; each candidate is formatted on demand
pub struct ValueTextsIter<'a, A: DateAdapter> {
    adapter: &'a A,
    locale: &'a str,
    formats: &'a [String],
    fallback: &'a str,
    date: Option<&'a A::Date>,
    position: usize,
}

impl<A: DateAdapter> Iterator for ValueTextsIter<'_, A> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let date = self.date?;
        let format = if self.formats.is_empty() {
            if self.position > 0 {
                return None;
            }
            self.fallback
        } else {
            self.formats.get(self.position)?.as_str()
        };
        self.position += 1;
        Some(self.adapter.format(self.locale, date, format))
    }
}

impl<A: DateAdapter> RangeController<A> {
    pub fn value_texts(&self, slot: SlotIndex) -> ValueTexts<'_, A> {
        ValueTexts {
            adapter: &self.adapter,
            locale: &self.options.locale,
            formats: &self.options.formats,
            fallback: self.options.primary_format(),
            date: get_slot(self.reconciler.draft(), slot),
        }
    }

    /// Text shown in a slot's input. Typed text is kept while typing and
    /// while it still denotes the draft date.
    pub fn slot_text(&self, slot: SlotIndex) -> String {
        let state = &self.slots[slot];
        let texts = self.value_texts(slot);
        if state.typing || (!state.text.is_empty() && texts.matches(&state.text)) {
            return state.text.clone();
        }
        texts.primary()
    }

    /// Apply text typed into a slot
    pub fn change_text(&mut self, slot: SlotIndex, text: &str) {
        if self.is_slot_disabled(slot) || self.options.input_read_only {
            tracing::debug!("Text change on {} slot ignored: not editable", slot.name());
            return;
        }
        if !self.open_state.is_slot_open(slot) {
            self.open(slot);
        }

        let state = &mut self.slots[slot];
        state.text = text.to_string();
        state.typing = true;

        if text.is_empty() {
            self.reconciler.set_draft_slot(None, slot);
            self.slots[slot].typing = false;
            return;
        }

        // Same fallback as the display side when no format is configured
        let fallback = [self.options.primary_format().to_string()];
        let formats = if self.options.formats.is_empty() {
            &fallback[..]
        } else {
            &self.options.formats[..]
        };
        let parsed = self.adapter.parse(&self.options.locale, text, formats);
        let date = match parsed {
            Some(date) => date,
            None => {
                tracing::trace!("Text '{}' does not parse yet", text);
                return;
            }
        };

        if self.is_date_disabled(slot, &date) {
            tracing::debug!("Typed date {:?} rejected: disabled", date);
            return;
        }

        self.reconciler.set_draft_slot(Some(date), slot);
        if self.value_texts(slot).matches(text) {
            self.slots[slot].typing = false;
        }
    }

    /// Revert a slot's text to the formatted draft and leave typing mode
    pub fn reset_text(&mut self, slot: SlotIndex) {
        let text = self.value_texts(slot).primary();
        let state = &mut self.slots[slot];
        state.text = text;
        state.typing = false;
    }

    pub fn reset_all_texts(&mut self) {
        for slot in SlotIndex::ALL {
            self.reset_text(slot);
        }
    }

    /// Whether leaving the slot now would submit rather than cancel
    pub fn is_text_valid(&self, slot: SlotIndex) -> bool {
        let state = &self.slots[slot];
        !state.typing || self.value_texts(slot).matches(&state.text)
    }

    /// Effective disabled-date predicate of a slot. A non-selectable slot
    /// holding a date bounds its partner.
    pub fn is_date_disabled(&self, slot: SlotIndex, date: &A::Date) -> bool {
        if let Some(predicate) = &self.options.disabled_date {
            if predicate(date) {
                return true;
            }
        }

        let other = !slot;
        if self.options.selectable[other.index()] {
            return false;
        }
        match get_slot(self.reconciler.draft(), other) {
            Some(fixed) => match slot {
                SlotIndex::Start => self.adapter.is_after(date, fixed),
                SlotIndex::End => self.adapter.is_after(fixed, date),
            },
            None => false,
        }
    }
}
