//! # Range Value Reconciliation
//!
//! Pure helpers over `RangeValue` plus the `ValueReconciler`, which owns the
//! committed value and the in-progress draft and decides what a commit does.
//!
//! Ordering is restored by swapping on every commit, never by rejecting
//! input. Emptiness is governed per slot by `allow_empty`.

use super::date_adapter::{is_equal, DateAdapter};
use crate::picker::events::{RangeValue, SlotIndex};

/// Date held by one slot of a range value
pub fn get_slot<D>(value: &RangeValue<D>, slot: SlotIndex) -> Option<&D> {
    value.as_ref().and_then(|pair| pair[slot.index()].as_ref())
}

/// Replace one slot. Clearing the last present slot collapses the pair to
/// the single `None` sentinel.
pub fn update_slot<D: Clone>(
    value: &RangeValue<D>,
    date: Option<D>,
    slot: SlotIndex,
) -> RangeValue<D> {
    let mut pair = [
        get_slot(value, SlotIndex::Start).cloned(),
        get_slot(value, SlotIndex::End).cloned(),
    ];
    pair[slot.index()] = date;

    if pair[0].is_none() && pair[1].is_none() {
        return None;
    }
    Some(pair)
}

/// Swap the ends when start is after end
pub fn reorder<A: DateAdapter>(adapter: &A, value: RangeValue<A::Date>) -> RangeValue<A::Date> {
    match value {
        Some([Some(start), Some(end)]) if adapter.is_after(&start, &end) => {
            Some([Some(end), Some(start)])
        }
        other => other,
    }
}

/// Slot-wise equality using the adapter's notion of "same date"
pub fn is_range_equal<A: DateAdapter>(
    adapter: &A,
    a: &RangeValue<A::Date>,
    b: &RangeValue<A::Date>,
) -> bool {
    SlotIndex::ALL
        .iter()
        .all(|slot| is_equal(adapter, get_slot(a, *slot), get_slot(b, *slot)))
}

/// Format both slots with one format; absent slots become empty strings
pub fn format_pair<A: DateAdapter>(
    adapter: &A,
    locale: &str,
    format: &str,
    value: &RangeValue<A::Date>,
) -> [String; 2] {
    SlotIndex::ALL.map(|slot| {
        get_slot(value, slot)
            .map(|date| adapter.format(locale, date, format))
            .unwrap_or_default()
    })
}

/// What a commit attempt did
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome<D> {
    /// Value differs from the committed one; the host must be told
    Changed(RangeValue<D>),
    /// Value accepted but equal to the committed one
    Unchanged,
    /// A slot that held a committed date was cleared while empty is not
    /// allowed there; the draft was reverted
    Rejected,
    /// A slot that never held a date is still empty; the partial range is
    /// parked until the next editing session
    Deferred,
}

/// Owner of the committed value, the draft and the pending partial range
#[derive(Debug, Clone)]
pub struct ValueReconciler<D> {
    inner: RangeValue<D>,
    controlled: Option<RangeValue<D>>,
    draft: RangeValue<D>,
    pending: RangeValue<D>,
}

impl<D: Clone> ValueReconciler<D> {
    /// Build from the host's initial values; a controlled value wins over
    /// the default one. Both are reordered on intake.
    pub fn new<A: DateAdapter<Date = D>>(
        adapter: &A,
        default_value: RangeValue<D>,
        controlled: Option<RangeValue<D>>,
    ) -> Self {
        let controlled = controlled.map(|value| reorder(adapter, value));
        let inner = reorder(adapter, default_value);
        let committed = controlled.clone().unwrap_or_else(|| inner.clone());

        Self {
            inner,
            controlled,
            draft: committed,
            pending: None,
        }
    }

    /// The externally observed value
    pub fn committed(&self) -> &RangeValue<D> {
        self.controlled.as_ref().unwrap_or(&self.inner)
    }

    pub fn draft(&self) -> &RangeValue<D> {
        &self.draft
    }

    pub fn pending(&self) -> &RangeValue<D> {
        &self.pending
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Host pushed a new controlled value
    pub fn set_controlled<A: DateAdapter<Date = D>>(&mut self, adapter: &A, value: RangeValue<D>) {
        let value = reorder(adapter, value);
        self.draft = value.clone();
        self.pending = None;
        self.controlled = Some(value);
    }

    /// Hand ownership of the value back to the picker, keeping what the
    /// host last set
    pub fn release_control(&mut self) {
        if let Some(value) = self.controlled.take() {
            self.inner = value;
        }
    }

    pub fn set_draft(&mut self, value: RangeValue<D>) {
        self.draft = value;
    }

    pub fn set_draft_slot(&mut self, date: Option<D>, slot: SlotIndex) -> &RangeValue<D> {
        self.draft = update_slot(&self.draft, date, slot);
        &self.draft
    }

    /// Sync the draft back to the committed value
    pub fn reset_draft(&mut self) {
        self.draft = self.committed().clone();
    }

    /// Seed the draft for a new editing session
    pub fn begin_session(&mut self) {
        self.draft = match &self.pending {
            Some(_) => self.pending.clone(),
            None => self.committed().clone(),
        };
    }

    /// Throw away the draft of both slots and any parked partial range
    pub fn discard(&mut self) {
        self.pending = None;
        self.reset_draft();
    }

    /// Reorder `candidate`, apply the emptiness policy and record it
    pub fn commit<A: DateAdapter<Date = D>>(
        &mut self,
        adapter: &A,
        candidate: RangeValue<D>,
        allow_empty: [bool; 2],
    ) -> CommitOutcome<D> {
        let value = reorder(adapter, candidate);

        if value.is_some() {
            let blocked = SlotIndex::ALL
                .into_iter()
                .find(|slot| get_slot(&value, *slot).is_none() && !allow_empty[slot.index()]);

            if let Some(slot) = blocked {
                if get_slot(self.committed(), slot).is_some() {
                    tracing::debug!("Commit rejected: {} slot cleared", slot.name());
                    self.discard();
                    return CommitOutcome::Rejected;
                }
                tracing::debug!("Commit deferred: {} slot not picked yet", slot.name());
                self.pending = value;
                return CommitOutcome::Deferred;
            }
        }

        // Controlled: the host's value is the baseline until it calls back
        let unchanged = is_range_equal(adapter, self.committed(), &value);

        self.pending = None;
        self.draft = value.clone();
        if self.controlled.is_none() {
            self.inner = value.clone();
        }

        if unchanged {
            tracing::trace!("Commit unchanged");
            return CommitOutcome::Unchanged;
        }
        CommitOutcome::Changed(value)
    }
}
