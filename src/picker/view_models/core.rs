//! # Core RangeController Structure
//!
//! Contains the RangeController struct and its initialization logic. The
//! controller is the single owner of committed value, draft value and open
//! state; the per-slot text and input views are derived from it in the
//! sibling modules.

use crate::picker::events::{
    EventBus, PickerEvent, PickerEventHandler, RangeValue, SimpleEventBus, SlotIndex,
};
use crate::picker::models::{
    format_pair, get_slot, DateAdapter, OpenState, OpenStateCoordinator, ValueReconciler,
};
use crate::picker::view_models::options::RangePickerOptions;
use crate::picker::view_models::props::CalendarPanel;
use std::ops::{Index, IndexMut};

/// Type alias for event bus option to reduce complexity
type EventBusOption<D> = Option<Box<dyn EventBus<D>>>;

/// Ephemeral state of one slot's text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotState {
    /// Last text typed by the user; only meaningful while `typing`
    pub(super) text: String,
    pub(super) typing: bool,
    pub(super) focused: bool,
}

impl Index<SlotIndex> for [SlotState; 2] {
    type Output = SlotState;
    fn index(&self, slot: SlotIndex) -> &Self::Output {
        match slot {
            SlotIndex::Start => &self[0],
            SlotIndex::End => &self[1],
        }
    }
}

impl IndexMut<SlotIndex> for [SlotState; 2] {
    fn index_mut(&mut self, slot: SlotIndex) -> &mut Self::Output {
        match slot {
            SlotIndex::Start => &mut self[0],
            SlotIndex::End => &mut self[1],
        }
    }
}

/// The range picker orchestrator
pub struct RangeController<A: DateAdapter> {
    pub(super) adapter: A,
    pub(super) options: RangePickerOptions<A::Date>,

    // Value state
    pub(super) reconciler: ValueReconciler<A::Date>,
    pub(super) hover_value: RangeValue<A::Date>,

    // Popup state
    pub(super) open_state: OpenStateCoordinator,
    /// Keyboard handed to the panel with Tab
    pub(super) panel_focused: bool,
    /// Pointer went down inside the panel while this slot was open; its
    /// next blur is not a leave
    pub(super) blur_guard: Option<SlotIndex>,

    pub(super) slots: [SlotState; 2],

    // Collaborators
    pub(super) panel: Option<Box<dyn CalendarPanel>>,
    pub(super) event_bus: EventBusOption<A::Date>,
}

impl<A: DateAdapter> RangeController<A> {
    /// Create a controller; no notifications fire during construction
    pub fn new(adapter: A, mut options: RangePickerOptions<A::Date>) -> Self {
        let reconciler = ValueReconciler::new(
            &adapter,
            options.default_value.take(),
            options.value.take(),
        );

        let mut open_state = OpenStateCoordinator::new();
        open_state.set_disabled(options.disabled.whole_control());

        let mut controller = Self {
            adapter,
            options,
            reconciler,
            hover_value: None,
            open_state,
            panel_focused: false,
            blur_guard: None,
            slots: Default::default(),
            panel: None,
            event_bus: None,
        };

        if controller.options.default_open {
            let first_enabled = SlotIndex::ALL
                .into_iter()
                .find(|slot| !controller.is_slot_disabled(*slot));
            if let Some(slot) = first_enabled {
                controller.open_state.request_open(slot);
                controller.reconciler.begin_session();
            }
        }

        tracing::debug!(
            "RangeController created: value={:?}, open={:?}",
            controller.reconciler.committed(),
            controller.open_state.state()
        );
        controller
    }

    /// Subscribe a handler, installing a `SimpleEventBus` when none is set
    pub fn subscribe(&mut self, handler: PickerEventHandler<A::Date>) {
        self.event_bus
            .get_or_insert_with(|| Box::new(SimpleEventBus::new()))
            .subscribe(handler);
    }

    /// Attach the calendar panel receiving forwarded keys and close hooks
    pub fn attach_panel(&mut self, panel: Box<dyn CalendarPanel>) {
        self.panel = Some(panel);
    }

    pub(super) fn emit(&mut self, event: PickerEvent<A::Date>) {
        tracing::debug!("Picker event emitted: {:?}", event);
        if let Some(bus) = self.event_bus.as_mut() {
            bus.publish(event);
        }
    }

    /// Format a value with the display format
    pub fn format_value(&self, value: &RangeValue<A::Date>) -> [String; 2] {
        format_pair(
            &self.adapter,
            &self.options.locale,
            self.options.primary_format(),
            value,
        )
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn options(&self) -> &RangePickerOptions<A::Date> {
        &self.options
    }

    /// The externally observed value
    pub fn value(&self) -> &RangeValue<A::Date> {
        self.reconciler.committed()
    }

    /// The in-progress value of the current editing session
    pub fn draft_value(&self) -> &RangeValue<A::Date> {
        self.reconciler.draft()
    }

    /// Partial range parked until the other slot is picked
    pub fn pending_value(&self) -> &RangeValue<A::Date> {
        self.reconciler.pending()
    }

    pub fn draft_slot(&self, slot: SlotIndex) -> Option<&A::Date> {
        get_slot(self.reconciler.draft(), slot)
    }

    pub fn is_controlled(&self) -> bool {
        self.reconciler.is_controlled()
    }

    pub fn open_state(&self) -> OpenState {
        self.open_state.state()
    }

    pub fn is_open(&self) -> bool {
        self.open_state.is_open()
    }

    pub fn is_slot_open(&self, slot: SlotIndex) -> bool {
        self.open_state.is_slot_open(slot)
    }

    pub fn active_slot(&self) -> SlotIndex {
        self.open_state.active()
    }

    pub fn is_focused(&self, slot: SlotIndex) -> bool {
        self.slots[slot].focused
    }

    pub fn is_typing(&self, slot: SlotIndex) -> bool {
        self.slots[slot].typing
    }

    pub fn is_panel_focused(&self) -> bool {
        self.panel_focused
    }

    pub fn hover_value(&self) -> &RangeValue<A::Date> {
        &self.hover_value
    }

    /// A slot is unusable when disabled or not selectable
    pub fn is_slot_disabled(&self, slot: SlotIndex) -> bool {
        self.options.disabled.slot(slot) || !self.options.selectable[slot.index()]
    }

    pub fn range_labels(&self) -> Vec<&str> {
        self.options
            .ranges
            .iter()
            .map(|(label, _)| label.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::events::Disabled;
    use crate::picker::models::ChronoAdapter;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_should_reorder_default_value() {
        let controller = RangeController::new(
            ChronoAdapter::new(),
            RangePickerOptions::new()
                .with_default_value(Some([Some(date(1990, 9, 3)), Some(date(1989, 11, 28))])),
        );
        assert_eq!(
            controller.value(),
            &Some([Some(date(1989, 11, 28)), Some(date(1990, 9, 3))])
        );
        assert_eq!(controller.draft_value(), controller.value());
        assert!(!controller.is_open());
    }

    #[test]
    fn default_open_should_open_first_enabled_slot() {
        let controller = RangeController::new(
            ChronoAdapter::new(),
            RangePickerOptions::new()
                .with_default_open(true)
                .with_selectable([false, true]),
        );
        assert_eq!(controller.open_state(), OpenState::Open(SlotIndex::End));
    }

    #[test]
    fn default_open_should_be_ignored_when_disabled() {
        let controller = RangeController::new(
            ChronoAdapter::new(),
            RangePickerOptions::new()
                .with_default_open(true)
                .with_disabled(Disabled::All(true)),
        );
        assert_eq!(controller.open_state(), OpenState::Closed);
    }

    #[test]
    fn slot_disabled_should_combine_disabled_and_selectable() {
        let controller = RangeController::new(
            ChronoAdapter::new(),
            RangePickerOptions::new()
                .with_disabled(Disabled::Slots([false, true]))
                .with_selectable([false, true]),
        );
        assert!(controller.is_slot_disabled(SlotIndex::Start));
        assert!(controller.is_slot_disabled(SlotIndex::End));
    }

    #[test]
    fn slot_state_should_index_by_slot() {
        let mut slots: [SlotState; 2] = Default::default();
        slots[SlotIndex::End].typing = true;
        assert!(!slots[SlotIndex::Start].typing);
        assert!(slots[1].typing);
    }
}
