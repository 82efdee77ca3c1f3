//! # Input Interaction
//!
//! Turns raw focus, blur, key and pointer signals of one slot's input into
//! open/submit/cancel intents. `SlotInput` is the same logic instantiated for
//! either slot; the controller applies the intents it returns.

use crate::picker::events::{InputEvent, PickerEvent, PointerTarget, SlotIndex};
use crate::picker::models::DateAdapter;
use crate::picker::view_models::core::RangeController;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What an input signal asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    Open,
    Submit,
    Cancel,
    /// Hand the key to the calendar panel
    Forward,
    /// Move keyboard focus into the panel
    FocusPanel,
    /// Move keyboard focus back to the text
    FocusText,
    /// Ignore the next blur of the active input
    GuardBlur,
    Ignore,
}

/// Snapshot of controller state a slot input decides on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    /// This slot's popup is open
    pub open: bool,
    pub panel_focused: bool,
    pub valid_draft: bool,
    pub blur_guarded: bool,
}

/// Input interaction rules for one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotInput {
    slot: SlotIndex,
}

impl SlotInput {
    pub fn new(slot: SlotIndex) -> Self {
        Self { slot }
    }

    pub fn on_key(&self, key: &KeyEvent, ctx: &InputContext) -> InputIntent {
        if key.kind == KeyEventKind::Release {
            return InputIntent::Ignore;
        }

        let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Enter if ctx.open => InputIntent::Submit,
            KeyCode::Enter => InputIntent::Open,
            KeyCode::Esc if ctx.open => InputIntent::Cancel,
            KeyCode::Esc => InputIntent::Ignore,
            KeyCode::BackTab if ctx.open && ctx.panel_focused => InputIntent::FocusText,
            KeyCode::Tab if ctx.open && shifted && ctx.panel_focused => InputIntent::FocusText,
            KeyCode::Tab if ctx.open && !shifted && !ctx.panel_focused => InputIntent::FocusPanel,
            KeyCode::Tab | KeyCode::BackTab => InputIntent::Ignore,
            _ if ctx.open && ctx.panel_focused => InputIntent::Forward,
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End => {
                if ctx.open {
                    InputIntent::Forward
                } else {
                    InputIntent::Open
                }
            }
            KeyCode::Modifier(_) => InputIntent::Ignore,
            _ if !ctx.open => InputIntent::Open,
            _ => InputIntent::Ignore,
        }
    }

    /// Leaving the input submits a valid draft and cancels an invalid one
    pub fn on_blur(&self, ctx: &InputContext) -> InputIntent {
        if !ctx.open || ctx.blur_guarded {
            return InputIntent::Ignore;
        }
        if ctx.valid_draft {
            InputIntent::Submit
        } else {
            InputIntent::Cancel
        }
    }

    pub fn on_pointer(&self, target: PointerTarget, ctx: &InputContext) -> InputIntent {
        match target {
            PointerTarget::Input(slot) if slot == self.slot => InputIntent::Open,
            PointerTarget::Input(_) => InputIntent::Ignore,
            PointerTarget::Panel if ctx.open => InputIntent::GuardBlur,
            PointerTarget::Panel => InputIntent::Ignore,
            PointerTarget::Outside => self.on_blur(&InputContext {
                blur_guarded: false,
                ..*ctx
            }),
        }
    }
}

impl<A: DateAdapter> RangeController<A> {
    /// Dispatch one input event
    pub fn handle_input(&mut self, event: InputEvent<A::Date>) {
        tracing::trace!("Handling input event: {:?}", event);
        match event {
            InputEvent::Focus(slot) => self.on_focus(slot),
            InputEvent::Blur(slot) => self.on_blur(slot),
            InputEvent::KeyPressed { slot, key } => self.on_key_down(slot, &key),
            InputEvent::TextChanged { slot, text } => self.change_text(slot, &text),
            InputEvent::PointerDown(target) => self.on_pointer_down(target),
            InputEvent::PanelSelect { date, kind } => self.select_date(date, kind),
            InputEvent::RangeSelected(label) => self.select_range(&label),
            InputEvent::RangeHovered(label) => self.preview_range(label.as_deref()),
            InputEvent::Clear => self.clear(),
        }
    }

    fn input_context(&self, slot: SlotIndex) -> InputContext {
        InputContext {
            open: self.open_state.is_slot_open(slot),
            panel_focused: self.panel_focused,
            valid_draft: self.is_text_valid(slot),
            blur_guarded: self.blur_guard == Some(slot),
        }
    }

    fn apply_intent(&mut self, slot: SlotIndex, intent: InputIntent, key: Option<&KeyEvent>) {
        tracing::trace!("Applying {:?} to {} slot", intent, slot.name());
        match intent {
            InputIntent::Open => self.open(slot),
            InputIntent::Submit => self.submit(slot),
            InputIntent::Cancel => self.cancel(slot),
            InputIntent::Forward => {
                if let Some(key) = key {
                    self.forward_key_down(key);
                }
            }
            InputIntent::FocusPanel => self.panel_focused = true,
            InputIntent::FocusText => self.panel_focused = false,
            InputIntent::GuardBlur => self.blur_guard = Some(slot),
            InputIntent::Ignore => {}
        }
    }

    /// A slot's input gained focus: activate it and open its popup
    pub fn on_focus(&mut self, slot: SlotIndex) {
        if self.is_slot_disabled(slot) {
            tracing::debug!("Focus on disabled {} slot ignored", slot.name());
            return;
        }

        if !self.slots[slot].focused {
            self.slots[slot].focused = true;
            self.emit(PickerEvent::Focus { slot });
        }
        self.open(slot);
    }

    /// A slot's input lost focus
    pub fn on_blur(&mut self, slot: SlotIndex) {
        if self.blur_guard == Some(slot) && self.open_state.is_slot_open(slot) {
            tracing::trace!("Blur of {} slot absorbed by panel pointer", slot.name());
            self.blur_guard = None;
            return;
        }

        if !self.is_slot_disabled(slot) {
            let intent = SlotInput::new(slot).on_blur(&self.input_context(slot));
            self.apply_intent(slot, intent, None);
        }

        self.reset_text(slot);
        if self.slots[slot].focused {
            self.slots[slot].focused = false;
            self.emit(PickerEvent::Blur { slot });
        }
    }

    pub fn on_key_down(&mut self, slot: SlotIndex, key: &KeyEvent) {
        if self.is_slot_disabled(slot) {
            return;
        }
        // Keys still reach the input, so the panel pointer did not take focus
        self.blur_guard = None;
        let intent = SlotInput::new(slot).on_key(key, &self.input_context(slot));
        self.apply_intent(slot, intent, Some(key));
    }

    pub fn on_pointer_down(&mut self, target: PointerTarget) {
        if let PointerTarget::Input(slot) = target {
            self.on_focus(slot);
            return;
        }

        if !self.open_state.is_open() {
            return;
        }
        let active = self.open_state.active();
        let intent = SlotInput::new(active).on_pointer(target, &self.input_context(active));
        self.apply_intent(active, intent, None);
    }
}
