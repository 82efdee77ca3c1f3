//! Step definitions for picker state
//!
//! This module contains Then steps for:
//! - Committed value and input texts
//! - Popup open state and the active slot
//! - The rendered line

use crate::common::world::{parse_range, parse_slot, PickerWorld};
use cucumber::then;
use rangeline::{render_line, OpenState, SlotIndex};

#[then(regex = r#"^the (start|end) input shows "([^"]*)"$"#)]
async fn then_input_shows(world: &mut PickerWorld, slot: String, text: String) {
    let slot = parse_slot(&slot);
    assert_eq!(world.controller().slot_text(slot), text);
}

#[then(regex = r#"^the value is "([^"]*)" to "([^"]*)"$"#)]
async fn then_value_is(world: &mut PickerWorld, start: String, end: String) {
    let expected = parse_range(&start, &end).expect("Failed to parse expected value");
    assert_eq!(world.controller().value(), &expected);
}

#[then("the value is empty")]
async fn then_value_empty(world: &mut PickerWorld) {
    assert_eq!(world.controller().value(), &None);
}

#[then(regex = r"^the (start|end) popup is open$")]
async fn then_popup_open(world: &mut PickerWorld, slot: String) {
    let slot = parse_slot(&slot);
    assert_eq!(world.controller().open_state(), OpenState::Open(slot));
}

#[then("the popup is closed")]
async fn then_popup_closed(world: &mut PickerWorld) {
    assert_eq!(world.controller().open_state(), OpenState::Closed);
}

#[then("at most one popup is open")]
async fn then_single_open(world: &mut PickerWorld) {
    let controller = world.controller();
    let open = SlotIndex::ALL
        .iter()
        .filter(|slot| controller.is_slot_open(**slot))
        .count();
    assert!(open <= 1, "{} popups open", open);
}

#[then(regex = r"^the (start|end) input is focused$")]
async fn then_input_focused(world: &mut PickerWorld, slot: String) {
    let slot = parse_slot(&slot);
    assert!(world.controller().is_focused(slot));
}

#[then(regex = r"^the (start|end) input is not focused$")]
async fn then_input_not_focused(world: &mut PickerWorld, slot: String) {
    let slot = parse_slot(&slot);
    assert!(!world.controller().is_focused(slot));
}

#[then(regex = r#"^the rendered line is "([^"]*)"$"#)]
async fn then_rendered_line(world: &mut PickerWorld, line: String) {
    assert_eq!(render_line(world.controller()), line);
}
