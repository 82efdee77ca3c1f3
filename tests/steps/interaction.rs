//! Step definitions for user and host interaction
//!
//! This module contains When steps for:
//! - Focus, blur, pointer and key input on the slots
//! - Panel picks and range shortcuts
//! - Host calls such as controlled updates, disabling and imperative blur

use crate::common::world::{parse_date, parse_range, parse_slot, PickerWorld};
use cucumber::when;
use rangeline::{
    parse_key, Disabled, Focusable, InputEvent, PointerTarget, SelectKind,
};
use tracing::{debug, info};

#[when(regex = r"^I focus the (start|end) input$")]
async fn when_focus(world: &mut PickerWorld, slot: String) {
    world.send(InputEvent::Focus(parse_slot(&slot)));
}

#[when(regex = r"^I blur the (start|end) input$")]
async fn when_blur(world: &mut PickerWorld, slot: String) {
    world.send(InputEvent::Blur(parse_slot(&slot)));
}

#[when(regex = r"^I click the (start|end) input$")]
async fn when_click_input(world: &mut PickerWorld, slot: String) {
    world.send(InputEvent::PointerDown(PointerTarget::Input(parse_slot(&slot))));
}

#[when("I click outside the picker")]
async fn when_click_outside(world: &mut PickerWorld) {
    world.send(InputEvent::PointerDown(PointerTarget::Outside));
}

#[when("I click inside the panel")]
async fn when_click_panel(world: &mut PickerWorld) {
    world.send(InputEvent::PointerDown(PointerTarget::Panel));
}

#[when(regex = r#"^I pick "([^"]+)" in the panel$"#)]
async fn when_pick(world: &mut PickerWorld, date: String) {
    let date = parse_date(&date)
        .expect("Failed to parse picked date")
        .expect("picked date must not be empty");
    world.send(InputEvent::PanelSelect {
        date,
        kind: SelectKind::Preview,
    });
}

#[when(regex = r#"^I pick "([^"]+)" in the panel and confirm$"#)]
async fn when_pick_and_confirm(world: &mut PickerWorld, date: String) {
    let date = parse_date(&date)
        .expect("Failed to parse picked date")
        .expect("picked date must not be empty");
    world.send(InputEvent::PanelSelect {
        date,
        kind: SelectKind::Submit,
    });
}

#[when(regex = r#"^I press "([^"]+)" in the (start|end) input$"#)]
async fn when_press(world: &mut PickerWorld, key: String, slot: String) {
    debug!("Pressing {} in {} input", key, slot);
    let key = parse_key(&key).expect("Failed to parse key name");
    world.send(InputEvent::KeyPressed {
        slot: parse_slot(&slot),
        key,
    });
}

#[when(regex = r#"^I type "([^"]*)" into the (start|end) input$"#)]
async fn when_type(world: &mut PickerWorld, text: String, slot: String) {
    world.send(InputEvent::TextChanged {
        slot: parse_slot(&slot),
        text,
    });
}

#[when(regex = r"^the (start|end) popup closes$")]
async fn when_popup_closes(world: &mut PickerWorld, slot: String) {
    world.controller().close(parse_slot(&slot));
}

#[when(regex = r#"^I hover the range shortcut "([^"]+)"$"#)]
async fn when_hover_shortcut(world: &mut PickerWorld, label: String) {
    world.send(InputEvent::RangeHovered(Some(label)));
}

#[when(regex = r#"^I choose the range shortcut "([^"]+)"$"#)]
async fn when_choose_shortcut(world: &mut PickerWorld, label: String) {
    info!("Choosing range shortcut {}", label);
    world.send(InputEvent::RangeSelected(label));
}

#[when("I clear the picker")]
async fn when_clear(world: &mut PickerWorld) {
    world.send(InputEvent::Clear);
}

#[when(regex = r#"^the host sets the value to "([^"]*)" to "([^"]*)"$"#)]
async fn when_host_sets_value(world: &mut PickerWorld, start: String, end: String) {
    let value = parse_range(&start, &end).expect("Failed to parse controlled value");
    world.controller().set_value(value);
}

#[when("the host disables the picker")]
async fn when_host_disables(world: &mut PickerWorld) {
    world.controller().set_disabled(Disabled::All(true));
}

#[when("the host blurs the picker")]
async fn when_host_blurs(world: &mut PickerWorld) {
    world.controller().blur();
}

#[when("the host focuses the picker")]
async fn when_host_focuses(world: &mut PickerWorld) {
    world.controller().focus();
}
