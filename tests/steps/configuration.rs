//! Step definitions for picker configuration
//!
//! This module contains Given steps for:
//! - Default and controlled values
//! - allowEmpty, selectable and disabled
//! - Accepted formats and range shortcuts

use crate::common::world::{
    disabled_slot, fixed_shortcut, parse_flag, parse_range, parse_slot, PickerWorld,
};
use cucumber::given;
use rangeline::Disabled;
use tracing::debug;

#[given("a range picker")]
async fn given_range_picker(world: &mut PickerWorld) {
    debug!("Using default picker options");
    world.options_mut();
}

#[given(regex = r#"^a range picker with default value "([^"]*)" to "([^"]*)"$"#)]
async fn given_default_value(world: &mut PickerWorld, start: String, end: String) {
    let value = parse_range(&start, &end).expect("Failed to parse default value");
    world.configure(|options| options.with_default_value(value));
}

#[given(regex = r#"^a range picker with controlled value "([^"]*)" to "([^"]*)"$"#)]
async fn given_controlled_value(world: &mut PickerWorld, start: String, end: String) {
    let value = parse_range(&start, &end).expect("Failed to parse controlled value");
    world.configure(|options| options.with_value(value));
}

#[given(regex = r"^allow empty is (true|false) for start and (true|false) for end$")]
async fn given_allow_empty(world: &mut PickerWorld, start: String, end: String) {
    let allow_empty = [parse_flag(&start), parse_flag(&end)];
    world.configure(|options| options.with_allow_empty(allow_empty));
}

#[given(regex = r"^selectable is (true|false) for start and (true|false) for end$")]
async fn given_selectable(world: &mut PickerWorld, start: String, end: String) {
    let selectable = [parse_flag(&start), parse_flag(&end)];
    world.configure(|options| options.with_selectable(selectable));
}

#[given(regex = r"^the (start|end) slot is disabled$")]
async fn given_slot_disabled(world: &mut PickerWorld, slot: String) {
    let disabled = disabled_slot(parse_slot(&slot));
    world.configure(|options| options.with_disabled(disabled));
}

#[given("the whole picker is disabled")]
async fn given_picker_disabled(world: &mut PickerWorld) {
    world.configure(|options| options.with_disabled(Disabled::All(true)));
}

#[given(regex = r#"^the accepted formats are "([^"]+)" and "([^"]+)"$"#)]
async fn given_formats(world: &mut PickerWorld, primary: String, secondary: String) {
    world.configure(|options| options.with_formats([primary, secondary]));
}

#[given(regex = r#"^the placeholders are "([^"]*)" and "([^"]*)"$"#)]
async fn given_placeholders(world: &mut PickerWorld, start: String, end: String) {
    world.configure(|options| options.with_placeholder(&start, &end));
}

#[given(regex = r#"^the separator is "([^"]+)"$"#)]
async fn given_separator(world: &mut PickerWorld, separator: String) {
    world.configure(|options| options.with_separator(&separator));
}

#[given(regex = r#"^a range shortcut "([^"]+)" from "([^"]*)" to "([^"]*)"$"#)]
async fn given_range_shortcut(world: &mut PickerWorld, label: String, start: String, end: String) {
    let shortcut = fixed_shortcut(&start, &end).expect("Failed to build shortcut");
    world.configure(|options| options.with_range(&label, shortcut));
}
