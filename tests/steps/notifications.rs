//! Step definitions for host notifications
//!
//! This module contains Then steps for:
//! - onChange and onCalendarChange payloads
//! - onOpenChange edges

use crate::common::world::PickerWorld;
use cucumber::then;
use tracing::debug;

fn pair(start: &str, end: &str) -> [String; 2] {
    [start.to_string(), end.to_string()]
}

#[then(regex = r#"^the last change was "([^"]*)" to "([^"]*)"$"#)]
async fn then_last_change(world: &mut PickerWorld, start: String, end: String) {
    let changes = world.changes();
    debug!("Changes so far: {:?}", changes);
    assert_eq!(changes.last(), Some(&pair(&start, &end)));
}

#[then(regex = r#"^the last calendar change was "([^"]*)" to "([^"]*)"$"#)]
async fn then_last_calendar_change(world: &mut PickerWorld, start: String, end: String) {
    let changes = world.calendar_changes();
    debug!("Calendar changes so far: {:?}", changes);
    assert_eq!(changes.last(), Some(&pair(&start, &end)));
}

#[then("no change was notified")]
async fn then_no_change(world: &mut PickerWorld) {
    assert_eq!(world.changes(), Vec::<[String; 2]>::new());
}

#[then(regex = r"^(\d+) changes? (?:was|were) notified$")]
async fn then_change_count(world: &mut PickerWorld, count: usize) {
    assert_eq!(world.changes().len(), count);
}

#[then(regex = r"^(\d+) calendar changes? (?:was|were) notified$")]
async fn then_calendar_change_count(world: &mut PickerWorld, count: usize) {
    assert_eq!(world.calendar_changes().len(), count);
}

#[then(regex = r#"^the open changes were "([^"]*)"$"#)]
async fn then_open_changes(world: &mut PickerWorld, expected: String) {
    let expected: Vec<bool> = expected
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.trim() == "open")
        .collect();
    assert_eq!(world.open_changes(), expected);
}
