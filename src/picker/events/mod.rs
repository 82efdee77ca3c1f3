//! # Events Module
//!
//! Re-exports all event system components organized by category:
//! shared types, inbound input events, outbound picker notifications, the
//! event bus and the event sources feeding the session loop.

pub mod event_bus;
pub mod event_source;
pub mod model_events;
pub mod script_event_source;
pub mod test_event_source;
pub mod types;
pub mod view_events;

// Re-export all types for easy access
pub use event_bus::{EventBus, PickerEventHandler, SimpleEventBus};
pub use event_source::EventSource;
pub use model_events::PickerEvent;
pub use script_event_source::{parse_key, ScriptEventSource};
pub use test_event_source::TestEventSource;
pub use types::{Disabled, PointerTarget, RangeValue, SelectKind, SlotIndex};
pub use view_events::InputEvent;
