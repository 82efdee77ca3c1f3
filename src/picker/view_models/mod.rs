//! # ViewModel Module
//!
//! The `RangeController` orchestrator, split into focused responsibilities:
//! text mapping, input interaction, open management and commit paths all
//! extend the one struct defined in `core`.

mod commit_manager;
mod core;
mod focus;
mod input_controller;
mod open_manager;
mod options;
mod props;
mod text_mapping;


// Re-export the main controller
pub use self::core::{RangeController, SlotState};

// Re-export types that other modules need
pub use focus::Focusable;
pub use input_controller::{InputContext, InputIntent, SlotInput};
pub use options::{DisabledDate, RangePickerOptions, RangeProducer, RangeShortcut};
pub use props::{CalendarPanel, InputProps, PanelProps, PopupProps};
pub use text_mapping::{ValueTexts, ValueTextsIter};
