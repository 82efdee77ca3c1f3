//! # Models Module
//!
//! Data-side building blocks of the picker: the date adapter seam, the value
//! reconciler and the open-state coordinator.

pub mod date_adapter;
pub mod open_state;
pub mod range_value;

// Re-export all models for easy access
pub use date_adapter::{is_equal, ChronoAdapter, DateAdapter};
pub use open_state::{CloseTransition, OpenState, OpenStateCoordinator, OpenTransition};
pub use range_value::{
    format_pair, get_slot, is_range_equal, reorder, update_slot, CommitOutcome, ValueReconciler,
};
