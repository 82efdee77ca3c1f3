//! # Range Picker MVVM Implementation
//!
//! The dual-input range picker split into events, models, view models,
//! controllers and views. Only `view_models::RangeController` owns state;
//! everything else either feeds it or reads from it.

pub mod controllers;
pub mod events;
pub mod models;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::SessionController;
pub use events::*;
pub use view_models::*;
pub use views::*;

// Re-export specific items from models to avoid conflicts
pub use models::{ChronoAdapter, CommitOutcome, DateAdapter, OpenState, ValueReconciler};
