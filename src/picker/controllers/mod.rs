//! # Controllers Module
//!
//! Contains the session controller that feeds input events to the picker.

pub mod session_controller;

// Re-export main types for convenience
pub use session_controller::SessionController;
