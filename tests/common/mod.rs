//! Common test utilities and infrastructure
//!
//! This module provides shared functionality for integration tests including:
//! - Cucumber world implementation
//! - Date, slot and range parsing helpers for step arguments

pub mod world;

// Re-export commonly used items
#[allow(unused_imports)]
pub use world::PickerWorld;
