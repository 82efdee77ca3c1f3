//! Step definitions for Cucumber tests
//!
//! Steps are organized by phase:
//! - `configuration` - Given steps building the picker options
//! - `interaction` - When steps sending input events and host calls
//! - `notifications` - Then steps checking published events
//! - `state` - Then steps checking value, texts and popup state

pub mod configuration;
pub mod interaction;
pub mod notifications;
pub mod state;
