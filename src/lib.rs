//! # Rangeline - Headless Dual-Input Date Range Picker
//!
//! The state machine behind a range picker with two text inputs (start and
//! end) that behave as one control: ordering, emptiness rules, typed text,
//! calendar selections and the open/close lifecycle of both popups.
//! Rendering is left to the host; the crate hands out props and publishes
//! notifications.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Props     ┌─────────────────┐    Commits   ┌──────────────┐
//! │    View     │◄─────────────│ RangeController │─────────────▶│   Models     │
//! │             │              │                 │              │              │
//! │ - Inputs    │              │ - Text mapping  │              │ - Reconciler │
//! │ - Panel     │              │ - Input intents │              │ - Open state │
//! │ - Renderer  │              │ - Commit paths  │              │ - Dates      │
//! └─────────────┘              └─────────────────┘              └──────────────┘
//!                                  ▲          │
//!                      InputEvents │          │ PickerEvents
//!                                  │          ▼
//!                        ┌───────────────┐  ┌──────────┐
//!                        │  Session      │  │ EventBus │
//!                        │  Controller   │  │          │
//!                        └───────────────┘  └──────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod picker;

// Re-export main types for easy access
pub use picker::*;
