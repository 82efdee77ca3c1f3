//! # Views Module
//!
//! Renders the picker state as plain text for the demo binary and tests.

pub mod text_renderer;

// Re-export main types for convenience
pub use text_renderer::{render_line, TextRenderer, ViewRenderer};
