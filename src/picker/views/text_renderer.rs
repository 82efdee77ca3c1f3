//! # Text Renderer
//!
//! One line per render: both inputs joined by the separator. The open slot
//! is wrapped in braces, closed slots in brackets, and an empty slot shows
//! its placeholder in angle brackets.
//!
//! ```text
//! [1989-11-28] ~ {1990-09-03}
//! [<start>] ~ [<end>]
//! ```

use crate::picker::events::SlotIndex;
use crate::picker::models::DateAdapter;
use crate::picker::view_models::RangeController;
use anyhow::{Context, Result};
use std::io::Write;

/// Trait for rendering views
pub trait ViewRenderer<A: DateAdapter> {
    /// Render the full control state
    fn render(&mut self, controller: &RangeController<A>) -> Result<()>;
}

/// Format the control as a single line
pub fn render_line<A: DateAdapter>(controller: &RangeController<A>) -> String {
    let [start, end] = SlotIndex::ALL.map(|slot| render_slot(controller, slot));
    format!("{} {} {}", start, controller.options().separator, end)
}

fn render_slot<A: DateAdapter>(controller: &RangeController<A>, slot: SlotIndex) -> String {
    let props = controller.input_props(slot);
    let body = if props.value.is_empty() && !props.placeholder.is_empty() {
        format!("<{}>", props.placeholder)
    } else {
        props.value
    };
    let mut rendered = if controller.is_slot_open(slot) {
        format!("{{{}}}", body)
    } else {
        format!("[{}]", body)
    };
    if props.disabled {
        rendered.push('#');
    }
    rendered
}

/// Writes rendered lines to any `Write` sink
pub struct TextRenderer<W: Write> {
    writer: W,
    last_line: Option<String>,
}

impl<W: Write> TextRenderer<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            last_line: None,
        }
    }

    pub fn last_line(&self) -> Option<&str> {
        self.last_line.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<A: DateAdapter, W: Write> ViewRenderer<A> for TextRenderer<W> {
    fn render(&mut self, controller: &RangeController<A>) -> Result<()> {
        let line = render_line(controller);
        writeln!(self.writer, "{}", line).context("Failed to write rendered line")?;
        self.writer.flush().context("Failed to flush renderer")?;
        self.last_line = Some(line);
        Ok(())
    }
}
