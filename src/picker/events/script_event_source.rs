//! Script Event Source Implementation
//!
//! Reads one `InputEvent` per line from a text script. Used by the demo
//! binary for both script files and interactive stdin.
//!
//! ```text
//! # comments and blank lines are skipped
//! focus start
//! type start 1990-09-13
//! key start enter
//! click end
//! select 1990-09-14 submit
//! range Last week
//! hover Last week
//! hover
//! click outside
//! blur end
//! clear
//! ```

use super::event_source::EventSource;
use super::types::{PointerTarget, SelectKind};
use super::view_events::InputEvent;
use crate::picker::models::DateAdapter;
use anyhow::{anyhow, bail, Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io::BufRead;

/// Event source parsing a line-oriented script
pub struct ScriptEventSource<A: DateAdapter, R: BufRead> {
    reader: R,
    adapter: A,
    locale: String,
    formats: Vec<String>,
    line_number: usize,
    exhausted: bool,
}

impl<A: DateAdapter, R: BufRead> ScriptEventSource<A, R> {
    /// Dates in `select` lines are parsed with `formats`
    pub fn new(reader: R, adapter: A, locale: &str, formats: Vec<String>) -> Self {
        Self {
            reader,
            adapter,
            locale: locale.to_string(),
            formats,
            line_number: 0,
            exhausted: false,
        }
    }

    fn parse_line(&self, line: &str) -> Result<InputEvent<A::Date>> {
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let event = match verb.to_ascii_lowercase().as_str() {
            "focus" => InputEvent::Focus(rest.parse()?),
            "blur" => InputEvent::Blur(rest.parse()?),
            "key" => {
                let (slot, key) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| anyhow!("usage: key <slot> <key>"))?;
                InputEvent::KeyPressed {
                    slot: slot.parse()?,
                    key: parse_key(key.trim())?,
                }
            }
            "type" => {
                let (slot, text) = match rest.split_once(char::is_whitespace) {
                    Some((slot, text)) => (slot, text.trim()),
                    None => (rest, ""),
                };
                InputEvent::TextChanged {
                    slot: slot.parse()?,
                    text: text.to_string(),
                }
            }
            "click" => InputEvent::PointerDown(parse_target(rest)?),
            "select" => {
                let mut parts = rest.split_whitespace();
                let text = parts
                    .next()
                    .ok_or_else(|| anyhow!("usage: select <date> [submit]"))?;
                let date = self
                    .adapter
                    .parse(&self.locale, text, &self.formats)
                    .ok_or_else(|| anyhow!("unparsable date '{}'", text))?;
                let kind = match parts.next() {
                    Some("submit") => SelectKind::Submit,
                    Some(other) => bail!("unknown select kind '{}'", other),
                    None => SelectKind::Preview,
                };
                InputEvent::PanelSelect { date, kind }
            }
            "range" if !rest.is_empty() => InputEvent::RangeSelected(rest.to_string()),
            "hover" if rest.is_empty() => InputEvent::RangeHovered(None),
            "hover" => InputEvent::RangeHovered(Some(rest.to_string())),
            "clear" => InputEvent::Clear,
            other => bail!("unknown command '{}'", other),
        };
        Ok(event)
    }
}

impl<A: DateAdapter, R: BufRead> EventSource<A::Date> for ScriptEventSource<A, R> {
    fn read(&mut self) -> Result<Option<InputEvent<A::Date>>> {
        loop {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("failed to read script line")?;
            if read == 0 {
                self.exhausted = true;
                return Ok(None);
            }
            self.line_number += 1;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let event = self
                .parse_line(line)
                .with_context(|| format!("script line {}: '{}'", self.line_number, line))?;
            tracing::trace!("Script line {} -> {:?}", self.line_number, event);
            return Ok(Some(event));
        }
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

fn parse_target(text: &str) -> Result<PointerTarget> {
    match text.to_ascii_lowercase().as_str() {
        "panel" => Ok(PointerTarget::Panel),
        "outside" => Ok(PointerTarget::Outside),
        slot => Ok(PointerTarget::Input(slot.parse()?)),
    }
}

/// Parse key names such as `enter`, `shift-tab`, `left` or a single character
pub fn parse_key(text: &str) -> Result<KeyEvent> {
    let lower = text.to_ascii_lowercase();
    let (modifiers, name) = match lower.strip_prefix("shift-") {
        Some(name) => (KeyModifiers::SHIFT, name),
        None => (KeyModifiers::NONE, lower.as_str()),
    };

    let code = match name {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => bail!("unknown key '{}'", text),
            }
        }
    };
    Ok(KeyEvent::new(code, modifiers))
}
