//! # Event Source Abstraction
//!
//! The session loop reads `InputEvent`s from an `EventSource` instead of a
//! concrete UI toolkit, so the same loop can be fed by a script file, stdin,
//! or a pre-programmed queue in tests.
//!
//! ```text
//! Demo binary:  SessionController ──▶ ScriptEventSource ──▶ script lines
//! Tests:        SessionController ──▶ TestEventSource   ──▶ VecDeque
//! ```

use super::view_events::InputEvent;
use anyhow::Result;

/// Trait for abstracting event input sources
pub trait EventSource<D> {
    /// Read the next available event, `None` once the source is drained
    fn read(&mut self) -> Result<Option<InputEvent<D>>>;

    /// Check if the event source is exhausted
    ///
    /// Interactive sources never report exhaustion; they return `None` from
    /// `read` when their input closes.
    fn is_exhausted(&self) -> bool {
        false
    }
}
