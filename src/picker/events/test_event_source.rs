//! Test Event Source Implementation
//!
//! Implementation of EventSource backed by a queue of pre-programmed events,
//! allowing deterministic tests of the session loop.

use super::event_source::EventSource;
use super::view_events::InputEvent;
use anyhow::Result;
use std::collections::VecDeque;

/// Test event source that provides events from a pre-programmed queue
#[derive(Debug, Clone)]
pub struct TestEventSource<D> {
    events: VecDeque<InputEvent<D>>,
}

impl<D> TestEventSource<D> {
    /// Create a new test event source with an empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Create a test event source with pre-populated events
    pub fn with_events(events: Vec<InputEvent<D>>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn push(&mut self, event: InputEvent<D>) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<D> Default for TestEventSource<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> EventSource<D> for TestEventSource<D> {
    fn read(&mut self) -> Result<Option<InputEvent<D>>> {
        Ok(self.events.pop_front())
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}
