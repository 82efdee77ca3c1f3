//! # Session Controller
//!
//! Drives one picker session: reads input events from an `EventSource`,
//! hands them to the `RangeController` and re-renders after each event.

use crate::picker::events::EventSource;
use crate::picker::models::DateAdapter;
use crate::picker::view_models::RangeController;
use crate::picker::views::ViewRenderer;
use anyhow::{Context, Result};

/// Event loop connecting an input source, the picker and a view
pub struct SessionController<A, ES, VR>
where
    A: DateAdapter,
    ES: EventSource<A::Date>,
    VR: ViewRenderer<A>,
{
    controller: RangeController<A>,
    event_source: ES,
    view_renderer: VR,
    processed: usize,
}

impl<A, ES, VR> SessionController<A, ES, VR>
where
    A: DateAdapter,
    ES: EventSource<A::Date>,
    VR: ViewRenderer<A>,
{
    pub fn new(controller: RangeController<A>, event_source: ES, view_renderer: VR) -> Self {
        Self {
            controller,
            event_source,
            view_renderer,
            processed: 0,
        }
    }

    /// Process one event; false once the source is drained
    pub fn step(&mut self) -> Result<bool> {
        if self.event_source.is_exhausted() {
            return Ok(false);
        }

        let event = self
            .event_source
            .read()
            .with_context(|| format!("Failed to read input event #{}", self.processed + 1))?;

        match event {
            Some(event) => {
                tracing::debug!("Session event #{}: {:?}", self.processed + 1, event);
                self.controller.handle_input(event);
                self.processed += 1;
                self.view_renderer.render(&self.controller)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Render the initial state, then run until the source is drained.
    /// Returns the number of events processed.
    pub fn run(&mut self) -> Result<usize> {
        self.view_renderer.render(&self.controller)?;
        while self.step()? {}
        tracing::info!("Session finished after {} events", self.processed);
        Ok(self.processed)
    }

    pub fn controller(&self) -> &RangeController<A> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut RangeController<A> {
        &mut self.controller
    }

    pub fn view_renderer(&self) -> &VR {
        &self.view_renderer
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn into_parts(self) -> (RangeController<A>, ES, VR) {
        (self.controller, self.event_source, self.view_renderer)
    }
}
