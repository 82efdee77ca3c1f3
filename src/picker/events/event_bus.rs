//! # Event Bus
//!
//! Distributes picker notifications to subscribers using the observer pattern.

use super::model_events::PickerEvent;

/// Type alias for picker event handlers to reduce complexity
pub type PickerEventHandler<D> = Box<dyn Fn(&PickerEvent<D>) + Send + Sync>;

/// Event bus for decoupled delivery of picker notifications
pub trait EventBus<D>: Send + Sync {
    /// Publish a picker event
    fn publish(&mut self, event: PickerEvent<D>);

    /// Subscribe to picker events
    fn subscribe(&mut self, handler: PickerEventHandler<D>);
}

/// Simple in-memory event bus implementation
pub struct SimpleEventBus<D> {
    handlers: Vec<PickerEventHandler<D>>,
}

impl<D> SimpleEventBus<D> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<D> Default for SimpleEventBus<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> EventBus<D> for SimpleEventBus<D> {
    fn publish(&mut self, event: PickerEvent<D>) {
        for handler in &self.handlers {
            handler(&event);
        }
    }

    fn subscribe(&mut self, handler: PickerEventHandler<D>) {
        self.handlers.push(handler);
    }
}
