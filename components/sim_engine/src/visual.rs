//! Visual event stream for presentation layers.

use std::sync::{Arc, Mutex};

use sim_types::Subsystem;

/// A discrete presentation event keyed to a subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualEvent {
    /// The subsystem became the active/selected one
    Activated(Subsystem),
    /// The subsystem should flash briefly
    Flashing(Subsystem),
}

/// Receives visual events emitted during transitions.
///
/// The simulator has no opinion about rendering; sinks translate events into
/// whatever the presentation layer does with them.
pub trait VisualSink {
    /// Delivers one event.
    fn emit(&mut self, event: VisualEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl VisualSink for NullSink {
    fn emit(&mut self, _event: VisualEvent) {}
}

/// Sink that records every event, for tests and debugging.
///
/// Clones share the same underlying buffer, so a test can keep one handle
/// and give the other to the simulator.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<VisualEvent>>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<VisualEvent> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }

    /// Discards recorded events.
    pub fn clear(&self) {
        self.events.lock().expect("sink mutex poisoned").clear();
    }
}

impl VisualSink for RecordingSink {
    fn emit(&mut self, event: VisualEvent) {
        self.events.lock().expect("sink mutex poisoned").push(event);
    }
}
