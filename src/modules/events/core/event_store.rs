use crate::modules::events::core::event::Event;
use std::sync::Arc;

/// The process-wide, ordered collection of events.
///
/// Built once at startup and frozen: there is no way to add, remove or change
/// an event afterwards, so handles can be shared across tasks without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct EventStore {
    events: Arc<[Event]>,
}

impl EventStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Shared handle onto the whole sequence, in original order.
    pub fn snapshot(&self) -> Arc<[Event]> {
        Arc::clone(&self.events)
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
