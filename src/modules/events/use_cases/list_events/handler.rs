use crate::modules::events::core::event::Event;
use crate::modules::events::core::event_store::EventStore;
use std::sync::Arc;

/// Serves the full event store, whatever the request.
///
/// The handler never inspects the request and never touches the store, so
/// every call returns the same sequence in the same order.
pub struct ListEventsHandler {
    store: Arc<EventStore>,
}

impl ListEventsHandler {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }

    pub fn handle<TRequest>(&self, _request: TRequest) -> Arc<[Event]> {
        self.store.snapshot()
    }
}
