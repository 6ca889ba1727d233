use crate::modules::events::core::event_store::EventStore;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_events: Arc<ListEventsHandler>,
}

impl AppState {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self {
            list_events: Arc::new(ListEventsHandler::new(store)),
        }
    }
}
