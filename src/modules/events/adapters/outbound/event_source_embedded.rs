use crate::modules::events::adapters::outbound::event_source::{
    EventSource, EventSourceError, parse_events,
};
use crate::modules::events::core::event::Event;
use async_trait::async_trait;

const EMBEDDED_EVENTS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/events.json"
));

/// The default dataset, compiled into the binary from `data/events.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedEventSource;

#[async_trait]
impl EventSource for EmbeddedEventSource {
    async fn load(&self) -> Result<Vec<Event>, EventSourceError> {
        Ok(parse_events(EMBEDDED_EVENTS)?)
    }
}
