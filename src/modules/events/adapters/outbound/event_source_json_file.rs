// Event source backed by a JSON data file on disk.
//
// The file is read once, when the store is built at startup.

use crate::modules::events::adapters::outbound::event_source::{
    EventSource, EventSourceError, parse_events,
};
use crate::modules::events::core::event::Event;
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JsonFileEventSource {
    path: PathBuf,
}

impl JsonFileEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventSource for JsonFileEventSource {
    async fn load(&self) -> Result<Vec<Event>, EventSourceError> {
        tracing::debug!(path = %self.path.display(), "reading events file");
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| EventSourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_events(&raw).map_err(|source| EventSourceError::InvalidFile {
            path: self.path.clone(),
            source,
        })
    }
}
