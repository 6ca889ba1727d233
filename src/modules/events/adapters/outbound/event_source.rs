use crate::modules::events::core::event::Event;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventSourceError {
    #[error("failed to read events from {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid events data in {path:?}")]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid events data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Supplies the fixed event definition the store is built from at startup.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Event>, EventSourceError>;
}

/// A dataset is a JSON array of objects; anything else is rejected.
pub(crate) fn parse_events(raw: &str) -> serde_json::Result<Vec<Event>> {
    serde_json::from_str(raw)
}
