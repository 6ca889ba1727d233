// Runtime configuration, read from the environment at startup.
//
// The binary passes an environment lookup, after loading any `.env` file.

use crate::modules::events::adapters::outbound::event_source::EventSource;
use crate::modules::events::adapters::outbound::event_source_embedded::EmbeddedEventSource;
use crate::modules::events::adapters::outbound::event_source_json_file::JsonFileEventSource;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

pub const HOST_VAR: &str = "BULLETIN_BOARD_HOST";
pub const PORT_VAR: &str = "BULLETIN_BOARD_PORT";
pub const EVENTS_FILE_VAR: &str = "BULLETIN_BOARD_EVENTS_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BULLETIN_BOARD_PORT must be a port number, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Dataset to serve; the embedded dataset is used when unset.
    pub events_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            events_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty(HOST_VAR).unwrap_or(defaults.host);
        let port = match non_empty(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };
        let events_file = non_empty(EVENTS_FILE_VAR).map(PathBuf::from);

        Ok(Self {
            host,
            port,
            events_file,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn event_source(&self) -> Box<dyn EventSource> {
        match &self.events_file {
            Some(path) => Box::new(JsonFileEventSource::new(path)),
            None => Box::new(EmbeddedEventSource),
        }
    }
}
