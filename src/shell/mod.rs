// Composition root for the bulletin board.
//
// - Read config from the environment.
// - Load the event store once from the configured source.
// - Wire the store into the use case handlers and inbound adapters.

pub mod config;
pub mod graphql;
pub mod http;
pub mod server;
pub mod state;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::events::adapters::outbound::event_source::{EventSource, EventSourceError};
use crate::modules::events::core::event_store::EventStore;
use crate::shell::state::AppState;

/// Builds the store once from `source`; the store is frozen from here on.
pub async fn load_event_store(source: &dyn EventSource) -> Result<EventStore, EventSourceError> {
    let store = EventStore::new(source.load().await?);
    tracing::info!(count = store.len(), "event store loaded");
    Ok(store)
}

pub fn app(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());
    http::router(state)
        .merge(graphql::router(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
