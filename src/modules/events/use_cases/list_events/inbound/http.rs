use axum::{Json, extract::Request, extract::State};
use std::sync::Arc;

use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, request: Request) -> Json<Arc<[Event]>> {
    let events = state.list_events.handle(request);
    tracing::debug!(count = events.len(), "serving events");
    Json(events)
}
