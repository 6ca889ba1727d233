use axum::{Router, routing::get};

use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_http::handle))
        .with_state(state)
}
