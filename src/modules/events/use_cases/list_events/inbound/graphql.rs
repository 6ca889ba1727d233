use async_graphql::{Context, Json, Object};

use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every bulletin board event, in dataset order, as opaque JSON records.
    async fn events(&self, context: &Context<'_>) -> Vec<Json<Event>> {
        let state = context.data_unchecked::<AppState>();
        let events = state.list_events.handle(());
        tracing::debug!(count = events.len(), "serving events over graphql");
        events.iter().cloned().map(Json).collect()
    }
}
