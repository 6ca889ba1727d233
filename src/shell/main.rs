use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use bulletin_board::shell::config::AppConfig;
use bulletin_board::shell::server::start_server;
use bulletin_board::shell::state::AppState;
use bulletin_board::shell::{app, load_event_store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_lookup(|key| std::env::var(key).ok())?;
    tracing::debug!(events_file = ?config.events_file, "configuration read");

    let store = load_event_store(&*config.event_source()).await?;

    let state = AppState::new(Arc::new(store));
    start_server(&config, app(state)).await?;
    Ok(())
}
