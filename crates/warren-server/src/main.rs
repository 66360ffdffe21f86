//! Warren Server — application entry point.

use tracing::info;
use tracing_subscriber::EnvFilter;
use warren_db::DbManager;
use warren_server::{AppState, ServerConfig, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warren=info")),
        )
        .json()
        .init();

    info!("Starting Warren server...");

    let config = ServerConfig::from_env();

    let manager = DbManager::connect(&config.db).await?;
    warren_db::run_migrations(manager.client()).await?;

    let state = AppState::new(manager.client().clone(), config.auth.clone());
    warren_server::sweep::spawn_sweeper(state.tokens.clone(), config.sweep_interval_secs);

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
