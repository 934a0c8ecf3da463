use axum::extract::DefaultBodyLimit;
use axum_helpers::{create_permissive_cors_layer, shutdown_signal};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sqlite::SqliteConfig;
use tower_http::trace::TraceLayer;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Generous cap for multipart submissions carrying several images
const BODY_LIMIT_BYTES: usize = 25 * 1024 * 1024;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::sqlite::connect_from_config(SqliteConfig::from(config.database.clone()))
        .await
        .map_err(|e| eyre::eyre!("SQLite connection failed: {}", e))?;

    database::sqlite::run_migrations::<migration::Migrator>(&db, "shop_api")
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    let state = AppState { config, db };

    let app = api::routes(&state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(create_permissive_cors_layer())
        .layer(TraceLayer::new_for_http());

    let address = state.config.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| eyre::eyre!("Failed to bind {}: {}", address, e))?;

    info!("Shop API listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutting down: closing database connection");
    match state.db.close().await {
        Ok(_) => info!("SQLite connection closed successfully"),
        Err(e) => tracing::error!("Error closing SQLite connection: {}", e),
    }

    info!("Shop API shutdown complete");
    Ok(())
}
