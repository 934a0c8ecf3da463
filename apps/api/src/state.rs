//! Application state shared by the route builders.

use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// Cloned per route builder (cheap Arc clones inside the connection
/// pool); handlers hold their own service state once the routers are
/// built.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// SQLite database connection pool
    pub db: DatabaseConnection,
}
