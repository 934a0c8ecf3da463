use core_config::{database::DatabaseConfig, env_parsed, ConfigError, FromEnv};
use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

/// SQLite connection configuration.
///
/// SQLite serializes writers itself, so the pool stays small; the
/// like-counter increment and order inserts rely on that single-writer
/// behavior rather than any locking of our own.
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    /// Database connection URL, e.g. `sqlite://shop.db?mode=rwc`
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Enable SQL query logging
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            acquire_timeout_secs: 8,
            sqlx_logging: true,
        }
    }

    /// Convert this config into SeaORM ConnectOptions
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(LevelFilter::Debug);
        opt
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl From<DatabaseConfig> for SqliteConfig {
    fn from(config: DatabaseConfig) -> Self {
        Self::new(config.url)
    }
}

/// Load SqliteConfig from environment variables
///
/// - `DATABASE_URL` (optional, defaults to the local `shop.db` file)
/// - `DB_MAX_CONNECTIONS` (optional, default: 5)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (optional, default: 8)
/// - `DB_SQLX_LOGGING` (optional, default: true)
impl FromEnv for SqliteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: DatabaseConfig::from_env()?.url,
            max_connections: env_parsed("DB_MAX_CONNECTIONS", "5")?,
            acquire_timeout_secs: env_parsed("DB_ACQUIRE_TIMEOUT_SECS", "8")?,
            sqlx_logging: env_parsed("DB_SQLX_LOGGING", "true")?,
        })
    }
}
