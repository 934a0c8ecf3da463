use core_config::{database::DatabaseConfig, imgbb::ImgbbConfig, server::ServerConfig, FromEnv};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub imgbb: ImgbbConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = DatabaseConfig::from_env()?; // Defaults to the local SQLite file
        let imgbb = ImgbbConfig::from_env()?; // Required - startup fails without a key
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            database,
            imgbb,
            server,
            environment,
        })
    }
}
