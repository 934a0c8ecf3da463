use crate::{env_or_default, ConfigError, FromEnv};

/// Default store location, matching the original single-file deployment.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://shop.db?mode=rwc";

/// Database configuration
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl FromEnv for DatabaseConfig {
    /// Reads DATABASE_URL, falling back to the local SQLite file
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_from_env_set() {
        temp_env::with_var("DATABASE_URL", Some("sqlite://other.db?mode=rwc"), || {
            let config = DatabaseConfig::from_env().unwrap();
            assert_eq!(config.url, "sqlite://other.db?mode=rwc");
        });
    }

    #[test]
    fn test_database_config_from_env_default() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let config = DatabaseConfig::from_env().unwrap();
            assert_eq!(config.url, DEFAULT_DATABASE_URL);
        });
    }

    #[test]
    fn test_database_config_new() {
        let config = DatabaseConfig::new("sqlite://shop.db".to_string());
        assert_eq!(config.url, "sqlite://shop.db");
    }
}
