use crate::{env_or_default, env_parsed, ConfigError, FromEnv};

/// HTTP listener configuration.
///
/// `HOST` defaults to all interfaces and `PORT` to 8080; both are plain
/// env vars so container platforms can override them.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The "host:port" string handed to the TCP listener
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or_default("HOST", "0.0.0.0"),
            port: env_parsed("PORT", "8080")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars([("HOST", None::<&str>), ("PORT", None)], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars([("HOST", Some("127.0.0.1")), ("PORT", Some("5050"))], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 5050);
        });
    }

    #[test]
    fn test_bad_port_is_an_error() {
        temp_env::with_var("PORT", Some("the-usual"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }
}
