//! Service configuration loaded from defaults and `RELIEF__*` environment variables

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Top-level configuration for the relief API
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// JWT verification settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Public key for verifying tokens (PEM text or path to a PEM file)
    pub public_key: Option<String>,
}

impl AppConfig {
    /// Load configuration
    ///
    /// # Environment Variables
    /// - `RELIEF__SERVER__HOST`: Listen address (default: "0.0.0.0")
    /// - `RELIEF__SERVER__PORT`: Listen port (default: 3001)
    /// - `RELIEF__AUTH__PUBLIC_KEY`: RS256 public key, enables profile editing
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .add_source(
                Environment::with_prefix("RELIEF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl AuthConfig {
    /// Resolve the configured key to PEM text
    ///
    /// Values that do not look like PEM are treated as a path, tried relative
    /// to the working directory and then to the crate root.
    pub fn public_key_pem(&self) -> Result<Option<String>, String> {
        let Some(public_key) = self.public_key.as_deref() else {
            return Ok(None);
        };

        if public_key.starts_with("-----BEGIN") {
            return Ok(Some(public_key.to_string()));
        }

        std::fs::read_to_string(public_key)
            .or_else(|_| {
                let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
                path.push(public_key);
                std::fs::read_to_string(path)
            })
            .map(|pem| Some(pem.trim().to_string()))
            .map_err(|e| format!("Failed to read public key file: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        unsafe {
            std::env::remove_var("RELIEF__SERVER__HOST");
            std::env::remove_var("RELIEF__SERVER__PORT");
            std::env::remove_var("RELIEF__AUTH__PUBLIC_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = AppConfig::load().unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
        assert!(config.auth.public_key.is_none());
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        clear_env();
        unsafe {
            std::env::set_var("RELIEF__SERVER__HOST", "127.0.0.1");
            std::env::set_var("RELIEF__SERVER__PORT", "8080");
        }

        let config = AppConfig::load().unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");

        clear_env();
    }

    #[test]
    fn test_public_key_pem_passthrough_and_missing_file() {
        let inline = AuthConfig {
            public_key: Some("-----BEGIN PUBLIC KEY-----\nabc".to_string()),
        };
        assert_eq!(
            inline.public_key_pem().unwrap().as_deref(),
            Some("-----BEGIN PUBLIC KEY-----\nabc")
        );

        let missing = AuthConfig {
            public_key: Some("does/not/exist.pem".to_string()),
        };
        assert!(missing.public_key_pem().is_err());

        assert_eq!(AuthConfig::default().public_key_pem().unwrap(), None);
    }
}
