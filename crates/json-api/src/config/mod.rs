//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig, logging::LoggingConfig, server::ServerRuntimeConfig, storage::StorageConfig,
};

pub(crate) mod auth;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod storage;

/// Catalog JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "catalog-json", about = "Product Catalog JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Product storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// API key settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::config::{logging::LogFormat, storage::StorageBackend};

    use super::*;

    #[test]
    fn test_defaults_apply_when_only_api_key_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--api-key",
            "secret123",
            "--storage",
            "memory",
        ])?;

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
        assert!(matches!(config.logging.log_format, LogFormat::Compact));
        assert!(matches!(config.storage.storage, StorageBackend::Memory));
        assert!(!config.storage.seed_sample_data);

        Ok(())
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let result = ServerConfig::try_parse_from(["catalog-json", "--api-key", ""]);

        assert!(result.is_err());
    }
}
