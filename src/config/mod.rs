//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `XRPL_USER_SERVICE` prefix and nested
//! values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use xrpl_user_service::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod ledger;
mod queue;
mod server;
mod signing;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use ledger::LedgerConfig;
pub use queue::QueueConfig;
pub use server::{Environment, LogFormat, ServerConfig};
pub use signing::SigningConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, environment, logging, API key)
    #[serde(default)]
    pub server: ServerConfig,

    /// User record store (PostgreSQL)
    pub database: DatabaseConfig,

    /// Queue broker (Redis)
    pub queue: QueueConfig,

    /// XRP Ledger node and faucet
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// XUMM signing platform
    pub signing: SigningConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `XRPL_USER_SERVICE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `XRPL_USER_SERVICE__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// A `.env` file is read first when present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("XRPL_USER_SERVICE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.queue.validate()?;
        self.ledger.validate()?;
        self.signing.validate(self.is_production())?;

        // A payment must finish (or give up with its hash) before the
        // request layer cuts the connection.
        if self.ledger.payment_timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::PaymentOutlastsRequest {
                payment: self.ledger.payment_timeout_secs,
                request: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
