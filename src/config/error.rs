//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid timeout for {0}")]
    InvalidTimeout(&'static str),

    #[error("Invalid log format (expected pretty or json)")]
    InvalidLogFormat,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Invalid queue URL format (expected redis:// or rediss://)")]
    InvalidQueueUrl,

    #[error("Invalid {0} URL (expected http:// or https://)")]
    InvalidHttpUrl(&'static str),

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Ledger offset must be between 1 and 1000")]
    InvalidLedgerOffset,

    #[error("ledger.payment_timeout_secs ({payment}) must be below server.request_timeout_secs ({request})")]
    PaymentOutlastsRequest { payment: u64, request: u64 },

    #[error("API key is required outside development")]
    ApiKeyRequired,

    #[error("Signing service URL must use HTTPS in production")]
    SigningUrlMustBeHttps,
}
