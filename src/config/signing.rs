//! Signing platform (XUMM) configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::ledger::is_http_url;

/// XUMM platform credentials and endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SigningConfig {
    pub api_key: SecretString,

    pub api_secret: SecretString,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SigningConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate signing configuration
    pub fn validate(&self, is_production: bool) -> Result<(), ValidationError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("SIGNING__API_KEY"));
        }
        if self.api_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("SIGNING__API_SECRET"));
        }
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidHttpUrl("signing.base_url"));
        }
        if is_production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::SigningUrlMustBeHttps);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("signing.timeout_secs"));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://xumm.app/api/v1/platform".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> SigningConfig {
        SigningConfig {
            api_key: SecretString::new("key".to_string()),
            api_secret: SecretString::new("secret".to_string()),
            base_url: base_url.to_string(),
            timeout_secs: 10,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config("https://xumm.app/api/v1/platform").validate(true).is_ok());
    }

    #[test]
    fn test_empty_key_rejected() {
        let mut c = config("https://xumm.app/api/v1/platform");
        c.api_key = SecretString::new(String::new());
        assert!(matches!(
            c.validate(false),
            Err(ValidationError::MissingRequired("SIGNING__API_KEY"))
        ));
    }

    #[test]
    fn test_plain_http_only_outside_production() {
        let c = config("http://localhost:9000");
        assert!(c.validate(false).is_ok());
        assert!(matches!(
            c.validate(true),
            Err(ValidationError::SigningUrlMustBeHttps)
        ));
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let c = config("https://xumm.app/api/v1/platform");
        let rendered = format!("{:?}", c);
        assert!(!rendered.contains("\"secret\""));
        assert!(!rendered.contains("\"key\""));
    }
}
