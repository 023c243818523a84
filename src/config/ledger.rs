//! XRP Ledger configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Ledger node and faucet endpoints. Defaults point at the public testnet.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// JSON-RPC endpoint of a rippled node
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Testnet faucet base URL
    #[serde(default = "default_faucet_url")]
    pub faucet_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Delay between validation polls after submitting a payment
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Ledgers ahead of the current one a payment stays valid for
    #[serde(default = "default_ledger_offset")]
    pub ledger_offset: u32,

    /// Total time a payment may take, from preparation to validation.
    /// Must stay below `server.request_timeout_secs`.
    #[serde(default = "default_payment_timeout")]
    pub payment_timeout_secs: u64,
}

impl LedgerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn payment_timeout(&self) -> Duration {
        Duration::from_secs(self.payment_timeout_secs)
    }

    /// Validate ledger configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.rpc_url) {
            return Err(ValidationError::InvalidHttpUrl("ledger.rpc_url"));
        }
        if !is_http_url(&self.faucet_url) {
            return Err(ValidationError::InvalidHttpUrl("ledger.faucet_url"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("ledger.timeout_secs"));
        }
        if self.poll_interval_ms == 0 {
            return Err(ValidationError::InvalidTimeout("ledger.poll_interval_ms"));
        }
        if self.ledger_offset == 0 || self.ledger_offset > 1000 {
            return Err(ValidationError::InvalidLedgerOffset);
        }
        if self.payment_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("ledger.payment_timeout_secs"));
        }
        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            faucet_url: default_faucet_url(),
            timeout_secs: default_timeout(),
            poll_interval_ms: default_poll_interval(),
            ledger_offset: default_ledger_offset(),
            payment_timeout_secs: default_payment_timeout(),
        }
    }
}

pub(super) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_rpc_url() -> String {
    "https://s.altnet.rippletest.net:51234".to_string()
}

fn default_faucet_url() -> String {
    "https://faucet.altnet.rippletest.net".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_poll_interval() -> u64 {
    1000
}

fn default_ledger_offset() -> u32 {
    20
}

fn default_payment_timeout() -> u64 {
    25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_testnet() {
        let config = LedgerConfig::default();
        assert!(config.rpc_url.contains("altnet"));
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.ledger_offset, 20);
        assert_eq!(config.payment_timeout(), Duration::from_secs(25));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_http_rpc_url_rejected() {
        let config = LedgerConfig {
            rpc_url: "wss://s.altnet.rippletest.net:51233".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidHttpUrl("ledger.rpc_url"))
        ));
    }

    #[test]
    fn test_ledger_offset_bounds() {
        let config = LedgerConfig {
            ledger_offset: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidLedgerOffset)));
    }
}
