//! LedgerClient port - wallet and payment operations on the ledger network.

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::wallet::{AccountInfo, PaymentOutcome, PaymentRequest, WalletAccount};

#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Requests a new wallet funded by the test faucet.
    async fn generate_faucet_wallet(&self) -> Result<WalletAccount, LedgerError>;

    /// Derives the wallet behind `seed`. Deterministic.
    async fn wallet_from_seed(&self, seed: &SecretString) -> Result<WalletAccount, LedgerError>;

    /// Validated account state.
    async fn account_info(&self, account: &str) -> Result<AccountInfo, LedgerError>;

    /// Submits a payment and waits until the ledger validates it or the
    /// submission window closes. Anything but validated success is an error.
    async fn send_payment(&self, payment: &PaymentRequest) -> Result<PaymentOutcome, LedgerError>;
}

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The ledger holds no such account.
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// Seed or address was not accepted.
    #[error("invalid ledger input: {0}")]
    InvalidInput(String),

    /// The network rejected the transaction.
    #[error("transaction rejected: {code}: {message}")]
    Rejected { code: String, message: String },

    /// The transaction was not validated before its last ledger passed.
    #[error("transaction submission failed: {0}")]
    SubmissionFailed(String),

    /// The payment was signed and possibly submitted, but was not seen
    /// validated before the payment timeout. It may still settle.
    #[error("transaction {hash} not validated before the payment timeout")]
    NotValidated { hash: String },

    /// Network error or timeout talking to the ledger.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    /// The ledger answered with something we could not read.
    #[error("unexpected ledger response: {0}")]
    Protocol(String),
}

impl From<LedgerError> for DomainError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound(_) => DomainError::not_found(err.to_string()),
            LedgerError::InvalidInput(_) => DomainError::validation("ledger", err.to_string()),
            LedgerError::NotValidated { ref hash } => {
                DomainError::upstream(err.to_string()).with_reference("hash", hash.clone())
            }
            _ => DomainError::upstream(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn missing_account_maps_to_not_found() {
        let err: DomainError = LedgerError::AccountNotFound("rX".to_string()).into();
        assert!(err.is_not_found());
    }

    #[test]
    fn rejection_maps_to_upstream() {
        let err: DomainError = LedgerError::Rejected {
            code: "tecUNFUNDED_PAYMENT".to_string(),
            message: "insufficient XRP".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::Upstream);
    }

    #[test]
    fn unvalidated_payment_keeps_its_hash() {
        let err: DomainError = LedgerError::NotValidated {
            hash: "A1B2".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::Upstream);
        assert_eq!(err.references.get("hash"), Some(&"A1B2".to_string()));
        assert!(err.details.is_empty());
    }

    #[test]
    fn invalid_input_maps_to_validation() {
        let err: DomainError = LedgerError::InvalidInput("bad seed".to_string()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
