//! GetAccount - Query handler for a wallet from a seed, or a new one.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::wallet::WalletAccount;
use crate::ports::LedgerClient;

#[derive(Debug, Clone, Default)]
pub struct GetAccountQuery {
    pub seed: Option<SecretString>,
}

/// With a seed, derives that wallet. Without one (or with a blank one),
/// asks the faucet for a new funded test wallet.
pub struct GetAccountHandler {
    ledger: Arc<dyn LedgerClient>,
}

impl GetAccountHandler {
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self { ledger }
    }

    pub async fn handle(
        &self,
        query: GetAccountQuery,
        ctx: &RequestContext,
    ) -> Result<WalletAccount, DomainError> {
        let seed = query.seed.filter(|s| !s.expose_secret().trim().is_empty());

        let wallet = match seed {
            Some(seed) => self.ledger.wallet_from_seed(&seed).await,
            None => self.ledger.generate_faucet_wallet().await,
        }
        .map_err(|e| {
            tracing::error!(request_id = %ctx, error = %e, "wallet lookup failed");
            DomainError::from(e)
        })?;

        tracing::info!(request_id = %ctx, account = %wallet.classic_address, "wallet resolved");
        Ok(wallet)
    }
}
