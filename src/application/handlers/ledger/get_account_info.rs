//! GetAccountInfo - Query handler for validated account state.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::wallet::AccountInfo;
use crate::ports::{LedgerClient, LedgerError};

#[derive(Debug, Clone)]
pub struct GetAccountInfoQuery {
    pub account_id: String,
}

pub struct GetAccountInfoHandler {
    ledger: Arc<dyn LedgerClient>,
}

impl GetAccountInfoHandler {
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self { ledger }
    }

    pub async fn handle(
        &self,
        query: GetAccountInfoQuery,
        ctx: &RequestContext,
    ) -> Result<AccountInfo, DomainError> {
        let account = query.account_id.trim();
        if account.is_empty() {
            return Err(DomainError::validation("account_id", "Account id cannot be empty"));
        }

        self.ledger.account_info(account).await.map_err(|e| {
            match &e {
                LedgerError::AccountNotFound(_) => {
                    tracing::info!(request_id = %ctx, %account, "account not found on ledger");
                }
                _ => {
                    tracing::error!(request_id = %ctx, %account, error = %e, "account_info failed");
                }
            }
            DomainError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::ledger::test_support::{MockLedger, KNOWN_ACCOUNT};

    fn query(account: &str) -> GetAccountInfoQuery {
        GetAccountInfoQuery {
            account_id: account.to_string(),
        }
    }

    #[tokio::test]
    async fn returns_validated_account_data() {
        let handler = GetAccountInfoHandler::new(Arc::new(MockLedger::default()));
        let info = handler
            .handle(query(KNOWN_ACCOUNT), &RequestContext::new("t"))
            .await
            .unwrap();

        assert_eq!(info.account, KNOWN_ACCOUNT);
        assert_eq!(info.balance_drops.as_deref(), Some("5000000"));
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let handler = GetAccountInfoHandler::new(Arc::new(MockLedger::default()));
        let err = handler
            .handle(query("rUnknown"), &RequestContext::new("t"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
