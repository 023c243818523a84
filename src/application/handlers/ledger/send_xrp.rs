//! SendXrp - Command handler for an XRP payment.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::wallet::{PaymentOutcome, PaymentRequest, XrpAmount};
use crate::ports::LedgerClient;

#[derive(Debug, Clone)]
pub struct SendXrpCommand {
    pub seed: SecretString,
    /// Whole XRP.
    pub amount: i64,
    pub destination: String,
}

/// Returns only once the ledger has validated the payment. Every other
/// outcome, including a missed submission window, is an error.
pub struct SendXrpHandler {
    ledger: Arc<dyn LedgerClient>,
}

impl SendXrpHandler {
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self { ledger }
    }

    pub async fn handle(
        &self,
        cmd: SendXrpCommand,
        ctx: &RequestContext,
    ) -> Result<PaymentOutcome, DomainError> {
        let amount = XrpAmount::new(cmd.amount)?;
        let payment = PaymentRequest::new(cmd.seed, amount, cmd.destination)?;

        let outcome = self.ledger.send_payment(&payment).await.map_err(|e| {
            tracing::error!(
                request_id = %ctx,
                destination = %payment.destination,
                %amount,
                error = %e,
                "payment failed"
            );
            DomainError::from(e)
        })?;

        tracing::info!(
            request_id = %ctx,
            destination = %payment.destination,
            %amount,
            hash = %outcome.hash,
            "payment validated"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::ledger::test_support::MockLedger;
    use crate::domain::foundation::ErrorCode;

    fn command(amount: i64, destination: &str) -> SendXrpCommand {
        SendXrpCommand {
            seed: SecretString::new("sEdSender".to_string()),
            amount,
            destination: destination.to_string(),
        }
    }

    #[tokio::test]
    async fn converts_amount_to_drops() {
        let ledger = Arc::new(MockLedger::default());
        let handler = SendXrpHandler::new(ledger.clone());

        let outcome = handler
            .handle(command(12, "rDest"), &RequestContext::new("t"))
            .await
            .unwrap();

        assert!(outcome.validated);
        assert_eq!(
            ledger.payments.lock().unwrap().as_slice(),
            &[("rDest".to_string(), 12_000_000)]
        );
    }

    #[tokio::test]
    async fn non_positive_amount_fails_validation_before_submit() {
        let ledger = Arc::new(MockLedger::default());
        let handler = SendXrpHandler::new(ledger.clone());

        let err = handler
            .handle(command(0, "rDest"), &RequestContext::new("t"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(ledger.payments.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn submission_failure_is_an_error_not_a_value() {
        let ledger = Arc::new(MockLedger {
            reject_payments: true,
            ..Default::default()
        });
        let handler = SendXrpHandler::new(ledger);

        let err = handler
            .handle(command(1, "rDest"), &RequestContext::new("t"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Upstream);
    }
}
