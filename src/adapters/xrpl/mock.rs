//! Mock ledger client for testing.
//!
//! Accounts are registered up front; payments move balances between them
//! and always validate unless the client is told to fail, stall or leave
//! payments unvalidated.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::wallet::{AccountInfo, PaymentOutcome, PaymentRequest, WalletAccount};
use crate::ports::{LedgerClient, LedgerError};

#[derive(Debug, Clone, Default)]
pub struct MockLedgerClient {
    /// seed -> classic address
    seeds: Arc<Mutex<HashMap<String, String>>>,
    /// classic address -> balance in drops
    balances: Arc<Mutex<HashMap<String, u64>>>,
    next_ledger: Arc<AtomicU64>,
    fail_with: Arc<Mutex<Option<String>>>,
    payment_latency: Option<Duration>,
    leave_unvalidated: bool,
}

impl MockLedgerClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a wallet and its starting balance.
    pub fn with_account(self, seed: &str, address: &str, balance_drops: u64) -> Self {
        self.seeds
            .lock()
            .expect("seeds lock poisoned")
            .insert(seed.to_string(), address.to_string());
        self.balances
            .lock()
            .expect("balances lock poisoned")
            .insert(address.to_string(), balance_drops);
        self
    }

    /// Makes every call fail with `Unavailable(reason)`.
    pub fn fail_with(self, reason: &str) -> Self {
        *self.fail_with.lock().expect("fail lock poisoned") = Some(reason.to_string());
        self
    }

    /// Delays every payment by `latency` before it settles.
    pub fn with_payment_latency(mut self, latency: Duration) -> Self {
        self.payment_latency = Some(latency);
        self
    }

    /// Payments are accepted but never seen validated.
    pub fn leave_payments_unvalidated(mut self) -> Self {
        self.leave_unvalidated = true;
        self
    }

    pub fn balance(&self, address: &str) -> Option<u64> {
        self.balances
            .lock()
            .expect("balances lock poisoned")
            .get(address)
            .copied()
    }

    fn check_failure(&self) -> Result<(), LedgerError> {
        match self.fail_with.lock().expect("fail lock poisoned").as_ref() {
            Some(reason) => Err(LedgerError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn address_for(&self, seed: &SecretString) -> Result<String, LedgerError> {
        self.seeds
            .lock()
            .expect("seeds lock poisoned")
            .get(seed.expose_secret())
            .cloned()
            .ok_or_else(|| LedgerError::InvalidInput("unknown seed".to_string()))
    }
}

#[async_trait]
impl LedgerClient for MockLedgerClient {
    async fn generate_faucet_wallet(&self) -> Result<WalletAccount, LedgerError> {
        self.check_failure()?;
        let n = self.next_ledger.fetch_add(1, Ordering::SeqCst);
        let seed = format!("sMockFaucet{}", n);
        let address = format!("rMockFaucet{}", n);
        self.seeds
            .lock()
            .expect("seeds lock poisoned")
            .insert(seed.clone(), address.clone());
        self.balances
            .lock()
            .expect("balances lock poisoned")
            .insert(address.clone(), 100_000_000);

        Ok(WalletAccount {
            classic_address: address,
            public_key: None,
            seed: Some(SecretString::new(seed)),
            balance: Some("100".to_string()),
        })
    }

    async fn wallet_from_seed(&self, seed: &SecretString) -> Result<WalletAccount, LedgerError> {
        self.check_failure()?;
        Ok(WalletAccount {
            classic_address: self.address_for(seed)?,
            public_key: Some("ED00MOCK".to_string()),
            seed: None,
            balance: None,
        })
    }

    async fn account_info(&self, account: &str) -> Result<AccountInfo, LedgerError> {
        self.check_failure()?;
        let balance = self
            .balance(account)
            .ok_or_else(|| LedgerError::AccountNotFound(account.to_string()))?;
        Ok(AccountInfo::from_account_data(
            json!({"Account": account, "Balance": balance.to_string(), "Sequence": 1}),
            Some(self.next_ledger.load(Ordering::SeqCst)),
        ))
    }

    async fn send_payment(&self, payment: &PaymentRequest) -> Result<PaymentOutcome, LedgerError> {
        self.check_failure()?;
        let from = self.address_for(&payment.seed)?;
        let drops = payment.amount.drops();

        if let Some(latency) = self.payment_latency {
            tokio::time::sleep(latency).await;
        }
        if self.leave_unvalidated {
            let n = self.next_ledger.fetch_add(1, Ordering::SeqCst);
            return Err(LedgerError::NotValidated {
                hash: format!("MOCKPENDING{:08}", n),
            });
        }

        let mut balances = self.balances.lock().expect("balances lock poisoned");
        let available = balances.get(&from).copied().unwrap_or(0);
        if available < drops {
            return Err(LedgerError::Rejected {
                code: "tecUNFUNDED_PAYMENT".to_string(),
                message: "Insufficient XRP balance to send.".to_string(),
            });
        }
        balances.insert(from, available - drops);
        *balances.entry(payment.destination.clone()).or_insert(0) += drops;

        let ledger = self.next_ledger.fetch_add(1, Ordering::SeqCst);
        Ok(PaymentOutcome {
            hash: format!("MOCKHASH{:08}", ledger),
            result: "tesSUCCESS".to_string(),
            ledger_index: Some(ledger),
            validated: true,
        })
    }
}
