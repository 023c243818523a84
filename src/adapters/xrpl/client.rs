//! XRPL client - implementation of LedgerClient over rippled JSON-RPC.
//!
//! Keys are derived and payments signed in-process, so the node only ever
//! sees public keys, signatures and signed blobs. New wallets come from the
//! test network faucet. A payment runs under one deadline
//! (`payment_timeout`) that covers preparation, `submit` and the `tx` polls;
//! it also carries a `LastLedgerSequence`, so polling ends once that ledger
//! has passed.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::time::{timeout_at, Instant};

use crate::config::LedgerConfig;
use crate::domain::wallet::{AccountInfo, PaymentOutcome, PaymentRequest, WalletAccount};
use crate::ports::{LedgerClient, LedgerError};

use super::codec::{Payment, SignedTransaction, MAX_DROPS};
use super::keys::{decode_address, Keypair};
use super::types::{
    check_result, is_final_rejection, AccountInfoResult, AccountSequenceResult, FaucetResponse,
    FeeResult, LedgerCurrentResult, RpcFailure, RpcRequest, RpcResponse, SubmitResult, TxResult,
};

const SUCCESS: &str = "tesSUCCESS";

/// Configuration for the XRPL client.
#[derive(Debug, Clone)]
pub struct XrplConfig {
    /// rippled JSON-RPC endpoint.
    pub rpc_url: String,
    /// Faucet base URL; `/accounts` is appended.
    pub faucet_url: String,
    /// Bound on each HTTP request, connect through body.
    pub timeout: Duration,
    /// Delay between `tx` polls while waiting for validation.
    pub poll_interval: Duration,
    /// Ledgers a payment may wait for before it expires.
    pub ledger_offset: u32,
    /// Bound on a whole payment, preparation through validation.
    pub payment_timeout: Duration,
}

impl XrplConfig {
    pub fn new(rpc_url: impl Into<String>, faucet_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            faucet_url: faucet_url.into(),
            timeout: Duration::from_secs(10),
            poll_interval: Duration::from_secs(1),
            ledger_offset: 20,
            payment_timeout: Duration::from_secs(25),
        }
    }

    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(&config.rpc_url, &config.faucet_url)
            .with_timeout(config.timeout())
            .with_poll_interval(config.poll_interval())
            .with_ledger_offset(config.ledger_offset)
            .with_payment_timeout(config.payment_timeout())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_ledger_offset(mut self, ledger_offset: u32) -> Self {
        self.ledger_offset = ledger_offset;
        self
    }

    pub fn with_payment_timeout(mut self, payment_timeout: Duration) -> Self {
        self.payment_timeout = payment_timeout;
        self
    }
}

pub struct XrplClient {
    config: XrplConfig,
    client: Client,
}

impl XrplClient {
    pub fn new(config: XrplConfig) -> Result<Self, LedgerError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LedgerError::Unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Calls one JSON-RPC method and returns its checked `result`.
    async fn rpc(&self, method: &str, params: Value) -> Result<Value, RpcCallError> {
        let response = self
            .client
            .post(&self.config.rpc_url)
            .json(&RpcRequest {
                method,
                params: [params],
            })
            .send()
            .await
            .map_err(|e| RpcCallError::Transport(transport_error(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RpcCallError::Transport(LedgerError::Unavailable(format!(
                "{} returned {}: {}",
                method, status, body
            ))));
        }

        let body: RpcResponse = response.json().await.map_err(|e| {
            RpcCallError::Transport(LedgerError::Protocol(format!(
                "{} response unreadable: {}",
                method, e
            )))
        })?;

        check_result(body.result).map_err(RpcCallError::Rpc)
    }

    async fn rpc_as<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, RpcCallError> {
        let result = self.rpc(method, params).await?;
        serde_json::from_value(result).map_err(|e| {
            RpcCallError::Transport(LedgerError::Protocol(format!(
                "{} result has unexpected shape: {}",
                method, e
            )))
        })
    }

    async fn current_ledger(&self) -> Result<u64, LedgerError> {
        let current: LedgerCurrentResult = self
            .rpc_as("ledger_current", json!({}))
            .await
            .map_err(RpcCallError::into_ledger_error)?;
        Ok(current.ledger_current_index)
    }

    async fn next_sequence(&self, account: &str) -> Result<u32, LedgerError> {
        let info: AccountSequenceResult = self
            .rpc_as(
                "account_info",
                json!({ "account": account, "ledger_index": "current", "strict": true }),
            )
            .await
            .map_err(RpcCallError::into_ledger_error)?;
        Ok(info.account_data.sequence)
    }

    async fn fee(&self) -> Result<u64, LedgerError> {
        let fee: FeeResult = self
            .rpc_as("fee", json!({}))
            .await
            .map_err(RpcCallError::into_ledger_error)?;
        fee.drops
            .to_offer()
            .ok_or_else(|| LedgerError::Protocol("fee levels are not whole drops".to_string()))
    }

    /// Fills in sequence, fee and expiry, then signs. Nothing is submitted.
    async fn prepare(
        &self,
        keypair: &Keypair,
        payment: &PaymentRequest,
    ) -> Result<SignedTransaction, LedgerError> {
        let destination = decode_address(&payment.destination)?;
        let amount_drops = payment.amount.drops();
        if amount_drops > MAX_DROPS {
            return Err(LedgerError::InvalidInput(format!(
                "{} exceeds the ledger's maximum amount",
                payment.amount
            )));
        }

        let account = keypair.classic_address();
        let sequence = self.next_sequence(&account).await?;
        let fee_drops = self.fee().await?;
        let current = self.current_ledger().await?;
        let last_ledger_sequence = u32::try_from(current + u64::from(self.config.ledger_offset))
            .map_err(|_| LedgerError::Protocol(format!("ledger index {} out of range", current)))?;

        let tx = Payment {
            account: *keypair.account_id(),
            destination,
            amount_drops,
            fee_drops,
            sequence,
            last_ledger_sequence,
            signing_pub_key: keypair.public_key().to_vec(),
        };
        Ok(tx.sign(keypair)?)
    }

    async fn submit_and_wait(&self, signed: &SignedTransaction) -> Result<PaymentOutcome, LedgerError> {
        let submitted: SubmitResult = self
            .rpc_as("submit", json!({ "tx_blob": signed.tx_blob }))
            .await
            .map_err(RpcCallError::into_ledger_error)?;

        if is_final_rejection(&submitted.engine_result) {
            return Err(LedgerError::Rejected {
                message: submitted
                    .engine_result_message
                    .unwrap_or_else(|| submitted.engine_result.clone()),
                code: submitted.engine_result,
            });
        }

        tracing::info!(
            hash = %signed.hash,
            engine_result = %submitted.engine_result,
            last_ledger = signed.last_ledger_sequence,
            "payment submitted"
        );
        self.wait_for_validation(&signed.hash, u64::from(signed.last_ledger_sequence))
            .await
    }

    /// Polls `tx` until the transaction is validated or `last_ledger` passes.
    async fn wait_for_validation(
        &self,
        hash: &str,
        last_ledger: u64,
    ) -> Result<PaymentOutcome, LedgerError> {
        loop {
            match self
                .rpc_as::<TxResult>("tx", json!({ "transaction": hash, "binary": false }))
                .await
            {
                Ok(tx) if tx.validated => {
                    let result = tx
                        .meta
                        .map(|m| m.transaction_result)
                        .ok_or_else(|| LedgerError::Protocol("validated tx without meta".to_string()))?;
                    if result != SUCCESS {
                        return Err(LedgerError::Rejected {
                            code: result,
                            message: format!("transaction {} failed in ledger", hash),
                        });
                    }
                    return Ok(PaymentOutcome {
                        hash: hash.to_string(),
                        result,
                        ledger_index: tx.ledger_index,
                        validated: true,
                    });
                }
                Ok(_) => {}
                Err(RpcCallError::Rpc(f)) if f.error == "txnNotFound" => {}
                Err(e) => return Err(e.into_ledger_error()),
            }

            let current = self.current_ledger().await?;
            if current > last_ledger {
                return Err(LedgerError::SubmissionFailed(format!(
                    "transaction {} not validated by ledger {}",
                    hash, last_ledger
                )));
            }
            tracing::debug!(%hash, current, last_ledger, "waiting for validation");
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}

/// Outcome of one RPC call before it is classified for a given method.
enum RpcCallError {
    Transport(LedgerError),
    Rpc(RpcFailure),
}

impl RpcCallError {
    fn into_ledger_error(self) -> LedgerError {
        match self {
            RpcCallError::Transport(e) => e,
            RpcCallError::Rpc(f) => match f.error.as_str() {
                "actNotFound" | "srcActNotFound" => LedgerError::AccountNotFound(f.message),
                "actMalformed" | "invalidParams" | "srcActMalformed" | "dstActMalformed" => {
                    LedgerError::InvalidInput(f.message)
                }
                _ => LedgerError::Protocol(format!("{}: {}", f.error, f.message)),
            },
        }
    }
}

fn transport_error(e: reqwest::Error) -> LedgerError {
    if e.is_timeout() {
        LedgerError::Unavailable(format!("request timed out: {}", e))
    } else if e.is_connect() {
        LedgerError::Unavailable(format!("Connection failed: {}", e))
    } else {
        LedgerError::Unavailable(e.to_string())
    }
}

#[async_trait]
impl LedgerClient for XrplClient {
    async fn generate_faucet_wallet(&self) -> Result<WalletAccount, LedgerError> {
        let url = format!("{}/accounts", self.config.faucet_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&json!({}))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::Unavailable(format!(
                "faucet returned {}: {}",
                status, body
            )));
        }

        let body: FaucetResponse = response
            .json()
            .await
            .map_err(|e| LedgerError::Protocol(format!("faucet response unreadable: {}", e)))?;

        let classic_address = body
            .account
            .address()
            .ok_or_else(|| LedgerError::Protocol("faucet response has no address".to_string()))?
            .to_string();
        let seed = body.seed.or(body.account.secret).map(SecretString::new);
        let balance = body.balance.map(|b| match b {
            Value::String(s) => s,
            other => other.to_string(),
        });

        tracing::info!(account = %classic_address, "faucet wallet funded");
        Ok(WalletAccount {
            classic_address,
            public_key: body.account.public_key,
            seed,
            balance,
        })
    }

    async fn wallet_from_seed(&self, seed: &SecretString) -> Result<WalletAccount, LedgerError> {
        let keypair = Keypair::from_seed(seed.expose_secret())?;
        Ok(WalletAccount {
            classic_address: keypair.classic_address(),
            public_key: Some(keypair.public_key_hex()),
            seed: None,
            balance: None,
        })
    }

    async fn account_info(&self, account: &str) -> Result<AccountInfo, LedgerError> {
        let info: AccountInfoResult = self
            .rpc_as(
                "account_info",
                json!({ "account": account, "ledger_index": "validated", "strict": true }),
            )
            .await
            .map_err(RpcCallError::into_ledger_error)?;

        Ok(AccountInfo::from_account_data(info.account_data, info.ledger_index))
    }

    async fn send_payment(&self, payment: &PaymentRequest) -> Result<PaymentOutcome, LedgerError> {
        let deadline = Instant::now() + self.config.payment_timeout;
        let keypair = Keypair::from_seed(payment.seed.expose_secret())?;

        let signed = timeout_at(deadline, self.prepare(&keypair, payment))
            .await
            .map_err(|_| LedgerError::Unavailable("timed out preparing payment".to_string()))??;

        // From here the transaction may be on the network, so a timeout
        // reports its hash.
        match timeout_at(deadline, self.submit_and_wait(&signed)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(hash = %signed.hash, "payment not validated before deadline");
                Err(LedgerError::NotValidated { hash: signed.hash })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wallet::XrpAmount;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    /// secp256k1 seed of the well-known genesis account.
    const SENDER_SEED: &str = "snoPBrXtMeMyMHUVTgbuqAfg1SUTb";
    const SENDER: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const RECEIVER_SEED: &str = "sEdSKaCy2JT7JaM7v95H9SxkhP9wS2r";

    fn receiver() -> String {
        Keypair::from_seed(RECEIVER_SEED).unwrap().classic_address()
    }

    fn client_with(server: &MockServer, payment_timeout: Duration) -> XrplClient {
        XrplClient::new(
            XrplConfig::new(server.uri(), format!("{}/faucet", server.uri()))
                .with_timeout(Duration::from_secs(2))
                .with_poll_interval(Duration::from_millis(10))
                .with_ledger_offset(3)
                .with_payment_timeout(payment_timeout),
        )
        .unwrap()
    }

    fn client(server: &MockServer) -> XrplClient {
        client_with(server, Duration::from_secs(5))
    }

    async fn mount_rpc(server: &MockServer, rpc_method: &str, result: Value) {
        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(json!({ "method": rpc_method })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": result })))
            .mount(server)
            .await;
    }

    /// Sequence, fee and current ledger for a payment from `SENDER`.
    async fn mount_preparation(server: &MockServer, current: u64) {
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "method": "account_info",
                "params": [{"account": SENDER, "ledger_index": "current"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {"status": "success", "account_data": {"Account": SENDER, "Sequence": 4}}
            })))
            .mount(server)
            .await;
        mount_rpc(
            server,
            "fee",
            json!({"status": "success", "drops": {"base_fee": "10", "open_ledger_fee": "12"}}),
        )
        .await;
        mount_rpc(
            server,
            "ledger_current",
            json!({"status": "success", "ledger_current_index": current}),
        )
        .await;
    }

    async fn mount_submit(server: &MockServer, engine_result: &str) {
        mount_rpc(
            server,
            "submit",
            json!({"status": "success", "engine_result": engine_result}),
        )
        .await;
    }

    fn payment() -> PaymentRequest {
        PaymentRequest::new(
            SecretString::new(SENDER_SEED.to_string()),
            XrpAmount::new(5).unwrap(),
            receiver(),
        )
        .unwrap()
    }

    async fn request_bodies(server: &MockServer) -> Vec<String> {
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| String::from_utf8_lossy(&r.body).into_owned())
            .collect()
    }

    async fn submitted_blob(server: &MockServer) -> String {
        let bodies = request_bodies(server).await;
        let submit = bodies
            .iter()
            .map(|b| serde_json::from_str::<Value>(b).unwrap())
            .find(|b| b["method"] == "submit")
            .expect("submit was called");
        submit["params"][0]["tx_blob"].as_str().unwrap().to_string()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn wallet_is_derived_without_calling_the_node() {
        let server = MockServer::start().await;

        let wallet = client(&server)
            .wallet_from_seed(&SecretString::new(SENDER_SEED.to_string()))
            .await
            .unwrap();

        assert_eq!(wallet.classic_address, SENDER);
        assert!(wallet.public_key.unwrap().starts_with("03"));
        assert!(wallet.seed.is_none());
        assert!(request_bodies(&server).await.is_empty());
    }

    #[tokio::test]
    async fn bad_seed_is_invalid_input() {
        let server = MockServer::start().await;

        let err = client(&server)
            .wallet_from_seed(&SecretString::new("nope".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn account_info_requests_validated_ledger() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "method": "account_info",
                "params": [{"account": SENDER, "ledger_index": "validated"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {
                    "status": "success",
                    "validated": true,
                    "ledger_index": 77,
                    "account_data": {"Account": SENDER, "Balance": "25000000", "Sequence": 4}
                }
            })))
            .mount(&server)
            .await;

        let info = client(&server).account_info(SENDER).await.unwrap();
        assert_eq!(info.account, SENDER);
        assert_eq!(info.balance_drops.as_deref(), Some("25000000"));
        assert_eq!(info.ledger_index, Some(77));
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let server = MockServer::start().await;
        mount_rpc(
            &server,
            "account_info",
            json!({"status": "error", "error": "actNotFound", "error_message": "Account not found."}),
        )
        .await;

        let err = client(&server).account_info(SENDER).await.unwrap_err();
        assert!(matches!(err, LedgerError::AccountNotFound(_)));
    }

    #[tokio::test]
    async fn server_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client(&server).account_info(SENDER).await.unwrap_err();
        assert!(matches!(err, LedgerError::Unavailable(_)));
    }

    #[tokio::test]
    async fn faucet_wallet_returns_seed_and_balance() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/faucet/accounts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "account": {"xAddress": "T7x", "classicAddress": SENDER, "address": SENDER},
                "amount": 100,
                "balance": 100,
                "seed": "sNewSeed"
            })))
            .mount(&server)
            .await;

        let wallet = client(&server).generate_faucet_wallet().await.unwrap();
        assert_eq!(wallet.classic_address, SENDER);
        assert_eq!(wallet.seed.unwrap().expose_secret(), "sNewSeed");
        assert_eq!(wallet.balance.as_deref(), Some("100"));
    }

    #[tokio::test]
    async fn payment_is_signed_locally_and_waits_for_validation() {
        let server = MockServer::start().await;
        mount_preparation(&server, 10).await;
        mount_submit(&server, "tesSUCCESS").await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "tx"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {"status": "success", "validated": false}
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_rpc(
            &server,
            "tx",
            json!({
                "status": "success",
                "validated": true,
                "ledger_index": 12,
                "meta": {"TransactionResult": "tesSUCCESS"}
            }),
        )
        .await;

        let outcome = client(&server).send_payment(&payment()).await.unwrap();
        assert_eq!(outcome.hash.len(), 64);
        assert_eq!(outcome.result, "tesSUCCESS");
        assert_eq!(outcome.ledger_index, Some(12));
        assert!(outcome.validated);

        let blob = submitted_blob(&server).await;
        assert!(blob.starts_with("120000"));
        assert!(blob.contains("2400000004"), "sequence from account_info");
        assert!(blob.contains("201B0000000D"), "last ledger is current + offset");
        assert!(blob.contains("6140000000004C4B40"), "5 XRP in drops");
        assert!(blob.contains("68400000000000000C"), "open ledger fee");

        let polled = request_bodies(&server)
            .await
            .into_iter()
            .any(|b| b.contains(&outcome.hash));
        assert!(polled, "tx is polled by the locally computed hash");
    }

    #[tokio::test]
    async fn seed_never_leaves_the_service() {
        let server = MockServer::start().await;
        mount_preparation(&server, 10).await;
        mount_submit(&server, "tesSUCCESS").await;
        mount_rpc(
            &server,
            "tx",
            json!({"status": "success", "validated": true, "meta": {"TransactionResult": "tesSUCCESS"}}),
        )
        .await;

        let client = client(&server);
        client
            .wallet_from_seed(&SecretString::new(SENDER_SEED.to_string()))
            .await
            .unwrap();
        client.send_payment(&payment()).await.unwrap();

        let bodies = request_bodies(&server).await;
        assert!(!bodies.is_empty());
        for body in bodies {
            assert!(!body.contains(SENDER_SEED), "seed sent in {}", body);
            assert!(!body.contains("secret"), "secret field sent in {}", body);
        }
    }

    #[tokio::test]
    async fn malformed_destination_is_rejected_before_any_call() {
        let server = MockServer::start().await;
        let payment = PaymentRequest::new(
            SecretString::new(SENDER_SEED.to_string()),
            XrpAmount::new(5).unwrap(),
            "rNotARealAddress",
        )
        .unwrap();

        let err = client(&server).send_payment(&payment).await.unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        assert!(request_bodies(&server).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_payment_is_rejected_at_submit() {
        let server = MockServer::start().await;
        mount_preparation(&server, 10).await;
        mount_rpc(
            &server,
            "submit",
            json!({
                "status": "success",
                "engine_result": "temBAD_AMOUNT",
                "engine_result_message": "Can only send positive amounts."
            }),
        )
        .await;

        let err = client(&server).send_payment(&payment()).await.unwrap_err();
        assert!(matches!(err, LedgerError::Rejected { code, .. } if code == "temBAD_AMOUNT"));
    }

    #[tokio::test]
    async fn validated_failure_is_rejected() {
        let server = MockServer::start().await;
        mount_preparation(&server, 10).await;
        mount_submit(&server, "tecUNFUNDED_PAYMENT").await;
        mount_rpc(
            &server,
            "tx",
            json!({"status": "success", "validated": true, "meta": {"TransactionResult": "tecUNFUNDED_PAYMENT"}}),
        )
        .await;

        let err = client(&server).send_payment(&payment()).await.unwrap_err();
        assert!(matches!(err, LedgerError::Rejected { code, .. } if code == "tecUNFUNDED_PAYMENT"));
    }

    #[tokio::test]
    async fn missing_the_ledger_window_is_submission_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "ledger_current"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {"status": "success", "ledger_current_index": 10}
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_preparation(&server, 20).await;
        mount_submit(&server, "tesSUCCESS").await;
        mount_rpc(
            &server,
            "tx",
            json!({"status": "error", "error": "txnNotFound", "error_message": "Transaction not found."}),
        )
        .await;

        let err = client(&server).send_payment(&payment()).await.unwrap_err();
        assert!(matches!(err, LedgerError::SubmissionFailed(_)));
    }

    #[tokio::test]
    async fn slow_validation_gives_up_with_the_hash() {
        let server = MockServer::start().await;
        mount_preparation(&server, 10).await;
        mount_submit(&server, "tesSUCCESS").await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "tx"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(100))
                    .set_body_json(json!({"result": {"status": "success", "validated": false}})),
            )
            .mount(&server)
            .await;

        let started = std::time::Instant::now();
        let err = client_with(&server, Duration::from_millis(300))
            .send_payment(&payment())
            .await
            .unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(2));
        match err {
            LedgerError::NotValidated { hash } => {
                assert_eq!(hash.len(), 64);
                assert!(submitted_blob(&server).await.len() > 200);
            }
            other => panic!("expected NotValidated, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn slow_preparation_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(1))
                    .set_body_json(json!({"result": {"status": "success"}})),
            )
            .mount(&server)
            .await;

        let err = client_with(&server, Duration::from_millis(100))
            .send_payment(&payment())
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::Unavailable(_)));
    }
}
