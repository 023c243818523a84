//! rippled JSON-RPC wire types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(super) struct RpcRequest<'a> {
    pub method: &'a str,
    pub params: [Value; 1],
}

#[derive(Debug, Deserialize)]
pub(super) struct RpcResponse {
    pub result: Value,
}

/// Failure reported inside a JSON-RPC `result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RpcFailure {
    pub error: String,
    pub message: String,
}

/// Splits a `result` into success or the `error`/`error_message` pair.
pub(super) fn check_result(result: Value) -> Result<Value, RpcFailure> {
    let failed = result.get("status").and_then(Value::as_str) == Some("error")
        || result.get("error").is_some();
    if !failed {
        return Ok(result);
    }
    let error = result
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    let message = result
        .get("error_message")
        .or_else(|| result.get("error_exception"))
        .and_then(Value::as_str)
        .unwrap_or(&error)
        .to_string();
    Err(RpcFailure { error, message })
}

#[derive(Debug, Deserialize)]
pub(super) struct AccountInfoResult {
    pub account_data: Value,
    #[serde(default)]
    pub ledger_index: Option<u64>,
}

/// `account_info` against the current ledger, read for the next sequence.
#[derive(Debug, Deserialize)]
pub(super) struct AccountSequenceResult {
    pub account_data: AccountSequence,
}

#[derive(Debug, Deserialize)]
pub(super) struct AccountSequence {
    #[serde(rename = "Sequence")]
    pub sequence: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct FeeResult {
    pub drops: FeeDrops,
}

/// Fee levels in drops, as decimal strings.
#[derive(Debug, Deserialize)]
pub(super) struct FeeDrops {
    pub base_fee: String,
    pub open_ledger_fee: String,
}

impl FeeDrops {
    /// The fee to offer: the open ledger fee, never below the base fee.
    pub fn to_offer(&self) -> Option<u64> {
        let base = self.base_fee.parse::<u64>().ok()?;
        let open = self.open_ledger_fee.parse::<u64>().ok()?;
        Some(base.max(open))
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct LedgerCurrentResult {
    pub ledger_current_index: u64,
}

#[derive(Debug, Deserialize)]
pub(super) struct SubmitResult {
    pub engine_result: String,
    #[serde(default)]
    pub engine_result_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TxResult {
    #[serde(default)]
    pub validated: bool,
    #[serde(default)]
    pub ledger_index: Option<u64>,
    #[serde(default)]
    pub meta: Option<TxMeta>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TxMeta {
    #[serde(rename = "TransactionResult")]
    pub transaction_result: String,
}

/// Body returned by the test-network faucet.
#[derive(Debug, Deserialize)]
pub(super) struct FaucetResponse {
    pub account: FaucetAccount,
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub balance: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FaucetAccount {
    #[serde(rename = "classicAddress", default)]
    pub classic_address: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(rename = "publicKey", default)]
    pub public_key: Option<String>,
}

impl FaucetAccount {
    /// The classic address, under whichever key the faucet used.
    pub fn address(&self) -> Option<&str> {
        self.classic_address.as_deref().or(self.address.as_deref())
    }
}

/// Submit results that end the transaction without a ledger entry.
pub(super) fn is_final_rejection(engine_result: &str) -> bool {
    ["tem", "tef", "tel"]
        .iter()
        .any(|prefix| engine_result.starts_with(prefix))
}
