use secrecy::SecretString;
use serde::Serialize;
use serde_json::Value;

/// A wallet derived from a seed or freshly funded by the test faucet.
#[derive(Debug, Clone)]
pub struct WalletAccount {
    pub classic_address: String,
    /// Not reported by the faucet.
    pub public_key: Option<String>,
    /// Seed behind the wallet. Only echoed back when the caller did not
    /// supply one (a new faucet wallet).
    pub seed: Option<SecretString>,
    /// Starting balance in XRP, reported by the faucet for new wallets.
    pub balance: Option<String>,
}

/// Validated account state as reported by the ledger.
///
/// `data` is the ledger's `account_data` object, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountInfo {
    pub account: String,
    pub balance_drops: Option<String>,
    pub sequence: Option<u64>,
    pub ledger_index: Option<u64>,
    pub data: Value,
}

impl AccountInfo {
    /// Builds account info from the ledger's `account_data` object.
    pub fn from_account_data(data: Value, ledger_index: Option<u64>) -> Self {
        let account = data
            .get("Account")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let balance_drops = data
            .get("Balance")
            .and_then(Value::as_str)
            .map(str::to_string);
        let sequence = data.get("Sequence").and_then(Value::as_u64);

        Self {
            account,
            balance_drops,
            sequence,
            ledger_index,
            data,
        }
    }
}
