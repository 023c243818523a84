//! HTTP DTOs for XRPL wallet endpoints.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::domain::wallet::WalletAccount;

/// Header carrying the seed of an existing wallet.
pub const WALLET_SEED_HEADER: &str = "X-Wallet-Seed";

#[derive(Debug, Clone, Deserialize)]
pub struct SendXrpRequest {
    pub seed: String,
    /// Whole XRP.
    pub amount: i64,
    pub destination: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletResponse {
    pub classic_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// Present only for newly generated wallets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
}

impl From<WalletAccount> for WalletResponse {
    fn from(wallet: WalletAccount) -> Self {
        Self {
            classic_address: wallet.classic_address,
            public_key: wallet.public_key,
            seed: wallet.seed.map(|s| s.expose_secret().clone()),
            balance: wallet.balance,
        }
    }
}
