use serde::Serialize;

/// Transaction type of a sign-in challenge.
pub const SIGN_IN_TRANSACTION_TYPE: &str = "SignIn";

/// The challenge to hand to the signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInRequest {
    pub transaction_type: String,
    pub pathfinding_fallback: bool,
}

impl SignInRequest {
    /// The fixed sign-in challenge: no transaction body, no path-finding
    /// fallback.
    pub fn sign_in() -> Self {
        Self {
            transaction_type: SIGN_IN_TRANSACTION_TYPE.to_string(),
            pathfinding_fallback: false,
        }
    }
}

/// Assets the end user needs to answer the challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PayloadRefs {
    pub qr_png: String,
    pub qr_matrix: String,
    pub qr_uri_quality_opts: Vec<String>,
    pub websocket_status: Option<String>,
}

/// A challenge created by the signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInPayload {
    pub uuid: String,
    /// Where the user goes next to sign (`next.always`).
    pub next: String,
    pub refs: PayloadRefs,
}

/// Where a challenge stands, as reported by the signer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PayloadStatus {
    pub uuid: String,
    pub resolved: bool,
    pub signed: bool,
    pub cancelled: bool,
    pub expired: bool,
    pub txid: Option<String>,
    pub account: Option<String>,
    pub user_token: Option<String>,
}

impl PayloadStatus {
    /// True once the user has answered, one way or the other.
    pub fn is_final(&self) -> bool {
        self.resolved || self.cancelled || self.expired
    }
}
