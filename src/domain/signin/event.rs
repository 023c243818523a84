use serde::{Deserialize, Serialize};

/// Queue that receives authentication events.
pub const AUTH_QUEUE_NAME: &str = "user_auth_queue";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthenticationStatus {
    Authenticated,
}

/// Message published once per signed callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationEvent {
    pub user_wallet_address: String,
    pub user_token: Option<String>,
    pub status: AuthenticationStatus,
}

impl AuthenticationEvent {
    pub fn authenticated(wallet_address: impl Into<String>, user_token: Option<String>) -> Self {
        Self {
            user_wallet_address: wallet_address.into(),
            user_token,
            status: AuthenticationStatus::Authenticated,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_serializes_to_queue_shape() {
        let event = AuthenticationEvent::authenticated("rAddr", Some("tok".to_string()));
        let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "user_wallet_address": "rAddr",
                "user_token": "tok",
                "status": "authenticated"
            })
        );
    }

    #[test]
    fn missing_token_serializes_as_null() {
        let event = AuthenticationEvent::authenticated("rAddr", None);
        let value: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert!(value["user_token"].is_null());
    }
}
