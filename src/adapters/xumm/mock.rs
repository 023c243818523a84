//! Mock signing client for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::signin::{PayloadRefs, PayloadStatus, SignInPayload, SignInRequest};
use crate::ports::{SigningClient, SigningError};

/// Issues payloads with random uuids and remembers them, so their status
/// can be read back. `resolve` simulates the user answering.
#[derive(Debug, Clone, Default)]
pub struct MockSigningClient {
    payloads: Arc<Mutex<HashMap<String, PayloadStatus>>>,
    unavailable: Arc<Mutex<bool>>,
}

impl MockSigningClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().expect("signer lock poisoned") = unavailable;
    }

    /// Marks a payload answered, signed or not.
    pub fn resolve(&self, uuid: &str, signed: bool, txid: Option<&str>) {
        if let Some(status) = self
            .payloads
            .lock()
            .expect("signer lock poisoned")
            .get_mut(uuid)
        {
            status.resolved = true;
            status.signed = signed;
            status.txid = txid.map(str::to_string);
        }
    }

    fn check_available(&self) -> Result<(), SigningError> {
        if *self.unavailable.lock().expect("signer lock poisoned") {
            return Err(SigningError::Unavailable("mock signer switched off".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SigningClient for MockSigningClient {
    async fn create_payload(&self, _request: &SignInRequest) -> Result<SignInPayload, SigningError> {
        self.check_available()?;
        let uuid = Uuid::new_v4().to_string();
        self.payloads.lock().expect("signer lock poisoned").insert(
            uuid.clone(),
            PayloadStatus {
                uuid: uuid.clone(),
                ..Default::default()
            },
        );

        Ok(SignInPayload {
            next: format!("https://xumm.app/sign/{}", uuid),
            refs: PayloadRefs {
                qr_png: format!("https://xumm.app/sign/{}_q.png", uuid),
                qr_matrix: format!("https://xumm.app/sign/{}_q.json", uuid),
                qr_uri_quality_opts: vec!["m".to_string(), "q".to_string(), "h".to_string()],
                websocket_status: Some(format!("wss://xumm.app/sign/{}", uuid)),
            },
            uuid,
        })
    }

    async fn get_payload(&self, uuid: &str) -> Result<PayloadStatus, SigningError> {
        self.check_available()?;
        self.payloads
            .lock()
            .expect("signer lock poisoned")
            .get(uuid)
            .cloned()
            .ok_or_else(|| SigningError::NotFound(uuid.to_string()))
    }
}
