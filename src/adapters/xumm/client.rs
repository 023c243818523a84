//! XUMM client - implementation of SigningClient for the XUMM platform API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};

use crate::config::SigningConfig;
use crate::domain::signin::{PayloadStatus, SignInPayload, SignInRequest};
use crate::ports::{SigningClient, SigningError};

use super::types::{ApiErrorBody, CreatePayloadBody, CreatedPayload, PayloadDetails};

/// Default platform API base.
pub const DEFAULT_BASE_URL: &str = "https://xumm.app/api/v1/platform";

/// Configuration for the XUMM client.
#[derive(Debug, Clone)]
pub struct XummConfig {
    api_key: SecretString,
    api_secret: SecretString,
    pub base_url: String,
    pub timeout: Duration,
}

impl XummConfig {
    pub fn new(api_key: SecretString, api_secret: SecretString) -> Self {
        Self {
            api_key,
            api_secret,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn from_config(config: &SigningConfig) -> Self {
        Self::new(config.api_key.clone(), config.api_secret.clone())
            .with_base_url(&config.base_url)
            .with_timeout(config.timeout())
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct XummClient {
    config: XummConfig,
    client: Client,
}

impl XummClient {
    pub fn new(config: XummConfig) -> Result<Self, SigningError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SigningError::Unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("X-API-Key", self.config.api_key.expose_secret())
            .header("X-API-Secret", self.config.api_secret.expose_secret())
            .header("Content-Type", "application/json")
    }

    /// Maps non-success statuses; `not_found` names what a 404 refers to.
    async fn check_status(response: Response, not_found: &str) -> Result<Response, SigningError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let reference = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .map(|b| {
                format!(
                    "{} (code {})",
                    b.error.reference.unwrap_or_default(),
                    b.error.code.unwrap_or_default()
                )
            })
            .unwrap_or(body);

        match status {
            StatusCode::NOT_FOUND => Err(SigningError::NotFound(not_found.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SigningError::Unauthorized),
            s if s.is_server_error() => Err(SigningError::Unavailable(format!(
                "Server error {}: {}",
                s, reference
            ))),
            s => Err(SigningError::Api {
                status: s.as_u16(),
                message: reference,
            }),
        }
    }
}

fn transport_error(e: reqwest::Error) -> SigningError {
    if e.is_timeout() {
        SigningError::Unavailable(format!("request timed out: {}", e))
    } else if e.is_connect() {
        SigningError::Unavailable(format!("Connection failed: {}", e))
    } else {
        SigningError::Unavailable(e.to_string())
    }
}

#[async_trait]
impl SigningClient for XummClient {
    async fn create_payload(&self, request: &SignInRequest) -> Result<SignInPayload, SigningError> {
        let response = self
            .authorized(self.client.post(self.url("payload")))
            .json(&CreatePayloadBody::from(request))
            .send()
            .await
            .map_err(transport_error)?;
        let response = Self::check_status(response, "payload").await?;

        let created: CreatedPayload = response
            .json()
            .await
            .map_err(|e| SigningError::Protocol(format!("Failed to parse payload: {}", e)))?;

        tracing::debug!(payload_uuid = %created.uuid, "payload created");
        Ok(created.into())
    }

    async fn get_payload(&self, uuid: &str) -> Result<PayloadStatus, SigningError> {
        let response = self
            .authorized(self.client.get(self.url(&format!("payload/{}", uuid))))
            .send()
            .await
            .map_err(transport_error)?;
        let response = Self::check_status(response, uuid).await?;

        let details: PayloadDetails = response
            .json()
            .await
            .map_err(|e| SigningError::Protocol(format!("Failed to parse payload: {}", e)))?;

        if !details.meta.exists {
            return Err(SigningError::NotFound(uuid.to_string()));
        }
        Ok(details.into())
    }
}
