use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A fully rendered message ready to hand to the mail provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub reply_to: String,
    pub html: String,
}

/// Trait for transactional mail delivery.
///
/// Abstracted as a trait so tests can use a mock instead of the real provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one message. Returns the provider's response body.
    async fn send(&self, email: &OutgoingEmail) -> Result<serde_json::Value, AppError>;
}

/// Resend-compatible HTTP mailer.
///
/// Only available when the `ssr` feature is enabled.
#[cfg(feature = "ssr")]
pub struct ResendMailer {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[cfg(feature = "ssr")]
impl ResendMailer {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Mail(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<serde_json::Value, AppError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| AppError::Mail(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .unwrap_or(serde_json::Value::Null);

        if !status.is_success() {
            return Err(AppError::Mail(format!(
                "Provider returned {}: {}",
                status, body
            )));
        }

        Ok(body)
    }
}
