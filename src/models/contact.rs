use serde::{Deserialize, Serialize};

/// A message submitted through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Reject blank fields and obviously malformed addresses.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".to_string());
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(format!("'{}' is not a valid email address", email)),
        }
        if self.message.trim().is_empty() {
            return Err("Message is required".to_string());
        }
        Ok(())
    }
}

/// Result of a contact submission: `{ success, data }` or `{ success, error }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn sent(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
