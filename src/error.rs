use thiserror::Error;

/// Application-wide error types.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Mail delivery error: {0}")]
    Mail(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Helper conversion from anyhow::Error
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl AppError {
    /// Convert into the error type carried back by Leptos server functions.
    pub fn into_server_fn_error(self) -> leptos::prelude::ServerFnError {
        leptos::prelude::ServerFnError::new(self.to_string())
    }
}
