#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use folio::app::AppState;
use folio::content::repository::ContentRepository;
use folio::content::seed::seeded_repository;
use folio::error::AppError;
use folio::mail::client::{Mailer, OutgoingEmail};
use folio::mail::contact::ContactSettings;

pub const SERVICE_TOKEN: &str = "test-token";

/// Mailer that keeps every message it is asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    /// When set, every send fails with this provider message.
    pub failure: Option<String>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<serde_json::Value, AppError> {
        if let Some(failure) = &self.failure {
            return Err(AppError::Mail(failure.clone()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        Ok(serde_json::json!({ "id": format!("email-{}", sent.len()) }))
    }
}

/// Seeded repository plus the JSON API router built on top of it.
pub struct TestEnv {
    pub router: Router,
    pub repo: Arc<dyn ContentRepository>,
    pub mailer: Option<Arc<RecordingMailer>>,
}

impl TestEnv {
    /// Environment with a working mailer.
    pub fn start() -> Self {
        Self::with_mailer(Some(RecordingMailer::default()))
    }

    /// Environment with no mail delivery configured.
    pub fn without_mailer() -> Self {
        Self::with_mailer(None)
    }

    pub fn with_mailer(mailer: Option<RecordingMailer>) -> Self {
        let repo: Arc<dyn ContentRepository> =
            Arc::new(seeded_repository().expect("Failed to seed repository"));
        let mailer = mailer.map(Arc::new);

        let leptos_options = leptos::prelude::LeptosOptions::builder()
            .output_name("folio")
            .build();

        let app_state = AppState {
            content_repo: repo.clone(),
            mailer: mailer.clone().map(|m| m as Arc<dyn Mailer>),
            contact: ContactSettings {
                from: "Portfolio Contact Form <onboarding@example.dev>".to_string(),
                to: "alex@example.dev".to_string(),
            },
            service_token: SERVICE_TOKEN.to_string(),
            site_url: "https://alex.example.dev".to_string(),
            leptos_options,
        };

        // API routes only, no Leptos SSR
        let router = folio::api::router::router().with_state(app_state);

        Self {
            router,
            repo,
            mailer,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .try_build(self.router.clone())
            .expect("Failed to build TestServer")
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .try_build(self.router.clone())
            .expect("Failed to build TestServer")
    }

    /// Messages handed to the mailer so far.
    pub fn sent_emails(&self) -> Vec<OutgoingEmail> {
        self.mailer
            .as_ref()
            .map(|m| m.sent.lock().unwrap().clone())
            .unwrap_or_default()
    }

    /// Helper: ingest a post via the API.
    pub async fn ingest(
        &self,
        server: &axum_test::TestServer,
        body: serde_json::Value,
    ) -> axum_test::TestResponse {
        let mut body = body;
        if body.get("service_token").is_none() {
            body["service_token"] = serde_json::json!(SERVICE_TOKEN);
        }
        server.post("/api/v1/posts").json(&body).await
    }
}
