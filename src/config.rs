use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::mail::contact::ContactSettings;

/// Runtime settings for the server.
///
/// Sources, later ones overriding earlier ones:
/// 1. built-in defaults
/// 2. `folio.toml` in the working directory, if present
/// 3. `FOLIO_*` environment variables (`FOLIO_MAIL__TO`, ...)
///
/// `RESEND_API_KEY` is honoured as a fallback for the mail API key.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Public base URL, used for share links.
    pub site_url: String,
    /// Shared secret for the post ingest/delete API.
    pub service_token: String,
    pub mail: MailConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Provider endpoint for sending one email.
    pub endpoint: String,
    pub from: String,
    pub to: String,
    /// Without a key, contact submissions are logged and reported as failed.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl MailConfig {
    pub fn contact_settings(&self) -> ContactSettings {
        ContactSettings {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

impl SiteConfig {
    /// Builder pre-filled with the defaults.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("site_url", "http://127.0.0.1:3000")?
            .set_default("service_token", "dev-token")?
            .set_default("mail.endpoint", "https://api.resend.com/emails")?
            .set_default("mail.from", "Portfolio Contact Form <onboarding@resend.dev>")?
            .set_default("mail.to", "hello@example.dev")
    }

    /// Load from defaults, `folio.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::with_name("folio").required(false))
            .add_source(
                Environment::with_prefix("FOLIO")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        if config.mail.api_key.is_none() {
            config.mail.api_key = std::env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty());
        }

        if config.service_token == "dev-token" {
            tracing::warn!("Using the default service token; set FOLIO_SERVICE_TOKEN in production");
        }

        Ok(config)
    }
}
