#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use folio::app::{shell, App, AppState};
    use folio::config::SiteConfig;
    use folio::content::repository::ContentRepository;
    use folio::mail::client::{Mailer, ResendMailer};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use std::sync::Arc;
    use tower_http::services::ServeDir;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting folio server...");

    let config = SiteConfig::load().context("Failed to load configuration")?;

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None).context("Failed to read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    let content_repo: Arc<dyn ContentRepository> = Arc::new(
        folio::content::seed::seeded_repository().context("Failed to load built-in content")?,
    );

    let mailer: Option<Arc<dyn Mailer>> = match config.mail.api_key.as_deref() {
        Some(key) => {
            let mailer = ResendMailer::new(&config.mail.endpoint, key)
                .context("Failed to initialize mail client")?;
            tracing::info!("Mail delivery via {}", config.mail.endpoint);
            Some(Arc::new(mailer) as Arc<dyn Mailer>)
        }
        None => {
            tracing::warn!("No mail API key configured, contact messages will not be delivered");
            None
        }
    };

    let app_state = AppState {
        content_repo,
        mailer,
        contact: config.mail.contact_settings(),
        service_token: config.service_token,
        site_url: config.site_url,
        leptos_options: leptos_options.clone(),
    };

    // Generate the Leptos route list for SSR
    let routes = generate_route_list(App);

    let app = folio::api::router::router()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let state = app_state.clone();
                move || provide_context(state.clone())
            },
            {
                let options = leptos_options.clone();
                move || shell(options.clone())
            },
        )
        .fallback_service(ServeDir::new(&site_root))
        .with_state(app_state);

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {}
