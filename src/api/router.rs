use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{contact, posts, profile, projects};
use crate::app::AppState;

/// JSON API routes. Pages and static files are added on top in `main`.
pub fn router() -> Router<AppState> {
    let v1 = Router::new()
        .route(
            "/posts",
            get(posts::list_posts_handler).post(posts::ingest_post_handler),
        )
        .route(
            "/posts/{slug}",
            get(posts::get_post_handler).delete(posts::delete_post_handler),
        )
        .route("/posts/{slug}/similar", get(posts::similar_posts_handler))
        .route("/projects", get(projects::list_projects_handler))
        .route("/categories", get(projects::categories_handler))
        .route("/profile", get(profile::profile_handler))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/api/contact", post(contact::contact_handler))
        .nest("/api/v1", v1)
        .layer(TraceLayer::new_for_http())
}
