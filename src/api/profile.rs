use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::content::queries;
use crate::error::AppError;
use crate::models::profile::Profile;

/// `GET /api/v1/profile`
pub async fn profile_handler(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    Ok(Json(queries::profile(state.content_repo.as_ref()).await?))
}
