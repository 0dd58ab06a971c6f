use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::app::AppState;
use crate::content::queries;
use crate::error::AppError;
use crate::filter::Categories;
use crate::models::project::Project;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    #[serde(default)]
    pub category: Option<String>,
}

/// `GET /api/v1/projects?category=`
pub async fn list_projects_handler(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<Vec<Project>>, AppError> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let projects = queries::list_projects(state.content_repo.as_ref(), category).await?;
    Ok(Json(projects))
}

/// `GET /api/v1/categories`
pub async fn categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Categories>, AppError> {
    Ok(Json(queries::categories(state.content_repo.as_ref()).await?))
}
