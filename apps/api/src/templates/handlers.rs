//! Axum route handlers for the Template API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::tone::Category;
use crate::pagination::limit_offset;
use crate::state::AppState;
use crate::templates::models::{CreateTemplate, TemplateRow};
use crate::templates::store::{create_template, get_template, list_templates};

#[derive(Deserialize)]
pub struct ListQuery {
    pub category: Option<Category>,
    pub tone: Option<crate::generation::tone::Tone>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

#[derive(Serialize)]
pub struct CategoryInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// POST /api/v1/templates
pub async fn handle_create(
    State(state): State<AppState>,
    Json(request): Json<CreateTemplate>,
) -> Result<(StatusCode, Json<TemplateRow>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if request.subject_pattern.trim().is_empty() || request.body_pattern.trim().is_empty() {
        return Err(AppError::Validation(
            "subject_pattern and body_pattern cannot be empty".to_string(),
        ));
    }

    let row = create_template(&state.db, &request).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/templates
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<TemplateRow>>, AppError> {
    let (limit, offset) = limit_offset(params.page, params.limit);
    let rows = list_templates(
        &state.db,
        params.category.map(|c| c.as_str()),
        params.tone.map(|t| t.as_str()),
        limit,
        offset,
    )
    .await?;
    Ok(Json(rows))
}

/// GET /api/v1/templates/categories
///
/// Fixed catalog of the five message categories for UI pickers.
pub async fn handle_categories() -> Json<Vec<CategoryInfo>> {
    Json(
        Category::ALL
            .iter()
            .map(|c| CategoryInfo {
                value: c.as_str(),
                label: c.label(),
                description: c.description(),
            })
            .collect(),
    )
}

/// GET /api/v1/templates/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TemplateRow>, AppError> {
    let row = get_template(&state.db, id).await?;
    Ok(Json(row))
}
