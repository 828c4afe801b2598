//! Axum route handlers for the Guidelines API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::guidelines::models::GuidelineRow;
use crate::guidelines::store::{
    activate_guidelines, create_guidelines, fetch_active_row, get_guidelines, list_guidelines,
    update_guidelines, CreateGuidelines, UpdateGuidelines,
};
use crate::pagination::limit_offset;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompanyQuery {
    pub company_id: String,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub company_id: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_active() -> bool {
    true
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// POST /api/v1/guidelines
///
/// Creates a new guideline document and makes it the single active one for
/// the company.
pub async fn handle_create(
    State(state): State<AppState>,
    Json(request): Json<CreateGuidelines>,
) -> Result<(StatusCode, Json<GuidelineRow>), AppError> {
    if request.company_id.trim().is_empty() {
        return Err(AppError::Validation("company_id cannot be empty".to_string()));
    }
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let row = create_guidelines(&state.db, &request).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/guidelines
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<GuidelineRow>>, AppError> {
    let (limit, offset) = limit_offset(params.page, params.limit);
    let rows = list_guidelines(&state.db, &params.company_id, params.active, limit, offset).await?;
    Ok(Json(rows))
}

/// GET /api/v1/guidelines/active
///
/// Returns the single active guideline document, or 404 — absence is normal
/// for companies that have not set guidelines up yet.
pub async fn handle_get_active(
    State(state): State<AppState>,
    Query(params): Query<CompanyQuery>,
) -> Result<Json<GuidelineRow>, AppError> {
    let row = fetch_active_row(&state.db, &params.company_id).await?;
    row.map(Json).ok_or_else(|| {
        AppError::NotFound("No active guidelines found for your company".to_string())
    })
}

/// GET /api/v1/guidelines/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<CompanyQuery>,
) -> Result<Json<GuidelineRow>, AppError> {
    let row = get_guidelines(&state.db, id, &params.company_id).await?;
    Ok(Json(row))
}

/// PUT /api/v1/guidelines/:id
///
/// Replaces the document and bumps its version. Activation via this route
/// follows the same single-active rule as POST /:id/activate.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<CompanyQuery>,
    Json(request): Json<UpdateGuidelines>,
) -> Result<Json<GuidelineRow>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    let row = update_guidelines(&state.db, id, &params.company_id, &request).await?;
    Ok(Json(row))
}

/// POST /api/v1/guidelines/:id/activate
pub async fn handle_activate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<CompanyQuery>,
) -> Result<Json<GuidelineRow>, AppError> {
    let row = activate_guidelines(&state.db, id, &params.company_id).await?;
    Ok(Json(row))
}
