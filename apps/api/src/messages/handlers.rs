//! Axum route handlers for saved messages, including feedback-driven
//! improvement of an existing message.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::improve_message;
use crate::generation::tone::Category;
use crate::messages::models::{MessageRow, SaveMessage};
use crate::pagination::limit_offset;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub company_id: String,
    pub status: Option<String>,
    pub category: Option<Category>,
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

/// POST /api/v1/messages
pub async fn handle_save(
    State(state): State<AppState>,
    Json(request): Json<SaveMessage>,
) -> Result<(StatusCode, Json<MessageRow>), AppError> {
    for (field, value) in [
        ("title", &request.title),
        ("subject", &request.subject),
        ("content", &request.content),
        ("original_prompt", &request.original_prompt),
        ("company_id", &request.company_id),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
    }

    let row: MessageRow = sqlx::query_as(
        r#"
        INSERT INTO messages
            (id, title, subject, content, original_prompt, tone, category,
             template_used, company_id, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'draft')
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.title)
    .bind(&request.subject)
    .bind(&request.content)
    .bind(&request.original_prompt)
    .bind(request.tone.as_str())
    .bind(request.category.as_str())
    .bind(request.template_used)
    .bind(&request.company_id)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/messages
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<MessageRow>>, AppError> {
    let (limit, offset) = limit_offset(params.page, params.limit);

    let rows: Vec<MessageRow> = sqlx::query_as(
        r#"
        SELECT * FROM messages
        WHERE company_id = $1
          AND ($2::text IS NULL OR status = $2)
          AND ($3::text IS NULL OR category = $3)
        ORDER BY created_at DESC
        LIMIT $4 OFFSET $5
        "#,
    )
    .bind(&params.company_id)
    .bind(params.status.as_deref())
    .bind(params.category.map(|c| c.as_str()))
    .bind(limit)
    .bind(offset)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// GET /api/v1/messages/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageRow>, AppError> {
    let row = fetch_message(&state, id).await?;
    Ok(Json(row))
}

/// DELETE /api/v1/messages/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM messages WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Message {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct ImproveRequest {
    pub feedback: String,
}

#[derive(Serialize)]
pub struct ImproveResponse {
    pub subject: String,
    pub content: String,
}

/// POST /api/v1/messages/:id/improve
///
/// Rewrites a saved message per the feedback, against the company's active
/// guidelines when present. Returns the improved draft without saving it.
pub async fn handle_improve(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<ImproveResponse>, AppError> {
    if request.feedback.trim().is_empty() {
        return Err(AppError::Validation("feedback is required".to_string()));
    }

    let message = fetch_message(&state, id).await?;
    let guidelines = state.guidelines.find_active(&message.company_id).await?;

    let original = format!("SUBJECT: {}\nBODY: {}", message.subject, message.content);
    let improved = improve_message(
        state.llm.as_ref(),
        &original,
        &request.feedback,
        guidelines.as_ref(),
    )
    .await?;

    Ok(Json(ImproveResponse {
        subject: improved.subject,
        content: improved.body,
    }))
}

async fn fetch_message(state: &AppState, id: Uuid) -> Result<MessageRow, AppError> {
    let row: Option<MessageRow> = sqlx::query_as("SELECT * FROM messages WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;
    row.ok_or_else(|| AppError::NotFound(format!("Message {id} not found")))
}
