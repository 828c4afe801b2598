//! Template persistence.

use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::templates::models::{CreateTemplate, TemplateRow};

pub async fn create_template(
    pool: &PgPool,
    request: &CreateTemplate,
) -> Result<TemplateRow, AppError> {
    let row: TemplateRow = sqlx::query_as(
        r#"
        INSERT INTO templates
            (id, name, category, description, subject_pattern, body_pattern,
             tone, is_public, usage_count)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 0)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.name)
    .bind(request.category.as_str())
    .bind(&request.description)
    .bind(&request.subject_pattern)
    .bind(&request.body_pattern)
    .bind(request.tone.as_str())
    .bind(request.is_public)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn get_template(pool: &PgPool, id: Uuid) -> Result<TemplateRow, AppError> {
    let row: Option<TemplateRow> = sqlx::query_as("SELECT * FROM templates WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))
}

/// Most-used first, then newest — the ordering the template picker shows.
pub async fn list_templates(
    pool: &PgPool,
    category: Option<&str>,
    tone: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<Vec<TemplateRow>, AppError> {
    let rows: Vec<TemplateRow> = sqlx::query_as(
        r#"
        SELECT * FROM templates
        WHERE is_public
          AND ($1::text IS NULL OR category = $1)
          AND ($2::text IS NULL OR tone = $2)
        ORDER BY usage_count DESC, created_at DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(category)
    .bind(tone)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Bumps a template's usage counter. Best-effort bookkeeping: a failure is
/// logged and never blocks the generation that used the template.
pub async fn record_template_use(pool: &PgPool, id: Uuid) {
    let result = sqlx::query("UPDATE templates SET usage_count = usage_count + 1 WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await;
    if let Err(e) = result {
        warn!("Failed to record usage for template {id}: {e}");
    }
}
