//! Guideline persistence — the resolver trait the generation core consumes,
//! plus the Postgres write path that maintains the single-active invariant.

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::guidelines::models::{BrandGuidelines, GuidelineRow, ToneGuidance};

/// Read capability used by the generation pipeline. Absence of an active
/// document is a normal result, never an error.
#[async_trait]
pub trait GuidelineStore: Send + Sync {
    async fn find_active(&self, company_id: &str) -> Result<Option<BrandGuidelines>, AppError>;
}

/// Postgres-backed guideline store.
#[derive(Clone)]
pub struct PgGuidelineStore {
    pool: PgPool,
}

impl PgGuidelineStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuidelineStore for PgGuidelineStore {
    /// Newest active document wins if the single-active invariant was ever
    /// violated out-of-band.
    async fn find_active(&self, company_id: &str) -> Result<Option<BrandGuidelines>, AppError> {
        let row = fetch_active_row(&self.pool, company_id).await?;
        Ok(row.map(GuidelineRow::into_guidelines))
    }
}

pub async fn fetch_active_row(
    pool: &PgPool,
    company_id: &str,
) -> Result<Option<GuidelineRow>, AppError> {
    let row: Option<GuidelineRow> = sqlx::query_as(
        "SELECT * FROM guidelines WHERE company_id = $1 AND is_active ORDER BY created_at DESC LIMIT 1",
    )
    .bind(company_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

// ────────────────────────────────────────────────────────────────────────────
// Write path
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateGuidelines {
    pub name: String,
    pub description: String,
    pub content: String,
    #[serde(default)]
    pub tone_guidance: ToneGuidance,
    #[serde(default)]
    pub personality_traits: Vec<String>,
    #[serde(default)]
    pub preferred_vocabulary: Vec<String>,
    #[serde(default)]
    pub avoid_vocabulary: Vec<String>,
    pub company_id: String,
}

/// Creates a new active guideline document for a company.
///
/// Runs in a transaction: all currently-active documents for the company are
/// deactivated first, so at most one active document exists at any time.
pub async fn create_guidelines(
    pool: &PgPool,
    request: &CreateGuidelines,
) -> Result<GuidelineRow, AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE guidelines SET is_active = false WHERE company_id = $1 AND is_active")
        .bind(&request.company_id)
        .execute(&mut *tx)
        .await?;

    let row: GuidelineRow = sqlx::query_as(
        r#"
        INSERT INTO guidelines
            (id, name, description, content, tone_guidance,
             personality_traits, preferred_vocabulary, avoid_vocabulary,
             company_id, is_active, version)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, true, 1)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.name)
    .bind(&request.description)
    .bind(&request.content)
    .bind(sqlx::types::Json(&request.tone_guidance))
    .bind(&request.personality_traits)
    .bind(&request.preferred_vocabulary)
    .bind(&request.avoid_vocabulary)
    .bind(&request.company_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(row)
}

/// Full-document replacement for PUT. `is_active` is optional: omitting it
/// keeps the document's current activation state.
#[derive(Debug, Deserialize)]
pub struct UpdateGuidelines {
    pub name: String,
    pub description: String,
    pub content: String,
    #[serde(default)]
    pub tone_guidance: ToneGuidance,
    #[serde(default)]
    pub personality_traits: Vec<String>,
    #[serde(default)]
    pub preferred_vocabulary: Vec<String>,
    #[serde(default)]
    pub avoid_vocabulary: Vec<String>,
    pub is_active: Option<bool>,
}

/// Applies an update onto an existing row, bumping the version.
fn apply_update(row: &mut GuidelineRow, request: &UpdateGuidelines) {
    row.name = request.name.clone();
    row.description = request.description.clone();
    row.content = request.content.clone();
    row.tone_guidance = sqlx::types::Json(request.tone_guidance.clone());
    row.personality_traits = request.personality_traits.clone();
    row.preferred_vocabulary = request.preferred_vocabulary.clone();
    row.avoid_vocabulary = request.avoid_vocabulary.clone();
    row.is_active = request.is_active.unwrap_or(row.is_active);
    row.version += 1;
}

/// Replaces an existing document's content, incrementing its version.
///
/// If the update flips the document from inactive to active, every other
/// active document for the company is deactivated in the same transaction,
/// preserving the single-active invariant.
pub async fn update_guidelines(
    pool: &PgPool,
    id: Uuid,
    company_id: &str,
    request: &UpdateGuidelines,
) -> Result<GuidelineRow, AppError> {
    let mut tx = pool.begin().await?;

    let existing: Option<GuidelineRow> =
        sqlx::query_as("SELECT * FROM guidelines WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .fetch_optional(&mut *tx)
            .await?;
    let mut row =
        existing.ok_or_else(|| AppError::NotFound(format!("Guidelines {id} not found")))?;

    let was_active = row.is_active;
    apply_update(&mut row, request);

    if row.is_active && !was_active {
        sqlx::query("UPDATE guidelines SET is_active = false WHERE company_id = $1 AND is_active")
            .bind(company_id)
            .execute(&mut *tx)
            .await?;
    }

    let row: GuidelineRow = sqlx::query_as(
        r#"
        UPDATE guidelines
        SET name = $3, description = $4, content = $5, tone_guidance = $6,
            personality_traits = $7, preferred_vocabulary = $8,
            avoid_vocabulary = $9, is_active = $10, version = $11,
            updated_at = now()
        WHERE id = $1 AND company_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(company_id)
    .bind(&row.name)
    .bind(&row.description)
    .bind(&row.content)
    .bind(&row.tone_guidance)
    .bind(&row.personality_traits)
    .bind(&row.preferred_vocabulary)
    .bind(&row.avoid_vocabulary)
    .bind(row.is_active)
    .bind(row.version)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(row)
}

/// Activates an existing document, deactivating every other active document
/// for the same company in the same transaction.
pub async fn activate_guidelines(
    pool: &PgPool,
    id: Uuid,
    company_id: &str,
) -> Result<GuidelineRow, AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE guidelines SET is_active = false WHERE company_id = $1 AND is_active")
        .bind(company_id)
        .execute(&mut *tx)
        .await?;

    let row: Option<GuidelineRow> = sqlx::query_as(
        "UPDATE guidelines SET is_active = true, updated_at = now() \
         WHERE id = $1 AND company_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(company_id)
    .fetch_optional(&mut *tx)
    .await?;

    let row = row.ok_or_else(|| AppError::NotFound(format!("Guidelines {id} not found")))?;

    tx.commit().await?;
    Ok(row)
}

pub async fn get_guidelines(
    pool: &PgPool,
    id: Uuid,
    company_id: &str,
) -> Result<GuidelineRow, AppError> {
    let row: Option<GuidelineRow> =
        sqlx::query_as("SELECT * FROM guidelines WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .fetch_optional(pool)
            .await?;
    row.ok_or_else(|| AppError::NotFound(format!("Guidelines {id} not found")))
}

pub async fn list_guidelines(
    pool: &PgPool,
    company_id: &str,
    active_only: bool,
    limit: i64,
    offset: i64,
) -> Result<Vec<GuidelineRow>, AppError> {
    let rows: Vec<GuidelineRow> = sqlx::query_as(
        r#"
        SELECT * FROM guidelines
        WHERE company_id = $1 AND (NOT $2 OR is_active)
        ORDER BY version DESC, created_at DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(company_id)
    .bind(active_only)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
