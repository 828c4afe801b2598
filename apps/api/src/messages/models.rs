use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::generation::tone::{Category, Tone};

/// A saved message. Persisting is a deliberate, separate step after
/// generation — the pipeline itself never writes here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MessageRow {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub content: String,
    pub original_prompt: String,
    pub tone: String,
    pub category: String,
    pub template_used: Option<Uuid>,
    pub company_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SaveMessage {
    pub title: String,
    pub subject: String,
    pub content: String,
    pub original_prompt: String,
    pub tone: Tone,
    pub category: Category,
    pub template_used: Option<Uuid>,
    pub company_id: String,
}
