use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::generation::tone::{Category, Tone};

/// The subject/body shape a template lends to a generation request. Shown to
/// the model verbatim as a starting point; placeholders are not filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSkeleton {
    pub subject_pattern: String,
    pub body_pattern: String,
}

/// A stored reusable message template.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TemplateRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: String,
    pub subject_pattern: String,
    pub body_pattern: String,
    pub tone: String,
    pub is_public: bool,
    pub usage_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TemplateRow {
    pub fn skeleton(&self) -> TemplateSkeleton {
        TemplateSkeleton {
            subject_pattern: self.subject_pattern.clone(),
            body_pattern: self.body_pattern.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTemplate {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub subject_pattern: String,
    pub body_pattern: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
}

fn default_is_public() -> bool {
    true
}
