//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::analyzer::Analysis;
use crate::generation::generator::{generate_communication, GenerationRequest};
use crate::generation::tone::{Category, Tone};
use crate::state::AppState;
use crate::templates::models::TemplateSkeleton;
use crate::templates::store::{get_template, record_template_use};

/// Request body for POST /api/v1/messages/generate.
#[derive(Debug, Deserialize)]
pub struct GenerateMessageRequest {
    pub prompt: String,
    #[serde(default)]
    pub tone: Tone,
    pub category: Category,
    pub template_id: Option<Uuid>,
    pub target_audience: Option<String>,
    pub key_points: Option<Vec<String>>,
    pub call_to_action: Option<String>,
    pub company_id: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateMessageResponse {
    pub subject: String,
    pub content: String,
    pub analysis: Analysis,
    pub tokens_used: u32,
}

/// POST /api/v1/messages/generate
///
/// Full generation pipeline: guideline resolution → prompt composition →
/// LLM generate → parse → advisory analysis. Nothing is persisted; saving
/// the result is a separate call.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateMessageRequest>,
) -> Result<Json<GenerateMessageResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }
    if request.company_id.trim().is_empty() {
        return Err(AppError::Validation("company_id cannot be empty".to_string()));
    }

    let template = resolve_template(&state, request.template_id).await?;

    let generation_request = GenerationRequest {
        prompt: request.prompt,
        tone: request.tone,
        category: request.category,
        template,
        target_audience: request.target_audience,
        key_points: request.key_points,
        call_to_action: request.call_to_action,
        company_id: request.company_id,
    };

    let message = generate_communication(
        state.guidelines.as_ref(),
        state.llm.as_ref(),
        &generation_request,
    )
    .await?;

    Ok(Json(GenerateMessageResponse {
        subject: message.subject,
        content: message.body,
        analysis: message.analysis,
        tokens_used: message.tokens_used,
    }))
}

/// Resolves an optional template id to its skeleton and records the use.
/// An unknown id is ignored rather than failing the generation.
async fn resolve_template(
    state: &AppState,
    template_id: Option<Uuid>,
) -> Result<Option<TemplateSkeleton>, AppError> {
    let Some(id) = template_id else {
        return Ok(None);
    };

    match get_template(&state.db, id).await {
        Ok(row) => {
            record_template_use(&state.db, id).await;
            Ok(Some(row.skeleton()))
        }
        Err(AppError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
