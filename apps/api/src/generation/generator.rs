//! Message Generation — orchestrates the full generation pipeline.
//!
//! Flow: resolve active guidelines → compose prompt → LLM generate →
//!       parse SUBJECT:/BODY: → analyze → return transient result.
//!
//! The pipeline holds no state and never persists anything; saving a
//! generated message is a separate, explicit call. Its single hard failure
//! is the primary generation call — guideline absence and analysis failure
//! both degrade without raising.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::analyzer::{analyze, Analysis};
use crate::generation::composer::compose_prompt;
use crate::generation::parser::{parse_subject_body, ParsedMessage};
use crate::generation::prompts::IMPROVEMENT_PROMPT_TEMPLATE;
use crate::generation::tone::{Category, Tone};
use crate::guidelines::models::BrandGuidelines;
use crate::guidelines::store::GuidelineStore;
use crate::llm_client::{TextGenerator, GENERATION_PARAMS, IMPROVEMENT_PARAMS};
use crate::templates::models::TemplateSkeleton;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One generation attempt. Immutable once constructed; the handler builds it
/// after resolving an optional template id to its skeleton.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default)]
    pub tone: Tone,
    pub category: Category,
    pub template: Option<TemplateSkeleton>,
    pub target_audience: Option<String>,
    pub key_points: Option<Vec<String>>,
    pub call_to_action: Option<String>,
    pub company_id: String,
}

/// The pipeline's output. Transient and caller-owned.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedMessage {
    pub subject: String,
    pub body: String,
    pub analysis: Analysis,
    pub tokens_used: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full generation pipeline for one request.
///
/// Fails with `AppError::Generation` if and only if the primary generation
/// call fails; analysis always resolves to a well-formed value.
pub async fn generate_communication(
    guidelines: &dyn GuidelineStore,
    llm: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<GeneratedMessage, AppError> {
    let resolved = resolve_active_guidelines(guidelines, &request.company_id).await;
    info!(
        "Generating {} message for company {} (guidelines: {})",
        request.category.as_str(),
        request.company_id,
        if resolved.is_some() { "active" } else { "none" }
    );

    let composed = compose_prompt(request, resolved.as_ref());

    let completion = llm
        .complete(
            Some(&composed.system_prompt),
            &composed.user_prompt,
            GENERATION_PARAMS,
        )
        .await
        .map_err(|e| AppError::Generation(format!("Generation LLM call failed: {e}")))?;

    let parsed = parse_subject_body(&completion.text);
    let analysis = analyze(llm, &parsed.body, resolved.as_ref()).await;

    Ok(GeneratedMessage {
        subject: parsed.subject,
        body: parsed.body,
        analysis,
        tokens_used: completion.tokens_used,
    })
}

/// Looks up the active guideline document for a company.
///
/// Empty company id short-circuits to `None` without querying. A store
/// failure also degrades to `None` — the prompt simply loses its brand
/// block, and the only hard failure the pipeline surfaces stays the
/// generation call itself.
async fn resolve_active_guidelines(
    store: &dyn GuidelineStore,
    company_id: &str,
) -> Option<BrandGuidelines> {
    if company_id.trim().is_empty() {
        return None;
    }
    match store.find_active(company_id).await {
        Ok(guidelines) => guidelines,
        Err(e) => {
            warn!("Guideline lookup failed for company {company_id}, proceeding without: {e}");
            None
        }
    }
}

/// Rewrites an existing message per user feedback, keeping the
/// SUBJECT:/BODY: structure. Same failure contract as generation: the
/// provider error surfaces, nothing is fabricated.
pub async fn improve_message(
    llm: &dyn TextGenerator,
    original: &str,
    feedback: &str,
    guidelines: Option<&BrandGuidelines>,
) -> Result<ParsedMessage, AppError> {
    let guidelines_block = guidelines
        .map(|g| format!("Company Guidelines: {}", g.content))
        .unwrap_or_default();

    let prompt = IMPROVEMENT_PROMPT_TEMPLATE
        .replace("{original}", original)
        .replace("{feedback}", feedback)
        .replace("{guidelines_block}", &guidelines_block);

    let completion = llm
        .complete(None, &prompt, IMPROVEMENT_PARAMS)
        .await
        .map_err(|e| AppError::Generation(format!("Improvement LLM call failed: {e}")))?;

    Ok(parse_subject_body(&completion.text))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
