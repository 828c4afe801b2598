//! Content Analyzer — advisory quality scoring for a generated body.
//!
//! Analysis must never block generation: every failure path (provider error,
//! bad JSON, missing fields, out-of-range scores) resolves to the fixed
//! fallback scores. The degradation is an explicit branch
//! (`AnalysisOutcome::Degraded`), not a swallowed exception, so callers and
//! tests can observe the reason.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::generation::prompts::ANALYSIS_PROMPT_TEMPLATE;
use crate::guidelines::models::BrandGuidelines;
use crate::llm_client::{strip_json_fences, TextGenerator, ANALYSIS_PARAMS};

/// Quality scores for a generated message. Field names are camelCase on the
/// wire because that is the shape the analysis prompt asks the model for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub tonal_consistency: u8,
    pub clarity_score: u8,
    pub brand_alignment: u8,
    pub suggestions: Vec<String>,
}

impl Analysis {
    /// The fixed fallback returned whenever scoring degrades.
    pub fn fallback() -> Self {
        Self {
            tonal_consistency: 7,
            clarity_score: 7,
            brand_alignment: 7,
            suggestions: vec![
                "Consider reviewing for alignment with company guidelines".to_string()
            ],
        }
    }

    fn check_score_ranges(&self) -> Result<(), String> {
        for (name, score) in [
            ("tonalConsistency", self.tonal_consistency),
            ("clarityScore", self.clarity_score),
            ("brandAlignment", self.brand_alignment),
        ] {
            if !(1..=10).contains(&score) {
                return Err(format!("{name} score {score} outside 1-10"));
            }
        }
        Ok(())
    }
}

/// Outcome of one scoring attempt. `Degraded` carries the reason for
/// observability; it is resolved locally and never crosses the pipeline
/// boundary as an error.
#[derive(Debug)]
pub enum AnalysisOutcome {
    Scored(Analysis),
    Degraded { reason: String },
}

/// Scores a generated body, returning the fallback Analysis if the scoring
/// call or its structured parse fails for any reason.
pub async fn analyze(
    llm: &dyn TextGenerator,
    body: &str,
    guidelines: Option<&BrandGuidelines>,
) -> Analysis {
    match score_content(llm, body, guidelines).await {
        AnalysisOutcome::Scored(analysis) => analysis,
        AnalysisOutcome::Degraded { reason } => {
            warn!("Content analysis degraded, using default scores: {reason}");
            Analysis::fallback()
        }
    }
}

/// One scoring attempt with an explicit two-branch result.
pub async fn score_content(
    llm: &dyn TextGenerator,
    body: &str,
    guidelines: Option<&BrandGuidelines>,
) -> AnalysisOutcome {
    let prompt = build_analysis_prompt(body, guidelines);

    let completion = match llm.complete(None, &prompt, ANALYSIS_PARAMS).await {
        Ok(completion) => completion,
        Err(e) => {
            return AnalysisOutcome::Degraded {
                reason: format!("analysis call failed: {e}"),
            }
        }
    };

    let text = strip_json_fences(&completion.text);
    let analysis: Analysis = match serde_json::from_str(text) {
        Ok(analysis) => analysis,
        Err(e) => {
            return AnalysisOutcome::Degraded {
                reason: format!("analysis response was not valid JSON: {e}"),
            }
        }
    };

    if let Err(reason) = analysis.check_score_ranges() {
        return AnalysisOutcome::Degraded { reason };
    }

    AnalysisOutcome::Scored(analysis)
}

fn build_analysis_prompt(body: &str, guidelines: Option<&BrandGuidelines>) -> String {
    let guidelines_block = guidelines
        .map(|g| format!("Brand Guidelines: {}", g.content))
        .unwrap_or_default();

    ANALYSIS_PROMPT_TEMPLATE
        .replace("{content}", body)
        .replace("{guidelines_block}", &guidelines_block)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::{Completion, CompletionParams, LlmError};

    /// Test double that replays scripted completions and records prompts.
    struct ScriptedGenerator {
        responses: Mutex<VecDeque<Result<Completion, LlmError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(responses: Vec<Result<Completion, LlmError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn returning(text: &str) -> Self {
            Self::new(vec![Ok(Completion {
                text: text.to_string(),
                tokens_used: 42,
            })])
        }

        fn failing() -> Self {
            Self::new(vec![Err(LlmError::Api {
                status: 500,
                message: "provider exploded".to_string(),
            })])
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn complete(
            &self,
            _system: Option<&str>,
            prompt: &str,
            _params: CompletionParams,
        ) -> Result<Completion, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("no scripted response left")
        }
    }

    fn guidelines() -> BrandGuidelines {
        BrandGuidelines {
            content: "Be concise.".to_string(),
            tone_guidance: Default::default(),
            personality_traits: vec![],
            preferred_vocabulary: vec![],
            avoid_vocabulary: vec![],
        }
    }

    #[tokio::test]
    async fn test_valid_json_scores_are_returned() {
        let llm = ScriptedGenerator::returning(
            r#"{"tonalConsistency": 9, "clarityScore": 8, "brandAlignment": 7, "suggestions": ["Shorten the opening"]}"#,
        );
        let analysis = analyze(&llm, "Some body", None).await;
        assert_eq!(analysis.tonal_consistency, 9);
        assert_eq!(analysis.clarity_score, 8);
        assert_eq!(analysis.brand_alignment, 7);
        assert_eq!(analysis.suggestions, vec!["Shorten the opening"]);
    }

    #[tokio::test]
    async fn test_fenced_json_is_accepted() {
        let llm = ScriptedGenerator::returning(
            "```json\n{\"tonalConsistency\": 6, \"clarityScore\": 6, \"brandAlignment\": 6, \"suggestions\": []}\n```",
        );
        let analysis = analyze(&llm, "Some body", None).await;
        assert_eq!(analysis.tonal_consistency, 6);
        assert!(analysis.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_falls_back_to_default() {
        let llm = ScriptedGenerator::returning("The message looks great overall!");
        let analysis = analyze(&llm, "Some body", None).await;
        assert_eq!(analysis, Analysis::fallback());
    }

    #[tokio::test]
    async fn test_missing_field_falls_back_to_default() {
        let llm = ScriptedGenerator::returning(
            r#"{"tonalConsistency": 9, "clarityScore": 8, "suggestions": []}"#,
        );
        let analysis = analyze(&llm, "Some body", None).await;
        assert_eq!(analysis, Analysis::fallback());
    }

    #[tokio::test]
    async fn test_out_of_range_score_falls_back_to_default() {
        let llm = ScriptedGenerator::returning(
            r#"{"tonalConsistency": 11, "clarityScore": 8, "brandAlignment": 7, "suggestions": []}"#,
        );
        let analysis = analyze(&llm, "Some body", None).await;
        assert_eq!(analysis, Analysis::fallback());
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_and_does_not_raise() {
        let llm = ScriptedGenerator::failing();
        let analysis = analyze(&llm, "Some body", None).await;
        assert_eq!(analysis, Analysis::fallback());
    }

    #[tokio::test]
    async fn test_fallback_value_is_exactly_specified() {
        let fallback = Analysis::fallback();
        assert_eq!(fallback.tonal_consistency, 7);
        assert_eq!(fallback.clarity_score, 7);
        assert_eq!(fallback.brand_alignment, 7);
        assert_eq!(
            fallback.suggestions,
            vec!["Consider reviewing for alignment with company guidelines"]
        );
    }

    #[tokio::test]
    async fn test_prompt_embeds_body_and_guideline_content() {
        let llm = ScriptedGenerator::returning(
            r#"{"tonalConsistency": 5, "clarityScore": 5, "brandAlignment": 5, "suggestions": []}"#,
        );
        let _ = analyze(&llm, "The body under review", Some(&guidelines())).await;
        let prompts = llm.prompts.lock().unwrap();
        assert!(prompts[0].contains("Content: The body under review"));
        assert!(prompts[0].contains("Brand Guidelines: Be concise."));
    }

    #[tokio::test]
    async fn test_degraded_outcome_carries_reason() {
        let llm = ScriptedGenerator::returning("not json");
        match score_content(&llm, "body", None).await {
            AnalysisOutcome::Degraded { reason } => {
                assert!(reason.contains("not valid JSON"));
            }
            AnalysisOutcome::Scored(_) => panic!("expected degraded outcome"),
        }
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let json = serde_json::to_string(&Analysis::fallback()).unwrap();
        assert!(json.contains("tonalConsistency"));
        assert!(json.contains("clarityScore"));
        assert!(json.contains("brandAlignment"));
    }
}
