//! Prompt Composer — builds the system and user prompts for one generation.
//!
//! Pure function of its inputs: identical request + guidelines always yield
//! byte-identical prompts. Prompts are assembled as an ordered list of named
//! sections joined by blank lines; section order is part of the contract.

use crate::generation::generator::GenerationRequest;
use crate::generation::prompts::{
    CATEGORY_GUIDANCE, FALLBACK_AVOID, FALLBACK_PERSONALITY, FALLBACK_PREFERRED, GUIDELINES_HEADER,
    SYSTEM_BASE_TEMPLATE, TONE_GUIDANCE_TEMPLATE, USER_REQUEST_PREFIX,
};
use crate::guidelines::models::BrandGuidelines;

/// The two prompts sent to the generation capability.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPrompt {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Composes the system and user prompts for a generation request.
///
/// Guidelines are optional: absence simply omits the brand block. No
/// validation happens here — malformed tone/category values never reach
/// this point because they are rejected during request deserialization.
pub fn compose_prompt(
    request: &GenerationRequest,
    guidelines: Option<&BrandGuidelines>,
) -> ComposedPrompt {
    ComposedPrompt {
        system_prompt: compose_system_prompt(request, guidelines),
        user_prompt: compose_user_prompt(request),
    }
}

fn compose_system_prompt(
    request: &GenerationRequest,
    guidelines: Option<&BrandGuidelines>,
) -> String {
    let tone = request.tone.as_str();
    let mut sections: Vec<String> = Vec::new();

    sections.push(
        SYSTEM_BASE_TEMPLATE
            .replace("{tone}", tone)
            .replace("{category}", request.category.as_str()),
    );
    sections.push(TONE_GUIDANCE_TEMPLATE.replace("{tone}", tone));
    sections.push(CATEGORY_GUIDANCE.to_string());

    if let Some(guidelines) = guidelines {
        sections.push(format!("{GUIDELINES_HEADER}\n{}", guidelines.content));
        sections.push(format!(
            "Brand Voice: {}",
            join_or(&guidelines.personality_traits, FALLBACK_PERSONALITY)
        ));
        sections.push(format!(
            "Preferred vocabulary: {}\nAvoid: {}",
            join_or(&guidelines.preferred_vocabulary, FALLBACK_PREFERRED),
            join_or(&guidelines.avoid_vocabulary, FALLBACK_AVOID)
        ));

        if let Some(guidance) = guidelines.tone_guidance.for_tone(request.tone) {
            sections.push(format!("Specific {tone} tone guidance: {guidance}"));
        }
    }

    sections.join("\n\n")
}

fn compose_user_prompt(request: &GenerationRequest) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!("{USER_REQUEST_PREFIX}{}", request.prompt));

    if let Some(template) = &request.template {
        sections.push(format!(
            "Use this template as a starting point:\nSUBJECT: {}\nBODY: {}",
            template.subject_pattern, template.body_pattern
        ));
    }

    if let Some(audience) = &request.target_audience {
        sections.push(format!("Target audience: {audience}"));
    }

    if let Some(key_points) = &request.key_points {
        if !key_points.is_empty() {
            sections.push(format!("Key points to include: {}", key_points.join(", ")));
        }
    }

    if let Some(call_to_action) = &request.call_to_action {
        sections.push(format!("Call to action: {call_to_action}"));
    }

    sections.join("\n\n")
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::tone::{Category, Tone};
    use crate::guidelines::models::ToneGuidance;
    use crate::templates::models::TemplateSkeleton;

    fn base_request() -> GenerationRequest {
        GenerationRequest {
            prompt: "Announce new parking policy".to_string(),
            tone: Tone::Professional,
            category: Category::PolicyUpdate,
            template: None,
            target_audience: None,
            key_points: None,
            call_to_action: None,
            company_id: "acme".to_string(),
        }
    }

    fn base_guidelines() -> BrandGuidelines {
        BrandGuidelines {
            content: "We value clarity above all.".to_string(),
            tone_guidance: ToneGuidance::default(),
            personality_traits: vec!["Direct".to_string(), "Warm".to_string()],
            preferred_vocabulary: vec!["team".to_string()],
            avoid_vocabulary: vec!["synergy".to_string()],
        }
    }

    #[test]
    fn test_system_prompt_embeds_tone_and_category_verbatim() {
        let composed = compose_prompt(&base_request(), None);
        assert!(composed.system_prompt.contains("TONE: professional"));
        assert!(composed.system_prompt.contains("CATEGORY: policy_update"));
    }

    #[test]
    fn test_system_prompt_always_carries_tone_and_category_guidance() {
        let composed = compose_prompt(&base_request(), None);
        assert!(composed
            .system_prompt
            .contains("Guidelines for professional tone:"));
        assert!(composed.system_prompt.contains("Category guidelines:"));
        assert!(composed.system_prompt.contains("- urgent_notice:"));
    }

    #[test]
    fn test_no_guidelines_omits_brand_block() {
        let composed = compose_prompt(&base_request(), None);
        assert!(!composed.system_prompt.contains("COMPANY BRAND GUIDELINES"));
    }

    #[test]
    fn test_guidelines_content_appended_verbatim() {
        let composed = compose_prompt(&base_request(), Some(&base_guidelines()));
        assert!(composed
            .system_prompt
            .contains("COMPANY BRAND GUIDELINES:\nWe value clarity above all."));
        assert!(composed.system_prompt.contains("Brand Voice: Direct, Warm"));
        assert!(composed.system_prompt.contains("Preferred vocabulary: team"));
        assert!(composed.system_prompt.contains("Avoid: synergy"));
    }

    #[test]
    fn test_empty_personality_traits_fall_back_to_professional() {
        let mut guidelines = base_guidelines();
        guidelines.personality_traits.clear();
        let composed = compose_prompt(&base_request(), Some(&guidelines));
        assert!(composed.system_prompt.contains("Brand Voice: Professional"));
    }

    #[test]
    fn test_empty_vocabulary_lists_use_fallback_literals() {
        let mut guidelines = base_guidelines();
        guidelines.preferred_vocabulary.clear();
        guidelines.avoid_vocabulary.clear();
        let composed = compose_prompt(&base_request(), Some(&guidelines));
        assert!(composed
            .system_prompt
            .contains("Preferred vocabulary: Standard business terms"));
        assert!(composed.system_prompt.contains("Avoid: Overly casual language"));
    }

    #[test]
    fn test_tone_guidance_included_when_set_for_requested_tone() {
        let mut guidelines = base_guidelines();
        guidelines.tone_guidance.professional = Some("Always mention data privacy".to_string());
        let composed = compose_prompt(&base_request(), Some(&guidelines));
        assert!(composed
            .system_prompt
            .contains("Specific professional tone guidance: Always mention data privacy"));
    }

    #[test]
    fn test_tone_guidance_for_other_tone_not_included() {
        let mut guidelines = base_guidelines();
        guidelines.tone_guidance.friendly = Some("Use first names".to_string());
        let composed = compose_prompt(&base_request(), Some(&guidelines));
        assert!(!composed.system_prompt.contains("Use first names"));
    }

    #[test]
    fn test_user_prompt_starts_with_request_line() {
        let composed = compose_prompt(&base_request(), None);
        assert!(composed.user_prompt.starts_with(
            "Please create an internal communication message based on this request: \
             Announce new parking policy"
        ));
    }

    #[test]
    fn test_user_prompt_optional_blocks_in_fixed_order() {
        let mut request = base_request();
        request.template = Some(TemplateSkeleton {
            subject_pattern: "Policy Update: {{topic}}".to_string(),
            body_pattern: "Effective {{date}}, ...".to_string(),
        });
        request.target_audience = Some("All employees".to_string());
        request.key_points = Some(vec!["badge access".to_string(), "new lot".to_string()]);
        request.call_to_action = Some("Review the policy by Friday".to_string());

        let composed = compose_prompt(&request, None);
        let template_pos = composed
            .user_prompt
            .find("Use this template as a starting point:")
            .unwrap();
        let audience_pos = composed.user_prompt.find("Target audience:").unwrap();
        let key_points_pos = composed.user_prompt.find("Key points to include:").unwrap();
        let cta_pos = composed.user_prompt.find("Call to action:").unwrap();

        assert!(template_pos < audience_pos);
        assert!(audience_pos < key_points_pos);
        assert!(key_points_pos < cta_pos);
        assert!(composed
            .user_prompt
            .contains("Key points to include: badge access, new lot"));
        assert!(composed
            .user_prompt
            .contains("SUBJECT: Policy Update: {{topic}}\nBODY: Effective {{date}}, ..."));
    }

    #[test]
    fn test_empty_key_points_sequence_omitted() {
        let mut request = base_request();
        request.key_points = Some(vec![]);
        let composed = compose_prompt(&request, None);
        assert!(!composed.user_prompt.contains("Key points to include:"));
    }

    #[test]
    fn test_compose_is_pure_and_idempotent() {
        let request = base_request();
        let guidelines = base_guidelines();
        let first = compose_prompt(&request, Some(&guidelines));
        let second = compose_prompt(&request, Some(&guidelines));
        assert_eq!(first.system_prompt, second.system_prompt);
        assert_eq!(first.user_prompt, second.user_prompt);
    }
}
