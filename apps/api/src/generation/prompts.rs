// All LLM prompt constants for the Generation module.
// The composer assembles these into an ordered section list — the order the
// model sees them in is observable behavior, so treat edits as API changes.

/// Base system block. Replace `{tone}` and `{category}` before sending.
/// The SUBJECT:/BODY: format instruction is what the response parser relies on.
pub const SYSTEM_BASE_TEMPLATE: &str = r#"You are an expert internal communications assistant. Your role is to help create clear, professional, and on-brand internal messages for businesses.

TONE: {tone}
CATEGORY: {category}

Your output should be structured as:
SUBJECT: [A clear, compelling subject line]
BODY: [The main message content]"#;

/// Static reference text for all four tones, appended on every request.
/// Replace `{tone}` in the heading before sending.
pub const TONE_GUIDANCE_TEMPLATE: &str = r#"Guidelines for {tone} tone:
- Professional: Clear, respectful, formal business language
- Friendly: Warm, approachable, but still professional
- Urgent: Direct, action-oriented, emphasizes importance
- Celebratory: Positive, enthusiastic, acknowledging achievements"#;

/// Static reference text for all five categories, appended on every request.
pub const CATEGORY_GUIDANCE: &str = r#"Category guidelines:
- policy_update: Clear explanation of changes, effective dates, and next steps
- leadership_announcement: Professional tone, clear messaging, company context
- event_invitation: Engaging, includes all necessary details (date, time, location, purpose)
- general_update: Informative, relevant to audience, actionable if needed
- urgent_notice: Direct, clear action items, deadline-focused"#;

/// Marker heading for the optional brand-guideline block. Tests assert this
/// literal is absent when a company has no active guidelines.
pub const GUIDELINES_HEADER: &str = "COMPANY BRAND GUIDELINES:";

/// Fallback literals when a guideline document has empty vocabulary lists.
pub const FALLBACK_PERSONALITY: &str = "Professional";
pub const FALLBACK_PREFERRED: &str = "Standard business terms";
pub const FALLBACK_AVOID: &str = "Overly casual language";

/// Opening line of every user prompt, followed by the caller's free text.
pub const USER_REQUEST_PREFIX: &str =
    "Please create an internal communication message based on this request: ";

/// Content-analysis prompt. Replace `{content}` and `{guidelines_block}`
/// before sending. The model is asked for the exact four Analysis fields.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this internal communication for:
1. Tonal consistency (1-10 score)
2. Clarity and readability (1-10 score)
3. Brand alignment (1-10 score if guidelines provided)
4. Improvement suggestions

Content: {content}

{guidelines_block}

Respond in JSON format:
{
  "tonalConsistency": number,
  "clarityScore": number,
  "brandAlignment": number,
  "suggestions": ["suggestion1", "suggestion2"]
}"#;

/// Feedback-driven improvement prompt. Replace `{original}`, `{feedback}`,
/// and `{guidelines_block}` before sending.
pub const IMPROVEMENT_PROMPT_TEMPLATE: &str = r#"Improve this internal communication based on the feedback provided:

Original message: {original}

Feedback: {feedback}

{guidelines_block}

Please provide an improved version maintaining the same structure (SUBJECT: / BODY:)"#;
