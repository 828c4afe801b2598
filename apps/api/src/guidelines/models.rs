use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::generation::tone::Tone;

/// Per-tone free-text guidance. All four entries optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToneGuidance {
    pub professional: Option<String>,
    pub friendly: Option<String>,
    pub urgent: Option<String>,
    pub celebratory: Option<String>,
}

impl ToneGuidance {
    /// Returns the guidance for a tone, treating blank strings as absent.
    pub fn for_tone(&self, tone: Tone) -> Option<&str> {
        let value = match tone {
            Tone::Professional => &self.professional,
            Tone::Friendly => &self.friendly,
            Tone::Urgent => &self.urgent,
            Tone::Celebratory => &self.celebratory,
        };
        value.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// The prompt-facing view of a company's brand guidelines — exactly what
/// the composer and analyzer consume. The full stored document is
/// `GuidelineRow`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandGuidelines {
    pub content: String,
    #[serde(default)]
    pub tone_guidance: ToneGuidance,
    #[serde(default)]
    pub personality_traits: Vec<String>,
    #[serde(default)]
    pub preferred_vocabulary: Vec<String>,
    #[serde(default)]
    pub avoid_vocabulary: Vec<String>,
}

/// A stored guideline document. At most one row per company has
/// `is_active = true`; the write path enforces this transactionally.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuidelineRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub content: String,
    pub tone_guidance: Json<ToneGuidance>,
    pub personality_traits: Vec<String>,
    pub preferred_vocabulary: Vec<String>,
    pub avoid_vocabulary: Vec<String>,
    pub company_id: String,
    pub is_active: bool,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuidelineRow {
    pub fn into_guidelines(self) -> BrandGuidelines {
        BrandGuidelines {
            content: self.content,
            tone_guidance: self.tone_guidance.0,
            personality_traits: self.personality_traits,
            preferred_vocabulary: self.preferred_vocabulary,
            avoid_vocabulary: self.avoid_vocabulary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_tone_returns_matching_entry() {
        let guidance = ToneGuidance {
            urgent: Some("Lead with the deadline".to_string()),
            ..Default::default()
        };
        assert_eq!(guidance.for_tone(Tone::Urgent), Some("Lead with the deadline"));
        assert_eq!(guidance.for_tone(Tone::Friendly), None);
    }

    #[test]
    fn test_for_tone_treats_blank_as_absent() {
        let guidance = ToneGuidance {
            professional: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(guidance.for_tone(Tone::Professional), None);
    }

    #[test]
    fn test_brand_guidelines_optional_fields_default() {
        let guidelines: BrandGuidelines =
            serde_json::from_str(r#"{"content": "Keep it short."}"#).unwrap();
        assert_eq!(guidelines.content, "Keep it short.");
        assert!(guidelines.personality_traits.is_empty());
        assert_eq!(guidelines.tone_guidance, ToneGuidance::default());
    }
}
