//! Tone and category vocabularies — the two fixed axes that steer generation.
//!
//! The prompt composer embeds these verbatim, so the string forms here are
//! observable behavior: changing one changes what the model sees.

use serde::{Deserialize, Serialize};

/// One of four fixed communication styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Urgent,
    Celebratory,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Urgent => "urgent",
            Tone::Celebratory => "celebratory",
        }
    }
}

/// One of five fixed message purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PolicyUpdate,
    LeadershipAnnouncement,
    EventInvitation,
    GeneralUpdate,
    UrgentNotice,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::PolicyUpdate,
        Category::LeadershipAnnouncement,
        Category::EventInvitation,
        Category::GeneralUpdate,
        Category::UrgentNotice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::PolicyUpdate => "policy_update",
            Category::LeadershipAnnouncement => "leadership_announcement",
            Category::EventInvitation => "event_invitation",
            Category::GeneralUpdate => "general_update",
            Category::UrgentNotice => "urgent_notice",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::PolicyUpdate => "Policy Update",
            Category::LeadershipAnnouncement => "Leadership Announcement",
            Category::EventInvitation => "Event Invitation",
            Category::GeneralUpdate => "General Update",
            Category::UrgentNotice => "Urgent Notice",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::PolicyUpdate => "Changes to company policies or procedures",
            Category::LeadershipAnnouncement => "Messages from company leadership",
            Category::EventInvitation => "Invitations to company events or meetings",
            Category::GeneralUpdate => "General company news and updates",
            Category::UrgentNotice => "Time-sensitive important announcements",
        }
    }
}
