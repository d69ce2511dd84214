//! Brief stage: turn a brand snapshot into a campaign brief.
//!
//! A fixed-template transform. Four snapshot fields personalize the output;
//! everything else (objective, KPIs, channels, CTA, mandatories, references)
//! is a constant of the house style at this stage. Same input, same output,
//! byte for byte.

use serde::{Deserialize, Serialize};

/// Default spot duration in seconds
pub const DEFAULT_DURATION_SECS: u32 = 30;

/// Campaign brief derived from a snapshot. Field declaration order is the
/// JSON key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brief {
    pub campaign_title: String,
    pub primary_objective: String,
    pub kpi: Vec<String>,
    pub target_audience: String,
    pub single_minded_proposition: String,
    pub tone_of_voice: String,
    pub channels: Vec<String>,
    pub cta: String,
    pub duration_seconds: u32,
    pub mandatories: Vec<String>,
    pub references: Vec<String>,
}

/// Lenient view of a snapshot document: only the fields this stage reads,
/// all optional. A hand-written or trimmed-down snapshot still briefs
/// cleanly; absent fields fall back to neutral defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotInput {
    pub brand_name: Option<String>,
    #[serde(default)]
    pub offers: Vec<String>,
    pub target_audience: Option<String>,
    pub tone_of_voice: Option<String>,
}

/// Derive a campaign brief from a snapshot.
pub fn compose_brief(snapshot: &SnapshotInput) -> Brief {
    let brand_name = snapshot.brand_name.as_deref().unwrap_or("The Brand");
    let first_offer = snapshot
        .offers
        .first()
        .map(|s| s.as_str())
        .unwrap_or("core product or service");
    let target_audience = snapshot
        .target_audience
        .clone()
        .unwrap_or_else(|| "primary target audience".to_string());
    let tone_of_voice = snapshot
        .tone_of_voice
        .clone()
        .unwrap_or_else(|| "Professional and trustworthy".to_string());

    Brief {
        campaign_title: format!("{}: Turn Attention into Action", brand_name),
        primary_objective: "Performance conversions".to_string(),
        kpi: vec![
            "Click-through rate (CTR)".to_string(),
            "Cost per acquisition (CPA)".to_string(),
            "Number of sign-ups / bookings / purchases".to_string(),
        ],
        target_audience,
        single_minded_proposition: format!(
            "When you choose {}, you get {} without the usual hassle.",
            brand_name,
            first_offer.to_lowercase()
        ),
        tone_of_voice,
        channels: vec![
            "TikTok".to_string(),
            "Instagram Reels".to_string(),
            "YouTube Shorts".to_string(),
        ],
        cta: "Objednať sa".to_string(),
        duration_seconds: DEFAULT_DURATION_SECS,
        mandatories: vec![
            "Show brand logo in the last 2–3 seconds.".to_string(),
            "Include a clear on-screen CTA.".to_string(),
            "Respect brand tone of voice and visual identity.".to_string(),
        ],
        references: vec![
            "High-performing short-form ads in this category.".to_string(),
            "TikTok/Reels ads with a strong hook and clear CTA.".to_string(),
        ],
    }
}
