//! Story stage: turn a campaign brief into a five-scene video storyboard.
//!
//! The scene skeleton is fixed: problem hook, empathy, solution reveal,
//! benefits, call to action, always in that order and always on the same
//! timestamps. Only brand name, audience, proposition and CTA vary with the
//! input. Like the brief stage this is a pure template transform.

use serde::{Deserialize, Serialize};

/// One storyboard scene. `id` runs 1 through 5; `timestamp` labels the slice
/// of the spot the scene occupies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub id: u32,
    pub timestamp: String,
    pub visual: String,
    pub voiceover: String,
    pub on_screen_text: String,
    pub notes: String,
}

/// The hold frame shown when the video pauses or ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalFrame {
    pub visual: String,
    pub tagline: String,
    pub cta: String,
    pub notes: String,
}

/// Five-scene storyboard derived from a brief. Field declaration order is
/// the JSON key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub format: String,
    pub duration_seconds: u32,
    pub platform_hint: String,
    pub scenes: Vec<Scene>,
    pub final_frame: FinalFrame,
}

/// Lenient view of a brief document: only the fields this stage reads, all
/// defaulted. Arbitrary hand-written briefs storyboard cleanly.
#[derive(Debug, Clone, Deserialize)]
pub struct BriefInput {
    pub campaign_title: Option<String>,
    pub cta: Option<String>,
    pub target_audience: Option<String>,
    pub single_minded_proposition: Option<String>,
    #[serde(default = "default_channels")]
    pub channels: Vec<String>,
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: u32,
}

impl Default for BriefInput {
    fn default() -> Self {
        BriefInput {
            campaign_title: None,
            cta: None,
            target_audience: None,
            single_minded_proposition: None,
            channels: default_channels(),
            duration_seconds: default_duration_seconds(),
        }
    }
}

fn default_channels() -> Vec<String> {
    vec![
        "TikTok".to_string(),
        "Instagram Reels".to_string(),
        "YouTube Shorts".to_string(),
    ]
}

fn default_duration_seconds() -> u32 {
    30
}

/// Build the storyboard from a brief.
///
/// The brand name is the campaign title up to the first ':' (titles from the
/// brief stage read "Brand: Tagline"); a title without a colon is used
/// whole. CTA flows verbatim into scene 5 and the final frame.
pub fn compose_story(brief: &BriefInput) -> Story {
    let campaign_title = brief.campaign_title.as_deref().unwrap_or("Brand Campaign");
    let brand_name = campaign_title.split(':').next().unwrap_or(campaign_title);
    let cta = brief.cta.as_deref().unwrap_or("Get started");
    let target_audience = brief.target_audience.as_deref().unwrap_or("your audience");
    let smp = brief
        .single_minded_proposition
        .as_deref()
        .unwrap_or("Your simple key message.");

    let scenes = vec![
        Scene {
            id: 1,
            timestamp: "0–3s".to_string(),
            visual: format!(
                "Fast, attention-grabbing shot of a problem {} faces.",
                target_audience
            ),
            voiceover: "Still struggling with the same problem every day?".to_string(),
            on_screen_text: "Stop wasting time.".to_string(),
            notes: "Use bold typography, dynamic movement, and a quick sound cue.".to_string(),
        },
        Scene {
            id: 2,
            timestamp: "3–8s".to_string(),
            visual: "Quick montage of people in real-life situations, looking frustrated."
                .to_string(),
            voiceover: format!(
                "You're not alone. Many {} feel exactly the same.",
                target_audience
            ),
            on_screen_text: "You're not alone.".to_string(),
            notes: "Keep cuts short, show emotion and relatability.".to_string(),
        },
        Scene {
            id: 3,
            timestamp: "8–15s".to_string(),
            visual: format!(
                "Smooth transition to a clean interface or scene introducing {}.",
                brand_name
            ),
            voiceover: format!("That's why {} exists – {}", brand_name, smp.to_lowercase()),
            on_screen_text: format!("{} makes it simple.", brand_name),
            notes: "Show product/service in action with clear visuals.".to_string(),
        },
        Scene {
            id: 4,
            timestamp: "15–23s".to_string(),
            visual: "3–4 quick shots: before/after, dashboard with improved results, relaxed user."
                .to_string(),
            voiceover: "In just a short time, you see the difference: more clarity, less stress, and real results."
                .to_string(),
            on_screen_text: "More clarity. Less stress. Real results.".to_string(),
            notes: "Overlay simple icons or stats. Ensure readability on mobile screens."
                .to_string(),
        },
        Scene {
            id: 5,
            timestamp: "23–30s".to_string(),
            visual: format!(
                "Hero frame with {} logo, short tagline, and a clear CTA button.",
                brand_name
            ),
            voiceover: format!("Join others who already switched. {}.", cta),
            on_screen_text: cta.to_string(),
            notes: "Freeze the last 2 seconds so the logo and CTA are easy to read.".to_string(),
        },
    ];

    Story {
        format: "9:16 vertical".to_string(),
        duration_seconds: brief.duration_seconds,
        platform_hint: brief.channels.join(", "),
        scenes,
        final_frame: FinalFrame {
            visual: format!(
                "{} logo centered, CTA button below, short tagline above.",
                brand_name
            ),
            tagline: smp.to_string(),
            cta: cta.to_string(),
            notes: "This is the frame that users see when they pause or end the video."
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_has_five_fixed_scenes() {
        let story = compose_story(&BriefInput::default());
        assert_eq!(story.scenes.len(), 5);
        let ids: Vec<u32> = story.scenes.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let timestamps: Vec<&str> = story.scenes.iter().map(|s| s.timestamp.as_str()).collect();
        assert_eq!(timestamps, vec!["0–3s", "3–8s", "8–15s", "15–23s", "23–30s"]);
    }

    #[test]
    fn test_story_brand_from_campaign_title() {
        let brief = BriefInput {
            campaign_title: Some("Acme: Turn Attention into Action".to_string()),
            ..Default::default()
        };
        let story = compose_story(&brief);
        assert_eq!(story.scenes[2].on_screen_text, "Acme makes it simple.");
        assert!(story.final_frame.visual.starts_with("Acme logo centered"));
    }

    #[test]
    fn test_story_title_without_colon_used_whole() {
        let brief = BriefInput {
            campaign_title: Some("Summer Launch".to_string()),
            ..Default::default()
        };
        let story = compose_story(&brief);
        assert_eq!(story.scenes[2].on_screen_text, "Summer Launch makes it simple.");
    }

    #[test]
    fn test_story_cta_flows_to_scene_five_and_final_frame() {
        let brief = BriefInput {
            campaign_title: Some("Acme: Go".to_string()),
            cta: Some("Buy now".to_string()),
            ..Default::default()
        };
        let story = compose_story(&brief);
        assert_eq!(story.scenes[4].on_screen_text, "Buy now");
        assert_eq!(story.scenes[4].voiceover, "Join others who already switched. Buy now.");
        assert_eq!(story.final_frame.cta, "Buy now");
    }

    #[test]
    fn test_story_smp_lowercased_in_voiceover_but_verbatim_in_tagline() {
        let brief = BriefInput {
            single_minded_proposition: Some("Everything Just Works.".to_string()),
            ..Default::default()
        };
        let story = compose_story(&brief);
        assert_eq!(
            story.scenes[2].voiceover,
            "That's why Brand Campaign exists – everything just works."
        );
        assert_eq!(story.final_frame.tagline, "Everything Just Works.");
    }

    #[test]
    fn test_story_defaults() {
        let story = compose_story(&BriefInput::default());
        assert_eq!(story.format, "9:16 vertical");
        assert_eq!(story.duration_seconds, 30);
        assert_eq!(story.platform_hint, "TikTok, Instagram Reels, YouTube Shorts");
        assert_eq!(story.scenes[4].on_screen_text, "Get started");
        assert!(story.scenes[1].voiceover.contains("your audience"));
    }

    #[test]
    fn test_story_duration_and_channels_pass_through() {
        let brief = BriefInput {
            channels: vec!["TikTok".to_string()],
            duration_seconds: 45,
            ..Default::default()
        };
        let story = compose_story(&brief);
        assert_eq!(story.duration_seconds, 45);
        assert_eq!(story.platform_hint, "TikTok");
    }

    #[test]
    fn test_brief_input_serde_defaults() {
        // Absent keys take defaults; present keys pass through untouched
        let sparse: BriefInput = serde_json::from_str("{}").unwrap();
        assert_eq!(sparse.duration_seconds, 30);
        assert_eq!(sparse.channels.len(), 3);

        let explicit: BriefInput =
            serde_json::from_str(r#"{"channels": [], "duration_seconds": 15}"#).unwrap();
        assert_eq!(explicit.duration_seconds, 15);
        assert!(explicit.channels.is_empty());
        assert_eq!(compose_story(&explicit).platform_hint, "");
    }

    #[test]
    fn test_story_audience_in_problem_and_empathy_scenes() {
        let brief = BriefInput {
            target_audience: Some("young parents".to_string()),
            ..Default::default()
        };
        let story = compose_story(&brief);
        assert_eq!(
            story.scenes[0].visual,
            "Fast, attention-grabbing shot of a problem young parents faces."
        );
        assert_eq!(
            story.scenes[1].voiceover,
            "You're not alone. Many young parents feel exactly the same."
        );
    }
}
