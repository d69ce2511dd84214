//! Scout stage: assemble a structured brand snapshot from a web page.
//!
//! The composer here is pure: it takes already-fetched markup and derives
//! every snapshot field from it. Fetching lives in [`crate::fetch`] so the
//! command layer owns network failures and the offline path never touches
//! the network at all.

use serde::{Deserialize, Serialize};

use crate::classify;
use crate::extract::{extract_description, extract_title};
use crate::normalize::strip_markup;

/// Maximum tagline length in characters before the ellipsis cut
const TAGLINE_MAX_CHARS: usize = 160;

/// Maximum length of the raw source excerpt in characters
const EXCERPT_MAX_CHARS: usize = 500;

/// Structured brand facts extracted from a page.
///
/// Field declaration order is the JSON key order. `key_messages`,
/// `proof_points` and `competitors` are template-generated at this stage;
/// they mark where a deeper analysis pass would slot in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub brand_name: String,
    pub website_url: String,
    pub tagline: String,
    pub summary: String,
    pub offers: Vec<String>,
    pub target_audience: String,
    pub tone_of_voice: String,
    pub key_messages: Vec<String>,
    pub proof_points: Vec<String>,
    pub competitors: Vec<String>,
    pub raw_source_excerpt: String,
}

/// Fixed demonstration snapshot for offline mode.
///
/// No request is made and no page is parsed; only `website_url` echoes the
/// caller's input. Notes still append to `offers` so the offline record
/// exercises the same field shape as a live one.
pub fn offline_snapshot(url: &str, notes: Option<&str>) -> Snapshot {
    let mut offers = vec!["Demo product A".to_string(), "Demo service B".to_string()];
    if let Some(notes) = notes {
        offers.push(format!("Client notes: {}", notes));
    }

    Snapshot {
        brand_name: "Demo Brand".to_string(),
        website_url: url.to_string(),
        tagline: "Demo Brand – demo tagline for illustration.".to_string(),
        summary: "Demo summary of the brand based on offline mode.".to_string(),
        offers,
        target_audience: "Demo target audience".to_string(),
        tone_of_voice: "Friendly, simple, explanatory".to_string(),
        key_messages: vec![
            "Demo Brand provides a simple example.".to_string(),
            "This output is suitable for demonstrating the JSON structure.".to_string(),
        ],
        proof_points: vec!["Demo-only data.".to_string()],
        competitors: vec![
            "Demo Competitor 1".to_string(),
            "Demo Competitor 2".to_string(),
        ],
        raw_source_excerpt: "This is an offline demo. No live HTTP request was performed."
            .to_string(),
    }
}

/// Assemble a snapshot from fetched page markup.
///
/// Runs title/description extraction, markup stripping and keyword
/// classification, then fills the remaining fields from templates. Total:
/// every page yields a complete snapshot, however sparse the markup.
pub fn compose_snapshot(url: &str, html: &str, notes: Option<&str>) -> Snapshot {
    let title = extract_title(html);
    let description = extract_description(html);
    let text = strip_markup(html);

    let brand_name = if title.is_empty() {
        host_segment(url)
    } else {
        title
    };

    let (tagline, summary) = if description.is_empty() {
        (
            format!("{} – online presence", brand_name),
            format!("Automatic summary placeholder for {}.", brand_name),
        )
    } else {
        (
            truncate_with_ellipsis(&description, TAGLINE_MAX_CHARS),
            description.clone(),
        )
    };

    let classification = classify::classify(&description, &text);

    let mut offers = vec![classification.offer];
    if let Some(notes) = notes {
        offers.push(format!("Client notes: {}", notes));
    }

    // offers[0] is always the classified offer; notes only ever append
    let key_messages = vec![
        format!("{} provides: {}", brand_name, offers[0]),
        "Focus on quality and customer satisfaction.".to_string(),
    ];

    Snapshot {
        brand_name,
        website_url: url.to_string(),
        tagline,
        summary,
        offers,
        target_audience: classification.audience,
        tone_of_voice: classification.tone,
        key_messages,
        proof_points: vec![
            "Website highlights expertise, experience or track record (to be refined)."
                .to_string(),
            "Modern, user-friendly presentation (from demo heuristics).".to_string(),
        ],
        competitors: vec![
            "Top 2–3 competitors in the same category (to be researched in a full version)."
                .to_string(),
        ],
        raw_source_excerpt: text.chars().take(EXCERPT_MAX_CHARS).collect(),
    }
}

/// Derive a brand name from the URL host ("https://acme.io/pricing" ->
/// "acme.io"). When the URL does not parse, fall back to stripping the
/// scheme by hand so junk input still yields something usable.
fn host_segment(url: &str) -> String {
    if let Some(host) = url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
    {
        return host;
    }

    let stripped = url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    stripped.split('/').next().unwrap_or(stripped).to_string()
}

/// Truncate to `max` characters (not bytes), appending "..." when cut.
/// Safe for non-ASCII content.
fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{}...", head)
    }
}
