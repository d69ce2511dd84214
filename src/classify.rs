//! Keyword Classification - vertical and tone detection from page text
//!
//! This module provides declarative keyword rules that sort a page into a
//! business vertical (which fixes the offer and audience wording) and a tone
//! of voice. Rules are checked top-down and the first hit wins, so rule order
//! encodes priority when keywords from several verticals appear on one page.

/// A vertical rule: any keyword hit yields the paired offer and audience
struct VerticalRule {
    /// Keywords that signal this vertical (matched lowercase, substring)
    keywords: &'static [&'static str],
    /// Offer wording for the snapshot
    offer: &'static str,
    /// Audience wording for the snapshot
    audience: &'static str,
}

/// A tone rule: any keyword hit yields the tone label
struct ToneRule {
    keywords: &'static [&'static str],
    tone: &'static str,
}

/// Ordered vertical rules; first match wins
static VERTICAL_RULES: &[VerticalRule] = &[
    // Healthcare outranks the rest: a clinic page often also mentions
    // its online shop or booking software
    VerticalRule {
        keywords: &["clinic", "hospital", "doctor"],
        offer: "Healthcare services and medical consultations",
        audience: "Patients seeking medical care and preventive check-ups",
    },
    VerticalRule {
        keywords: &["software", "saas"],
        offer: "Software-as-a-service product",
        audience: "Businesses looking for a digital software solution",
    },
    VerticalRule {
        keywords: &["shop", "store", "e-commerce"],
        offer: "Online shopping / e-commerce products",
        audience: "Consumers purchasing products online",
    },
];

/// Offer and audience when no vertical rule matches
const GENERIC_OFFER: &str = "Main products or services described on the website";
const GENERIC_AUDIENCE: &str = "Target customers of the brand (to be refined).";

/// Ordered tone rules; first match wins, independent of the vertical
static TONE_RULES: &[ToneRule] = &[
    ToneRule {
        keywords: &["luxury", "premium"],
        tone: "Premium, aspirational, elegant",
    },
    ToneRule {
        keywords: &["fast", "simple", "easy"],
        tone: "Simple, friendly, accessible",
    },
];

/// Tone when no tone rule matches
const DEFAULT_TONE: &str = "Professional, trustworthy, informative";

/// Classification result: offer, audience statement, and tone label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub offer: String,
    pub audience: String,
    pub tone: String,
}

/// Classify a page from its meta description and normalized body text.
///
/// Both inputs are concatenated and lowercased; matching is plain substring
/// containment. No scoring and no fuzziness: ties resolve by rule order.
pub fn classify(description: &str, text: &str) -> Classification {
    let haystack = format!("{} {}", description, text).to_lowercase();

    let (offer, audience) = VERTICAL_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|rule| (rule.offer, rule.audience))
        .unwrap_or((GENERIC_OFFER, GENERIC_AUDIENCE));

    let tone = TONE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|rule| rule.tone)
        .unwrap_or(DEFAULT_TONE);

    Classification {
        offer: offer.to_string(),
        audience: audience.to_string(),
        tone: tone.to_string(),
    }
}
