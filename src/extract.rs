use scraper::{Html, Selector};

/// Characters that separate a brand name from a trailing tagline in `<title>`
const TITLE_SEPARATORS: [char; 4] = ['|', '-', '–', '•'];

/// Get the brand part of the page title.
///
/// Takes the text of the first `<title>` element and cuts it at the first
/// separator character; pages commonly suffix the brand with a tagline
/// ("Acme | Home", "Acme – Plumbing"). Returns an empty string when the
/// element is missing so callers can fall back to the URL host.
pub fn extract_title(html: &str) -> String {
    let document = Html::parse_document(html);
    let title = Selector::parse("title")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .map(|el| el.text().collect::<String>())
        })
        .unwrap_or_default();

    let title = title.trim();
    match title.find(&TITLE_SEPARATORS[..]) {
        Some(pos) => title[..pos].trim().to_string(),
        None => title.to_string(),
    }
}

/// Get the page description from its meta tags.
///
/// Prefers `meta[name="description"]`, falls back to
/// `meta[property="og:description"]`. The DOM walk tolerates any attribute
/// order or quoting, and attribute values match ASCII-case-insensitively.
/// Returns an empty string when neither tag carries a description.
pub fn extract_description(html: &str) -> String {
    let document = Html::parse_document(html);
    meta_content(&document, "name", "description")
        .or_else(|| meta_content(&document, "property", "og:description"))
        .unwrap_or_default()
}

/// Find the first `<meta>` whose `key` attribute equals `value` and has a
/// `content` attribute, and return that content trimmed.
fn meta_content(document: &Html, key: &str, value: &str) -> Option<String> {
    let selector = Selector::parse("meta").ok()?;

    for el in document.select(&selector) {
        let key_matches = el
            .value()
            .attr(key)
            .map(|v| v.eq_ignore_ascii_case(value))
            .unwrap_or(false);
        if !key_matches {
            continue;
        }

        if let Some(content) = el.value().attr("content") {
            return Some(content.trim().to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_plain() {
        let html = r#"<html><head><title>My Page Title</title></head><body></body></html>"#;
        assert_eq!(extract_title(html), "My Page Title");
    }

    #[test]
    fn test_extract_title_cut_at_pipe() {
        let html = "<html><head><title>Acme Corp | Home of Widgets</title></head></html>";
        assert_eq!(extract_title(html), "Acme Corp");
    }

    #[test]
    fn test_extract_title_cut_at_dash_variants() {
        let hyphen = "<title>Acme - Widgets</title>";
        let en_dash = "<title>Acme – Widgets</title>";
        let bullet = "<title>Acme • Widgets</title>";
        assert_eq!(extract_title(hyphen), "Acme");
        assert_eq!(extract_title(en_dash), "Acme");
        assert_eq!(extract_title(bullet), "Acme");
    }

    #[test]
    fn test_extract_title_cut_hits_mid_word_hyphen() {
        // First separator wins even inside a word
        let html = "<title>E-commerce Shop</title>";
        assert_eq!(extract_title(html), "E");
    }

    #[test]
    fn test_extract_title_missing() {
        let html = "<html><head></head><body><p>no title here</p></body></html>";
        assert_eq!(extract_title(html), "");
    }

    #[test]
    fn test_extract_title_uppercase_tag() {
        let html = "<html><head><TITLE>Shouty Brand</TITLE></head></html>";
        assert_eq!(extract_title(html), "Shouty Brand");
    }

    #[test]
    fn test_extract_description_by_name() {
        let html = r#"<meta name="description" content="A fine description.">"#;
        assert_eq!(extract_description(html), "A fine description.");
    }

    #[test]
    fn test_extract_description_og_fallback() {
        let html = r#"<meta property="og:description" content="Social description.">"#;
        assert_eq!(extract_description(html), "Social description.");
    }

    #[test]
    fn test_extract_description_prefers_name_over_og() {
        let html = r#"
            <meta property="og:description" content="Social description.">
            <meta name="description" content="Primary description.">
        "#;
        assert_eq!(extract_description(html), "Primary description.");
    }

    #[test]
    fn test_extract_description_tolerates_markup_variations() {
        // Single quotes, reversed attribute order, mixed-case value
        let html = "<meta content='Reversed attrs.' name='Description'>";
        assert_eq!(extract_description(html), "Reversed attrs.");
    }

    #[test]
    fn test_extract_description_uppercase_attribute_names() {
        // html5ever lowercases attribute names while parsing
        let html = r#"<META NAME="description" CONTENT="Shouty markup.">"#;
        assert_eq!(extract_description(html), "Shouty markup.");
    }

    #[test]
    fn test_extract_description_trims_whitespace() {
        let html = r#"<meta name="description" content="  padded  ">"#;
        assert_eq!(extract_description(html), "padded");
    }

    #[test]
    fn test_extract_description_missing() {
        let html = r#"<meta name="keywords" content="unrelated">"#;
        assert_eq!(extract_description(html), "");
    }

    #[test]
    fn test_extract_description_skips_meta_without_content() {
        let html = r#"
            <meta name="description">
            <meta name="description" content="The one with content.">
        "#;
        assert_eq!(extract_description(html), "The one with content.");
    }
}
