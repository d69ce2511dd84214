use once_cell::sync::Lazy;
use regex::Regex;

// Pre-compiled regexes (compile once, use many times)
static SCRIPT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("Invalid script block regex pattern")
});

static STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("Invalid style block regex pattern")
});

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>").expect("Invalid HTML tag regex pattern")
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex pattern")
});

/// Strip markup from raw page source, yielding plain prose.
///
/// Script and style blocks are dropped wholesale (their contents are code,
/// not prose). Remaining tags become single spaces so words in adjacent
/// elements never run together, then whitespace runs collapse to one space.
/// Never fails: malformed markup degrades to whatever text survives, and the
/// output contains no `<` or `>` characters.
pub fn strip_markup(html: &str) -> String {
    let result = SCRIPT_RE.replace_all(html, " ");
    let result = STYLE_RE.replace_all(&result, " ");
    let result = HTML_TAG_RE.replace_all(&result, " ");

    // Unclosed tags and bare brackets survive the tag regex; scrub them so
    // the no-markup guarantee holds for arbitrary input
    let result = result.replace(['<', '>'], " ");

    // Decode common entities. &lt; and &gt; stay encoded: decoding them
    // would put markup characters back into the text
    let result = result
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'");

    WHITESPACE_RE.replace_all(&result, " ").trim().to_string()
}
