use std::time::Duration;

use once_cell::sync::Lazy;

use crate::error::Result;

/// HTTP request timeout in seconds
const FETCH_TIMEOUT_SECS: u64 = 10;

/// Shared HTTP agent for connection pooling
static HTTP_AGENT: Lazy<ureq::Agent> = Lazy::new(|| {
    ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(FETCH_TIMEOUT_SECS)))
        .build()
        .into()
});

/// Fetch a page over HTTP and return the raw response body.
///
/// A single attempt, no retry. Transport failures (DNS, timeout, refused
/// connection) and non-success status codes both surface as `HttpError`;
/// callers decide whether to fall back to offline mode.
pub fn fetch_page(url: &str) -> Result<String> {
    let response = HTTP_AGENT
        .get(url)
        .header("User-Agent", "Mozilla/5.0 (compatible; spotkit/0.1)")
        .call()?;

    let html = response.into_body().read_to_string()?;
    Ok(html)
}
