//! Scout command: fetch a brand page and emit its snapshot

use spotkit::error::Result;
use spotkit::fetch;
use spotkit::scout;

use crate::commands::write_payload;

/// Build a brand snapshot from a URL (live fetch, or fixed demo data with
/// `--offline`)
pub fn cmd_scout(url: &str, notes: Option<&str>, offline: bool, out: Option<&str>) -> Result<()> {
    let snapshot = if offline {
        scout::offline_snapshot(url, notes)
    } else {
        // Progress chatter only when stdout is not the payload sink
        if out.is_some() {
            println!("  Fetching {}...", url);
        }
        let html = fetch::fetch_page(url)?;
        scout::compose_snapshot(url, &html, notes)
    };

    let payload = serde_json::to_string_pretty(&snapshot)?;
    write_payload(&payload, out)
}
