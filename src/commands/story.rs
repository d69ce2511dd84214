//! Story command: read a brief document and emit its storyboard

use std::fs;

use spotkit::error::{Result, SpotkitError};
use spotkit::story::{compose_story, BriefInput};

use crate::commands::write_payload;

/// Expand a campaign brief JSON file into a five-scene storyboard
pub fn cmd_story(input: &str, out: Option<&str>) -> Result<()> {
    let raw = fs::read_to_string(input)?;
    let brief: BriefInput = serde_json::from_str(&raw)
        .map_err(|e| SpotkitError::InvalidInput(format!("{}: {}", input, e)))?;

    let payload = serde_json::to_string_pretty(&compose_story(&brief))?;
    write_payload(&payload, out)
}
