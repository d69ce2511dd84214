//! Brief command: read a snapshot document and emit its campaign brief

use std::fs;

use spotkit::brief::{compose_brief, SnapshotInput};
use spotkit::error::{Result, SpotkitError};

use crate::commands::write_payload;

/// Derive a campaign brief from a snapshot JSON file
pub fn cmd_brief(input: &str, out: Option<&str>) -> Result<()> {
    let raw = fs::read_to_string(input)?;
    let snapshot: SnapshotInput = serde_json::from_str(&raw)
        .map_err(|e| SpotkitError::InvalidInput(format!("{}: {}", input, e)))?;

    let payload = serde_json::to_string_pretty(&compose_brief(&snapshot))?;
    write_payload(&payload, out)
}
