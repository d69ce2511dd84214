//! Command implementations for the spotkit CLI

mod brief;
mod misc;
mod scout;
mod story;

pub use brief::*;
pub use misc::*;
pub use scout::*;
pub use story::*;

use std::fs;
use std::path::Path;

use colored::Colorize;

use spotkit::error::Result;

/// Deliver a serialized payload: write it to `out`, creating parent
/// directories as needed, or print it to stdout when no path is given.
/// Stdout carries nothing but the payload so output stays pipeable.
pub(crate) fn write_payload(payload: &str, out: Option<&str>) -> Result<()> {
    match out {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, payload)?;
            println!("{} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", payload),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_payload_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("spotkit_sink_test_{}", std::process::id()));
        let target = dir.join("nested").join("out.json");
        let target_str = target.to_string_lossy().to_string();

        write_payload("{\"ok\": true}", Some(&target_str)).unwrap();
        let written = fs::read_to_string(&target).unwrap();
        assert_eq!(written, "{\"ok\": true}");

        let _ = fs::remove_dir_all(&dir);
    }
}
