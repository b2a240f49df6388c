//! CLI command implementations

pub mod from_messages;
pub mod sanitize;
pub mod to_html;
pub mod to_messages;
pub mod to_text;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read the whole input from a file, or from stdin for `-` or no path
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            let content = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read {}", p.display()))?;
            debug!(path = %p.display(), bytes = content.len(), "read input file");
            Ok(content)
        }
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            debug!(bytes = content.len(), "read stdin");
            Ok(content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_file() {
        let path = std::env::temp_dir().join(format!("dialogue-cli-read-{}.txt", std::process::id()));
        std::fs::write(&path, "Alice: hi\n\n").unwrap();

        let content = read_input(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(content, "Alice: hi\n\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/dialogue.html"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dialogue.html"));
    }
}
