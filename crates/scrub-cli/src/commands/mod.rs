pub mod categories;
pub mod redact;
pub mod score;
pub mod serve;

use anyhow::{Context, Result};
use scrub_config::Config;
use scrub_engine::{Analysis, Analyzer};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read input text from a file, or stdin when `file` is absent or "-".
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    let bytes = match file {
        Some(path) if path != Path::new("-") => std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read input and analyze it with the configured analyzer
pub fn analyze_input(config: &Config, file: Option<PathBuf>, no_limits: bool) -> Result<Analysis> {
    let analyzer = Analyzer::from_config(config)?;
    let text = read_input(file.as_deref())?;

    if !no_limits {
        analyzer
            .check(&text)
            .context("Input exceeds configured limits (use --no-limits to skip)")?;
    }

    Ok(analyzer.analyze(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, b"mail jane@example.com \xff").unwrap();

        let text = read_input(Some(path.as_path())).unwrap();
        assert_eq!(text, "mail jane@example.com \u{FFFD}");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(dir.path().join("missing.txt").as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_analyze_input_limits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "one two three password=hunter2").unwrap();

        let mut config = Config::default();
        config.limits.max_words = 2;

        assert!(analyze_input(&config, Some(path.clone()), false).is_err());

        let analysis = analyze_input(&config, Some(path), true).unwrap();
        assert_eq!(analysis.counts.secrets, 1);
        assert_eq!(analysis.redacted, "one two three password=[REDACTED_SECRET]");
    }
}
