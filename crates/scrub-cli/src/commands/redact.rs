use anyhow::Result;
use scrub_config::Config;
use std::io::Write;
use std::path::PathBuf;

use super::analyze_input;

pub fn handle(config: &Config, file: Option<PathBuf>, json: bool, no_limits: bool) -> Result<()> {
    let analysis = analyze_input(config, file, no_limits)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(analysis.redacted.as_bytes())?;
    stdout.flush()?;

    // Summary goes to stderr so stdout stays pipeable
    eprintln!(
        "✓ Redacted {} item(s), PII score {}/100",
        analysis.counts.total(),
        analysis.pii_score.value()
    );
    for (category, count) in analysis.counts.iter().filter(|(_, n)| *n > 0) {
        eprintln!("  {}: {}", category.counter_key(), count);
    }
    if !analysis.entities.is_empty() {
        eprintln!("  entities: {}", analysis.entities.len());
    }

    Ok(())
}
