use anyhow::Result;
use scrub_config::Config;
use std::path::PathBuf;

use super::analyze_input;

pub fn handle(config: &Config, file: Option<PathBuf>, no_limits: bool) -> Result<()> {
    let analysis = analyze_input(config, file, no_limits)?;

    println!("PII score: {}/100", analysis.pii_score.value());
    println!("Redactions: {}", analysis.counts.total());
    for (category, count) in analysis.counts.iter() {
        println!("  {:<10} {}", category.counter_key(), count);
    }

    Ok(())
}
