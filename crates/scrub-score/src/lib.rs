//! PII risk scoring
//!
//! Score = 70 points of redaction density plus up to 30 points for risk
//! keywords found in the original text, rounded and clamped to `0..=100`.

use scrub_core::RiskScore;

const DENSITY_WEIGHT: f64 = 70.0;
const KEYWORD_POINTS: f64 = 6.0;
const KEYWORD_CAP: f64 = 30.0;

/// Words per expected redaction at which density saturates
const WORDS_PER_REDACTION: f64 = 10.0;

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "password",
    "passwd",
    "secret",
    "token",
    "credential",
    "confidential",
    "private",
    "api_key",
    "access_key",
];

/// Risk scorer over a fixed keyword list
#[derive(Debug, Clone)]
pub struct RiskScorer {
    keywords: Vec<String>,
}

impl RiskScorer {
    /// Scorer with [`DEFAULT_KEYWORDS`]
    pub fn new() -> Self {
        Self::with_keywords(DEFAULT_KEYWORDS.iter().copied())
    }

    /// Scorer with a custom keyword list. Matching is case-insensitive;
    /// blank and duplicate keywords are dropped.
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        keywords.sort();
        keywords.dedup();

        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Score `original` given the total number of redactions made in it
    pub fn score(&self, original: &str, redactions: usize) -> RiskScore {
        let raw = DENSITY_WEIGHT * density(original, redactions)
            + self.keyword_points(self.keyword_hits(original));
        RiskScore::from_raw(raw)
    }

    /// Number of distinct keywords present in `text`
    pub fn keyword_hits(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| lowered.contains(k.as_str()))
            .count()
    }

    fn keyword_points(&self, hits: usize) -> f64 {
        (hits as f64 * KEYWORD_POINTS).min(KEYWORD_CAP)
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Redactions relative to text size, in `0.0..=1.0`; zero for text with no words
pub fn density(text: &str, redactions: usize) -> f64 {
    let words = text.split_whitespace().count();
    if words == 0 {
        return 0.0;
    }
    let normalizer = (words as f64 / WORDS_PER_REDACTION).max(1.0);
    (redactions as f64 / normalizer).min(1.0)
}

/// Score with the default keyword list
pub fn score(original: &str, redactions: usize) -> RiskScore {
    RiskScorer::new().score(original, redactions)
}
