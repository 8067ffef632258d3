//! Pluggable detection of named entities
//!
//! The built-in patterns are always applied. An [`EntityDetector`] adds spans
//! on top of them, e.g. from a model or a dictionary of known names.

use regex::Regex;
use scrub_core::{EntitySpan, Error, Result};
use std::collections::HashMap;

/// Capability to flag additional entities in text
pub trait EntityDetector: Send + Sync {
    fn name(&self) -> &str;

    /// Spans in byte offsets of `text`
    fn detect(&self, text: &str) -> Vec<EntitySpan>;

    fn enabled(&self) -> bool {
        true
    }
}

/// Default detector: patterns only
pub struct NoEntities;

impl EntityDetector for NoEntities {
    fn name(&self) -> &str {
        "none"
    }

    fn detect(&self, _text: &str) -> Vec<EntitySpan> {
        Vec::new()
    }

    fn enabled(&self) -> bool {
        false
    }
}

/// Case-insensitive whole-word dictionary of labelled terms
pub struct TermDetector {
    regex: Regex,
    labels: HashMap<String, String>,
}

impl TermDetector {
    /// Build from `(label, terms)` groups. Blank terms are ignored.
    pub fn new(groups: &[(String, Vec<String>)]) -> Result<Self> {
        let mut labels = HashMap::new();
        for (label, terms) in groups {
            let label = label.trim().to_ascii_uppercase();
            for term in terms.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
                labels
                    .entry(term.to_lowercase())
                    .or_insert_with(|| label.clone());
            }
        }

        if labels.is_empty() {
            return Err(Error::InvalidPattern("no entity terms configured".to_string()));
        }

        // Longest first so "Acme Corp" wins over "Acme"
        let mut terms: Vec<&String> = labels.keys().collect();
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternatives: Vec<String> = terms.iter().map(|t| word_bounded(t)).collect();
        let pattern = format!("(?i)(?:{})", alternatives.join("|"));
        let regex = Regex::new(&pattern).map_err(|e| Error::InvalidPattern(e.to_string()))?;

        Ok(Self { regex, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn word_bounded(term: &str) -> String {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let mut out = String::new();
    if is_word(term.chars().next()) {
        out.push_str(r"\b");
    }
    out.push_str(&regex::escape(term));
    if is_word(term.chars().last()) {
        out.push_str(r"\b");
    }
    out
}

impl EntityDetector for TermDetector {
    fn name(&self) -> &str {
        "terms"
    }

    fn detect(&self, text: &str) -> Vec<EntitySpan> {
        self.regex
            .find_iter(text)
            .map(|m| {
                let label = self
                    .labels
                    .get(&m.as_str().to_lowercase())
                    .cloned()
                    .unwrap_or_else(|| "ENTITY".to_string());
                EntitySpan {
                    label,
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str().to_string(),
                }
            })
            .collect()
    }
}
