use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Per-category match counts for one redaction pass.
///
/// Field names are the keys existing API consumers read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionCounts {
    pub emails: usize,
    pub ips: usize,
    pub secrets: usize,
    pub urls: usize,
    pub aws_keys: usize,
    pub jwts: usize,
    pub phones: usize,
}

impl RedactionCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::AwsKey => self.aws_keys,
            Category::Jwt => self.jwts,
            Category::Url => self.urls,
            Category::Email => self.emails,
            Category::Ipv4 => self.ips,
            Category::Phone => self.phones,
            Category::Secret => self.secrets,
        }
    }

    pub fn add(&mut self, category: Category, n: usize) {
        let slot = match category {
            Category::AwsKey => &mut self.aws_keys,
            Category::Jwt => &mut self.jwts,
            Category::Url => &mut self.urls,
            Category::Email => &mut self.emails,
            Category::Ipv4 => &mut self.ips,
            Category::Phone => &mut self.phones,
            Category::Secret => &mut self.secrets,
        };
        *slot += n;
    }

    /// Sum across all categories
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Counts in detection priority order
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// A span flagged by an entity detector, in byte offsets of the original text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: String,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl EntitySpan {
    pub fn placeholder(&self) -> String {
        format!("[REDACTED_{}]", self.label.to_ascii_uppercase())
    }
}

/// Output of one matching pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionResult {
    pub redacted: String,
    pub counts: RedactionCounts,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EntitySpan>,
}

impl RedactionResult {
    pub fn total(&self) -> usize {
        self.counts.total()
    }
}

/// Estimated sensitivity of a text, always within `0..=100`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MAX: RiskScore = RiskScore(100);

    /// Round and clamp a raw score. NaN maps to zero.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return RiskScore(0);
        }
        RiskScore(raw.round().clamp(0.0, 100.0) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<RiskScore> for u8 {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}
