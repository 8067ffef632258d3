use anyhow::Result;
use scrub_config::Config;
use scrub_core::{EntitySpan, Limits, RedactionCounts, RiskScore};
use scrub_score::RiskScorer;
use scrub_security::{EntityDetector, NoEntities, Redactor, TermDetector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of analyzing one text: the redaction plus its risk score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub redacted: String,
    pub counts: RedactionCounts,
    pub pii_score: RiskScore,
    pub entity_detection: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EntitySpan>,
}

pub struct Analyzer {
    redactor: Redactor,
    scorer: RiskScorer,
    limits: Limits,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            redactor: Redactor::new(),
            scorer: RiskScorer::new(),
            limits: Limits::default(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let groups = config.entities.groups();
        let entities: Box<dyn EntityDetector> = if groups.is_empty() {
            Box::new(NoEntities)
        } else {
            Box::new(TermDetector::new(&groups)?)
        };
        debug!(detector = entities.name(), "Entity detection configured");

        Ok(Self {
            redactor: Redactor::with_entity_detector(entities),
            scorer: RiskScorer::with_keywords(&config.scoring.keywords),
            limits: config.limits,
        })
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Check `text` against the configured limits before analyzing it
    pub fn check(&self, text: &str) -> scrub_core::Result<()> {
        self.limits.check(text)
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        // 1. Redact
        let result = self.redactor.redact(text);

        // 2. Score the original text against the total
        let total = result.total();
        let pii_score = self.scorer.score(text, total);

        debug!(
            chars = text.len(),
            total,
            score = pii_score.value(),
            entities = result.entities.len(),
            "Analyzed text"
        );

        Analysis {
            redacted: result.redacted,
            counts: result.counts,
            pii_score,
            entity_detection: self.redactor.entity_detection_enabled(),
            entities: result.entities,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
