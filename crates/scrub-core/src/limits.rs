use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Size limits for submitted text.
///
/// The matcher itself accepts any length; callers that take text from users
/// check it here first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            max_words: default_max_words(),
        }
    }
}

fn default_max_chars() -> usize {
    10_000
}

fn default_max_words() -> usize {
    2_000
}

impl Limits {
    pub fn check(&self, text: &str) -> Result<()> {
        let chars = text.chars().count();
        if chars > self.max_chars {
            return Err(Error::InputTooLarge(format!(
                "{} characters (limit {})",
                chars, self.max_chars
            )));
        }

        let words = text.split_whitespace().count();
        if words > self.max_words {
            return Err(Error::InputTooLarge(format!(
                "{} words (limit {})",
                words, self.max_words
            )));
        }

        Ok(())
    }
}
