use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A class of sensitive data recognized by the pattern matcher.
///
/// Variants are declared in detection priority order: more specific shapes
/// come first so a generic detector never claims part of a specific token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AwsKey,
    Jwt,
    Url,
    Email,
    Ipv4,
    Phone,
    Secret,
}

impl Category {
    /// Every category, in the order detectors run
    pub const ALL: [Category; 7] = [
        Category::AwsKey,
        Category::Jwt,
        Category::Url,
        Category::Email,
        Category::Ipv4,
        Category::Phone,
        Category::Secret,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AwsKey => "aws_key",
            Category::Jwt => "jwt",
            Category::Url => "url",
            Category::Email => "email",
            Category::Ipv4 => "ipv4",
            Category::Phone => "phone",
            Category::Secret => "secret",
        }
    }

    /// Token substituted for a match.
    ///
    /// For [`Category::Secret`] only the value is replaced; the key and its
    /// separator stay in the text in front of the placeholder.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Category::AwsKey => "[REDACTED_AWS_KEY]",
            Category::Jwt => "[REDACTED_JWT]",
            Category::Url => "[REDACTED_URL]",
            Category::Email => "[REDACTED_EMAIL]",
            Category::Ipv4 => "[REDACTED_IP]",
            Category::Phone => "[REDACTED_PHONE]",
            Category::Secret => "[REDACTED_SECRET]",
        }
    }

    /// Key used for this category in the `counts` object of API responses
    pub fn counter_key(&self) -> &'static str {
        match self {
            Category::AwsKey => "aws_keys",
            Category::Jwt => "jwts",
            Category::Url => "urls",
            Category::Email => "emails",
            Category::Ipv4 => "ips",
            Category::Phone => "phones",
            Category::Secret => "secrets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted || c.counter_key() == wanted)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let position = |c: Category| Category::ALL.iter().position(|x| *x == c).unwrap();

        assert!(position(Category::AwsKey) < position(Category::Secret));
        assert!(position(Category::Jwt) < position(Category::Secret));
        assert!(position(Category::AwsKey) < position(Category::Url));
        assert!(position(Category::Jwt) < position(Category::Url));
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("aws_key".parse::<Category>().unwrap(), Category::AwsKey);
        assert_eq!("IPS".parse::<Category>().unwrap(), Category::Ipv4);
        assert!("ssn".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Category::Ipv4).unwrap();
        assert_eq!(json, "\"ipv4\"");

        let parsed: Category = serde_json::from_str("\"aws_key\"").unwrap();
        assert_eq!(parsed, Category::AwsKey);
    }

    #[test]
    fn test_placeholders_are_distinct() {
        let mut placeholders: Vec<_> = Category::ALL.iter().map(|c| c.placeholder()).collect();
        placeholders.sort();
        placeholders.dedup();
        assert_eq!(placeholders.len(), Category::ALL.len());
    }
}
