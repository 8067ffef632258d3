use scrub_core::Limits;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for scrub
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub limits: Limits,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub entities: EntitiesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

/// Dictionary terms for entity detection, grouped by label
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntitiesConfig {
    #[serde(default)]
    pub terms: Vec<EntityTerms>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityTerms {
    pub label: String,

    #[serde(default)]
    pub values: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_keywords() -> Vec<String> {
    scrub_score::DEFAULT_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}

impl EntitiesConfig {
    /// `(label, terms)` groups, skipping labels with no terms
    pub fn groups(&self) -> Vec<(String, Vec<String>)> {
        self.terms
            .iter()
            .filter(|t| !t.values.is_empty())
            .map(|t| (t.label.clone(), t.values.clone()))
            .collect()
    }
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "scrub", "scrub") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.scrub/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.limits.max_chars, 10_000);
        assert_eq!(config.limits.max_words, 2_000);
        assert!(config.scoring.keywords.contains(&"password".to_string()));
        assert!(config.entities.terms.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.scoring.keywords, config.scoring.keywords);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[server]
port = 8080

[limits]
max_chars = 500

[[entities.terms]]
label = "person"
values = ["Jane Doe", "John Smith"]

[[entities.terms]]
label = "org"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.limits.max_chars, 500);
        assert_eq!(config.limits.max_words, 2_000);
        assert_eq!(config.entities.terms.len(), 2);

        let groups = config.entities.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "person");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nkeywords = [\"salary\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.scoring.keywords, vec!["salary".to_string()]);
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
