use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "stardeck";

/// Environment variable consulted when no key is stored in the config file.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai: Option<AiConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windowed: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiConfig {
    /// API key for the hosted generation endpoint. If not set, falls back to
    /// the GEMINI_API_KEY environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `stardeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# Stardeck configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Resolve the generation API key from config or environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.ai.as_ref().and_then(|ai| ai.api_key.as_ref()) {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
    }

    pub fn model(&self) -> String {
        self.ai
            .as_ref()
            .and_then(|ai| ai.model.clone())
            .unwrap_or_else(|| crate::ai::DEFAULT_MODEL.to_string())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "cosmic" | "daylight" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'cosmic' or 'daylight'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.windowed" => {
                let parsed: bool = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid windowed: {value}. Must be 'true' or 'false'."))?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .windowed = Some(parsed);
            }
            "ai.model" => {
                self.ai.get_or_insert_with(AiConfig::default).model = Some(value.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.windowed, ai.model"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_theme_validates() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "neon").is_err());
        config.set("defaults.theme", "daylight").unwrap();
        assert_eq!(
            config.defaults.as_ref().and_then(|d| d.theme.as_deref()),
            Some("daylight")
        );
    }

    #[test]
    fn test_set_unknown_key_is_error() {
        let mut config = Config::default();
        let err = config.set("defaults.nope", "1").unwrap_err().to_string();
        assert!(err.contains("Unknown config key"), "unexpected: {err}");
    }

    #[test]
    fn test_config_key_takes_priority_over_env() {
        let config = Config {
            ai: Some(AiConfig {
                api_key: Some("from-config".to_string()),
                model: None,
            }),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("from-config"));
    }

    #[test]
    fn test_model_defaults() {
        assert_eq!(Config::default().model(), crate::ai::DEFAULT_MODEL);
    }
}
