use crate::models::INITIAL_SECURITY_SCORE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_monitor_interval_ms")]
    pub monitor_interval_ms: u64,
    #[serde(default = "default_watch_refresh_ms")]
    pub watch_refresh_ms: u64,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_initial_security_score")]
    pub initial_security_score: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            monitor_interval_ms: default_monitor_interval_ms(),
            watch_refresh_ms: default_watch_refresh_ms(),
            feed: FeedConfig::default(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            initial_security_score: default_initial_security_score(),
        }
    }
}

impl Config {
    /// Loads the config from an explicit path or the default location,
    /// falling back to defaults when no file exists.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(default_config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&config_path).map_err(|err| {
            anyhow::anyhow!("failed to read config file {}: {err}", config_path.display())
        })?;
        let cfg = Self::from_yaml_str(&raw).map_err(|err| {
            anyhow::anyhow!("invalid YAML in config file {}: {err}", config_path.display())
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.monitor_interval_ms == 0 {
            anyhow::bail!("invalid monitor_interval_ms: 0 (must be positive)");
        }
        if self.watch_refresh_ms == 0 {
            anyhow::bail!("invalid watch_refresh_ms: 0 (must be positive)");
        }
        Ok(())
    }
}

fn default_monitor_interval_ms() -> u64 {
    2_000
}

fn default_watch_refresh_ms() -> u64 {
    700
}

fn default_initial_security_score() -> f64 {
    INITIAL_SECURITY_SCORE
}

pub fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/vigil/config.yaml")
    } else {
        PathBuf::from("/etc/vigil/config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn default_config_yaml_parses() {
        let parsed = Config::from_yaml_str(include_str!("../config/default.yaml"))
            .expect("default.yaml should parse");
        assert_eq!(parsed.monitor_interval_ms, 2_000);
        assert_eq!(parsed.watch_refresh_ms, 700);
        assert_eq!(parsed.feed.initial_security_score, 85.0);
    }

    #[test]
    fn config_with_all_fields_set_parses() {
        let yaml = r#"
monitor_interval_ms: 250
watch_refresh_ms: 100
feed:
  initial_security_score: 72.5
"#;
        let parsed = Config::from_yaml_str(yaml).expect("all-fields config should parse");
        assert_eq!(parsed.monitor_interval_ms, 250);
        assert_eq!(parsed.watch_refresh_ms, 100);
        assert_eq!(parsed.feed.initial_security_score, 72.5);
    }

    #[test]
    fn empty_yaml_falls_back_to_field_defaults() {
        let parsed = Config::from_yaml_str("{}").expect("empty mapping should parse");
        assert_eq!(parsed.monitor_interval_ms, 2_000);
        assert_eq!(parsed.feed.initial_security_score, 85.0);
    }

    #[test]
    fn zero_interval_fails_validation() {
        let parsed = Config::from_yaml_str("monitor_interval_ms: 0").expect("parses");
        assert!(parsed.validate().is_err());
    }
}
