use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "SKYCAST_API_KEY";

/// Default connect/read timeout for provider requests, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Top-level configuration stored on disk.
///
/// There is deliberately no default API key: the key must come from the
/// `SKYCAST_API_KEY` environment variable or from the config file, and key
/// resolution fails fast when neither is set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeatherMap API key.
    pub api_key: Option<String>,

    /// Connect and read timeout for provider requests, in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Resolve the API key: environment variable first, then config file.
    pub fn resolve_api_key(&self) -> Result<String> {
        let from_env = std::env::var(API_KEY_ENV).ok().filter(|v| !v.trim().is_empty());
        pick_api_key(from_env, self.api_key.as_deref())
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Key resolution order, split out for testability: an explicit environment
/// value wins; the config file is the fallback; no key at all is an error.
fn pick_api_key(env_value: Option<String>, file_value: Option<&str>) -> Result<String> {
    if let Some(key) = env_value {
        return Ok(key);
    }

    match file_value {
        Some(key) if !key.trim().is_empty() => Ok(key.to_string()),
        _ => Err(anyhow!(
            "No API key configured.\n\
             Hint: set the {API_KEY_ENV} environment variable, or run `skycast configure` \
             and enter your OpenWeatherMap API key."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_wins_over_file() {
        let key = pick_api_key(Some("ENV_KEY".into()), Some("FILE_KEY")).unwrap();
        assert_eq!(key, "ENV_KEY");
    }

    #[test]
    fn file_value_is_the_fallback() {
        let key = pick_api_key(None, Some("FILE_KEY")).unwrap();
        assert_eq!(key, "FILE_KEY");
    }

    #[test]
    fn missing_key_fails_fast_with_hint() {
        let err = pick_api_key(None, None).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("skycast configure"));
    }

    #[test]
    fn blank_file_key_counts_as_missing() {
        assert!(pick_api_key(None, Some("  ")).is_err());
    }

    #[test]
    fn timeout_defaults_to_five_seconds() {
        let cfg = Config::default();
        assert_eq!(cfg.timeout_secs(), DEFAULT_TIMEOUT_SECS);

        let cfg = Config { timeout_secs: Some(10), ..Config::default() };
        assert_eq!(cfg.timeout_secs(), 10);
    }

    #[test]
    fn set_api_key_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("MY_KEY".into());

        let serialized = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.api_key.as_deref(), Some("MY_KEY"));
    }
}
