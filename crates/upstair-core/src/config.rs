use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Client configuration
///
/// Loaded from a TOML file when present, defaults otherwise. The mobile
/// builds hardcoded the campus-network address; here it is just the
/// default value of a setting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

impl Config {
    /// Load config from the default location, falling back to defaults if
    /// the file does not exist yet.
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)
                .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, contents)?;
        Ok(())
    }

    /// XDG config dir on Unix, AppData on Windows
    fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("upstair");

        Ok(config_dir.join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the SearCh backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    // The development backend lives on the campus network
    "http://192.168.11.230:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How many days ahead a deadline starts to alert
    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

fn default_window_days() -> i64 {
    7
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://192.168.11.230:8000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.notifications.window_days, 7);
    }

    #[test]
    fn roundtrips_through_toml() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();

        assert!(toml.contains("base_url"));
        assert!(toml.contains("window_days"));

        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.api.base_url, config.api.base_url);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("[api]\nbase_url = \"http://localhost:8000\"\n").unwrap();
        assert_eq!(parsed.api.base_url, "http://localhost:8000");
        assert_eq!(parsed.api.timeout_secs, 10);
        assert_eq!(parsed.notifications.window_days, 7);
    }
}
