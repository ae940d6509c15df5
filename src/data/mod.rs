pub mod models;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use models::{PersistedSettings, Settings};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://www.gamerpower.com/api/giveaways";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    pub path: PathBuf,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 Giveaway Notes".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    pub vault: VaultConfig,
    pub fetch: FetchConfig,
    pub settings: Settings,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    vault: VaultConfig,
    #[serde(default)]
    fetch: FetchConfig,
    #[serde(default)]
    settings: PersistedSettings,
}

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            debug!("No config at {}, using defaults", self.path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;

        Ok(Config {
            vault: file.vault,
            fetch: file.fetch,
            settings: Settings::merge(file.settings),
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let content = toml::to_string_pretty(config)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("config.toml"));

        let config = store.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.fetch.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn partial_file_is_merged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [vault]
            path = "/notes"

            [settings]
            dailyUpdateEnabled = true
            dailyUpdateInterval = 12
            "#,
        )
        .unwrap();

        let config = Store::new(&path).load().unwrap();
        assert_eq!(config.vault.path, PathBuf::from("/notes"));
        assert_eq!(config.fetch, FetchConfig::default());
        assert!(config.settings.daily_update_enabled);
        assert_eq!(config.settings.daily_update_interval, 12);
        assert_eq!(config.settings.folder_name, "Game Giveaways");
    }

    #[test]
    fn save_then_load_keeps_changes() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested").join("config.toml"));

        let mut config = Config::default();
        config.settings.folder_name = "Freebies".to_string();
        config.settings.auto_update = true;
        config.settings.epic_scheduled = true;
        store.save(&config).unwrap();

        let written = std::fs::read_to_string(store.path()).unwrap();
        assert!(written.contains("folderName = \"Freebies\""));
        assert!(written.contains("epicScheduled = true"));

        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "settings = [").unwrap();

        assert!(Store::new(&path).load().is_err());
    }
}
