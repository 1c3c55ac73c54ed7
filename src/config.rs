use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{CHECK_TIMESTAMP_FORMAT, CONFIG_FILE_NAME, NEVER_CHECKED};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Last update check, `YY-MM-DD HH:MM` in local time.
    #[serde(default = "default_last_check_update")]
    pub last_check_update: String,
    #[serde(default)]
    pub disable_update: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_check_update: default_last_check_update(),
            disable_update: false,
        }
    }
}

fn default_last_check_update() -> String {
    NEVER_CHECKED.to_string()
}

impl Config {
    pub fn never_checked(&self) -> bool {
        self.last_check_update == NEVER_CHECKED
    }

    /// `None` when the stored value is the sentinel or cannot be parsed.
    pub fn last_check(&self) -> Option<NaiveDateTime> {
        if self.never_checked() {
            return None;
        }
        NaiveDateTime::parse_from_str(&self.last_check_update, CHECK_TIMESTAMP_FORMAT).ok()
    }

    pub fn mark_checked(&mut self, now: NaiveDateTime) {
        self.last_check_update = now.format(CHECK_TIMESTAMP_FORMAT).to_string();
    }
}

/// Reads and writes `config.json` beside the running executable.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn in_dir(base_dir: &Path) -> Self {
        Self {
            path: base_dir.join(CONFIG_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: a missing, unreadable or malformed file yields the default.
    pub fn load(&self) -> Config {
        match self.try_load() {
            Ok(Some(config)) => config,
            Ok(None) => Config::default(),
            Err(err) => {
                tracing::debug!(path = %self.path.display(), "falling back to default config: {err:#}");
                Config::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<Config>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config file at {}", self.path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| "failed to parse configuration from JSON".to_string())?;
        Ok(Some(config))
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write config to {}", self.path.display()))?;
        Ok(())
    }
}
