//! Lottery settings stored in `food-lottery.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default settings file name, resolved against the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "food-lottery.toml";
/// Default preferences file, resolved against the working directory.
pub const DEFAULT_PREFERENCES_PATH: &str = "config/config.json";

/// Lottery settings (TOML).
///
/// Every field is optional in the file. A missing file yields the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LotterySettings {
    /// Path to the JSON preferences document.
    pub preferences_path: PathBuf,

    /// Fixed seed for reproducible draws. Entropy-seeded when unset.
    pub seed: Option<u64>,

    pub ui: UiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiSettings {
    /// Address the form server binds to.
    pub bind: String,
    pub port: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3002,
        }
    }
}

impl Default for LotterySettings {
    fn default() -> Self {
        Self {
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
            seed: None,
            ui: UiSettings::default(),
        }
    }
}

impl LotterySettings {
    pub fn validate(&self) -> Result<()> {
        if self.preferences_path.as_os_str().is_empty() {
            return Err(anyhow!("preferences_path must be non-empty"));
        }
        if self.ui.bind.trim().is_empty() {
            return Err(anyhow!("ui.bind must be non-empty"));
        }
        if self.ui.port == 0 {
            return Err(anyhow!("ui.port must be > 0"));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, preferences: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(path) = preferences {
            self.preferences_path = path;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Load settings from a TOML file.
///
/// If the file is missing, returns `LotterySettings::default()`.
pub fn load_settings(path: &Path) -> Result<LotterySettings> {
    if !path.exists() {
        let settings = LotterySettings::default();
        settings.validate()?;
        return Ok(settings);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let settings: LotterySettings =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    settings.validate()?;
    Ok(settings)
}
