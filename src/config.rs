use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::Theme;
use crate::{flog_debug, Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const DEFAULT_TYPE_SPEED: usize = 4;
pub const ACCESS_KEY_ENV: &str = "FOLIO_ACCESS_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Form relay credential. Overridden by `FOLIO_ACCESS_KEY`.
    pub access_key: Option<String>,
    pub endpoint: Option<String>,
    /// Stored theme preference; absent means light.
    pub theme: Option<Theme>,
    /// Characters revealed per typewriter tick.
    pub type_speed: Option<usize>,
}

impl Config {
    pub fn folio_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".folio"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::folio_dir()?.join("folio.toml"))
    }

    pub fn effective_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn effective_type_speed(&self) -> usize {
        self.type_speed.unwrap_or(DEFAULT_TYPE_SPEED).max(1)
    }

    pub fn initial_theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    /// Apply the environment override for the access key. Blank values count
    /// as unset.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(ACCESS_KEY_ENV) {
            if !key.trim().is_empty() {
                self.access_key = Some(key);
            }
        }
    }

    pub fn access_key(&self) -> Option<&str> {
        self.access_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        flog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            flog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        flog_debug!(
            "Config loaded: endpoint={:?} theme={:?} type_speed={:?} access_key_set={}",
            config.endpoint,
            config.theme,
            config.type_speed,
            config.access_key.is_some()
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                flog_debug!("Creating config directory: {}", dir.display());
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        flog_debug!("Config saved to {}", path.display());
        Ok(())
    }

    /// Persist only the theme preference, keeping whatever else is on disk.
    pub fn store_theme(path: &Path, theme: Theme) -> Result<()> {
        let mut on_disk = Self::load_from(path)?;
        on_disk.theme = Some(theme);
        on_disk.save_to(path)
    }
}
