use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

impl ThemeMode {
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub search_endpoint: String,
    pub max_results: u32,
    pub connect_timeout_seconds: u64,
    pub read_timeout_seconds: u64,
    pub connectivity_timeout_seconds: u64,
    pub thumbnail_fetch_concurrency: usize,
    pub theme_mode: ThemeMode,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            search_endpoint: global_constants::GOOGLE_BOOKS_API_URL.to_string(),
            max_results: global_constants::DEFAULT_MAX_RESULTS,
            connect_timeout_seconds: global_constants::DEFAULT_CONNECT_TIMEOUT_SECONDS,
            read_timeout_seconds: global_constants::DEFAULT_READ_TIMEOUT_SECONDS,
            connectivity_timeout_seconds: global_constants::DEFAULT_CONNECTIVITY_TIMEOUT_SECONDS,
            thumbnail_fetch_concurrency: global_constants::DEFAULT_THUMBNAIL_FETCH_CONCURRENCY,
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserSettings {
    /// Reads the settings file if one exists. The file is never written.
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Search endpoint: {}", settings.search_endpoint);
        log::debug!("[SETTINGS] Max results: {}", settings.max_results);

        Ok(settings.sanitized())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_seconds)
    }

    pub fn connectivity_timeout(&self) -> Duration {
        Duration::from_secs(self.connectivity_timeout_seconds)
    }

    fn sanitized(mut self) -> Self {
        if self.thumbnail_fetch_concurrency == 0 {
            log::warn!("[SETTINGS] thumbnail_fetch_concurrency of 0 is invalid, fetching serially");
            self.thumbnail_fetch_concurrency = 1;
        }
        if self.max_results == 0 {
            log::warn!(
                "[SETTINGS] max_results of 0 is invalid, using {}",
                global_constants::DEFAULT_MAX_RESULTS
            );
            self.max_results = global_constants::DEFAULT_MAX_RESULTS;
        }
        self
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
