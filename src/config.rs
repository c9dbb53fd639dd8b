use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::rank::Combine;
use crate::scoring::{RankingEngine, DEFAULT_RECENCY_WINDOW_DAYS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Days after which an entry earns no recency score.
    /// Set to 0 to disable recency scoring.
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: f64,

    #[serde(default)]
    pub combine: Combine,

    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default = "default_highlight")]
    pub highlight: bool,
}

fn default_recency_window_days() -> f64 {
    DEFAULT_RECENCY_WINDOW_DAYS as f64
}
fn default_max_results() -> usize {
    20
}
fn default_highlight() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recency_window_days: default_recency_window_days(),
            combine: Combine::default(),
            max_results: default_max_results(),
            highlight: default_highlight(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse {:?}: {}", path, e)))?;
            log::debug!("Loaded config from {:?}", path);
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Builds a ranking engine using this config's recency window.
    pub fn engine(&self) -> RankingEngine {
        let millis = (self.recency_window_days.max(0.0) * 86_400_000.0) as i64;
        RankingEngine::new().with_recency_window(chrono::Duration::milliseconds(millis))
    }
}

pub fn histrank_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".histrank"))
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(histrank_dir()?.join("config.toml"))
}
