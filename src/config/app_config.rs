use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::comment::CommentAuthor;

pub const CONFIG_ENV_VAR: &str = "PROJEX_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "projex.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Desktop window title
    pub window_title: String,

    /// The signed-in user; there is no identity provider
    pub user: UserConfig,

    /// Artificial latency of the comment request, in milliseconds
    pub comment_delay_ms: u64,

    /// How long success toasts stay on screen, in milliseconds
    pub toast_duration_ms: u64,

    pub theme: Theme,

    /// One of trace, debug, info, warn, error
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserConfig {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Projex - Project Management".to_string(),
            user: UserConfig::default(),
            comment_delay_ms: 1500,
            toast_duration_ms: 3000,
            theme: Theme::Light,
            log_level: "info".to_string(),
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: "user_1".to_string(),
            name: "User".to_string(),
            image: None,
        }
    }
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl AppConfig {
    /// Load from `$PROJEX_CONFIG`, then `./projex.toml`, else defaults.
    /// A missing file at `$PROJEX_CONFIG` is created with the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_init(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::default();
        config
            .save(path)
            .with_context(|| format!("Failed to write default config to {}", path.display()))?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// An explicitly configured path wins even if the file is missing.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    }

    pub fn comment_delay(&self) -> Duration {
        Duration::from_millis(self.comment_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    pub fn comment_author(&self) -> CommentAuthor {
        CommentAuthor {
            id: self.user.id.clone(),
            name: self.user.name.clone(),
            image: self.user.image.clone(),
        }
    }
}
