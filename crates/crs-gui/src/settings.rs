//! Persisted application settings.
//!
//! A single TOML file under the platform config directory. Missing or
//! unreadable settings fall back to defaults; the file is written on
//! first run so users have something to edit.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the customer records API.
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: crs_api::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        if !path.exists() {
            let settings = Self::default();
            if let Err(error) = settings.save() {
                tracing::warn!("failed to write default settings: {error:#}");
            }
            return settings;
        }
        match Self::read_from(&path) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(
                    "failed to load settings from {}: {error:#}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Write settings to the platform config directory.
    pub fn save(&self) -> Result<()> {
        let path = Self::path().context("no config directory available")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("serializing settings")?;
        fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn read_from(path: &Path) -> Result<Self> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&raw).context("parsing settings")
    }

    fn path() -> Option<PathBuf> {
        ProjectDirs::from("com", "customer-records", "studio")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
    }
}
