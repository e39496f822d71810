//! Persistent settings for the skin subsystem (`skins.toml`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkinError};

/// Skin-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinsConfig {
    /// Last skin loaded successfully.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<PathBuf>,
    /// Where `install` copies skin archives.
    #[serde(default = "default_user_skin_dir")]
    pub user_skin_dir: PathBuf,
    /// Installation data directory holding `Skins/Default`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_user_skin_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("audacious")
        .join("Skins")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("/usr/share/audacious")
}

impl Default for SkinsConfig {
    fn default() -> Self {
        Self {
            skin: None,
            user_skin_dir: default_user_skin_dir(),
            data_dir: default_data_dir(),
        }
    }
}

impl SkinsConfig {
    /// Conventional location: `<config dir>/audacious/skins.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("audacious").join("skins.toml"))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SkinError::Config(format!("skins.toml: {e}")))
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Write settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The bundled fallback skin.
    pub fn default_skin_dir(&self) -> PathBuf {
        self.data_dir.join("Skins").join("Default")
    }
}
