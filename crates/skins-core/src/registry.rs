//! The active skin and the operations that replace it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::config::SkinsConfig;
use crate::error::{Result, SkinError};
use crate::pixmap::check_pixmaps;
use crate::resolver::{SkinSource, is_archive};
use crate::skin::Skin;

/// Emitted after the active skin changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinEvent {
    Changed { path: PathBuf, generation: u64 },
}

/// Lifecycle of the registry's active skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Unloaded,
    Loaded,
}

/// Owns the single active [`Skin`].
///
/// Loads build a complete new skin before touching the active one, so a
/// failed load leaves the previous skin exactly as it was.
#[derive(Debug)]
pub struct SkinRegistry {
    active: Skin,
    generation: u64,
    config: SkinsConfig,
    listeners: Vec<Sender<SkinEvent>>,
}

impl SkinRegistry {
    pub fn new(config: SkinsConfig) -> Self {
        Self {
            active: Skin::default(),
            generation: 0,
            config,
            listeners: Vec::new(),
        }
    }

    /// Load `path`, or the bundled default skin if that fails or no path is
    /// given. Errors only when the default cannot be loaded either.
    pub fn init(&mut self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(p) => match self.load(p) {
                Ok(()) => return Ok(()),
                Err(e) => log::warn!("Unable to load skin {} ({e}), trying default", p.display()),
            },
            None => log::info!("No skin configured, trying default"),
        }

        let fallback = self.config.default_skin_dir();
        self.load(&fallback).inspect_err(|e| {
            log::error!("Unable to load default skin {}: {e}", fallback.display());
        })
    }

    /// Load `path` unless it is already the active skin.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.load_with(path, false)
    }

    /// Load `path` and make it active.
    ///
    /// Without `force`, asking for the skin that is already active fails
    /// with [`SkinError::AlreadyLoaded`]. Archive extraction is cleaned up
    /// before returning either way.
    pub fn load_with(&mut self, path: &Path, force: bool) -> Result<()> {
        if !force && self.active.path() == Some(path) {
            return Err(SkinError::AlreadyLoaded(path.display().to_string()));
        }

        let skin = {
            let source = SkinSource::open(path)?;
            Skin::load_from(&source).inspect_err(|e| {
                log::warn!("Loading skin {} failed: {e}", path.display());
            })?
        };

        self.active = skin;
        self.generation += 1;
        self.config.skin = Some(path.to_path_buf());
        log::info!("Loaded skin {} (generation {})", path.display(), self.generation);
        self.notify(SkinEvent::Changed {
            path: path.to_path_buf(),
            generation: self.generation,
        });
        Ok(())
    }

    /// Check that `path` resolves and provides every pixmap, without
    /// decoding anything.
    pub fn validate(path: &Path) -> Result<()> {
        let source = SkinSource::open(path)?;
        check_pixmaps(source.root())
    }

    /// Copy the skin archive at `path` into the user skin directory,
    /// creating it if needed. Returns the installed path.
    pub fn install(&self, path: &Path) -> Result<PathBuf> {
        if !is_archive(path) {
            return Err(SkinError::Archive(format!(
                "{}: not a skin archive",
                path.display()
            )));
        }
        let dir = &self.config.user_skin_dir;
        create_skin_dir(dir).inspect_err(|e| {
            log::error!("Failed to create {}: {e}", dir.display());
        })?;

        let name = path
            .file_name()
            .ok_or_else(|| SkinError::NotFound(path.display().to_string()))?;
        let target = dir.join(name);
        fs::copy(path, &target).map_err(|e| {
            log::error!("Failed to install {} to {}: {e}", path.display(), target.display());
            SkinError::Io(e)
        })?;
        log::info!("Installed {}", target.display());
        Ok(target)
    }

    /// Receive a [`SkinEvent`] for every subsequent successful load.
    pub fn subscribe(&mut self) -> Receiver<SkinEvent> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    fn notify(&mut self, event: SkinEvent) {
        self.listeners.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn active(&self) -> &Skin {
        &self.active
    }

    pub fn state(&self) -> RegistryState {
        if self.active.is_loaded() {
            RegistryState::Loaded
        } else {
            RegistryState::Unloaded
        }
    }

    /// Number of successful loads so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SkinsConfig {
        &self.config
    }
}

fn create_skin_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir)
}
