//! Skin path resolution: directories, archives, and case-insensitive lookup.
//!
//! A skin is either a plain directory or a compressed archive. Archives are
//! unpacked into a private temporary directory that lives exactly as long
//! as the [`SkinSource`] describing it, so every load attempt cleans up
//! after itself whether it succeeds or not.

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Component, Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Result, SkinError};

/// Archive formats recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// `.zip` or `.wsz`.
    Zip,
    /// `.tar`.
    Tar,
    /// `.tgz` or `.tar.gz`.
    TarGz,
    /// `.tbz2` or `.tar.bz2`.
    TarBz2,
}

impl ArchiveKind {
    /// Classify `path` by its extension, case-insensitively.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_ascii_lowercase();
        let has = |exts: &[&str]| exts.iter().any(|ext| name.ends_with(ext));
        if has(&[".zip", ".wsz"]) {
            Some(ArchiveKind::Zip)
        } else if has(&[".tgz", ".tar.gz"]) {
            Some(ArchiveKind::TarGz)
        } else if has(&[".tbz2", ".tar.bz2"]) {
            Some(ArchiveKind::TarBz2)
        } else if has(&[".tar"]) {
            Some(ArchiveKind::Tar)
        } else {
            None
        }
    }
}

/// Whether `path` names a skin archive rather than a directory.
pub fn is_archive(path: &Path) -> bool {
    ArchiveKind::detect(path).is_some()
}

/// The on-disk root of a skin being loaded.
#[derive(Debug)]
pub struct SkinSource {
    origin: PathBuf,
    root: PathBuf,
    extracted: Option<TempDir>,
}

impl SkinSource {
    /// Resolve `path` to a readable skin root.
    ///
    /// Directories are used in place. Archives are extracted into a fresh
    /// temporary directory, which is removed when the returned value is
    /// dropped. A failed extraction leaves nothing behind.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_in(path, &std::env::temp_dir())
    }

    /// Like [`SkinSource::open`], extracting archives below `temp_parent`.
    pub fn open_in(path: &Path, temp_parent: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SkinError::NotFound(path.display().to_string()));
        }

        if path.is_dir() {
            return Ok(Self {
                origin: path.to_path_buf(),
                root: path.to_path_buf(),
                extracted: None,
            });
        }

        let Some(kind) = ArchiveKind::detect(path) else {
            return Err(SkinError::NotFound(format!(
                "{}: not a skin directory or archive",
                path.display()
            )));
        };

        log::debug!("Extracting {kind:?} skin archive {}", path.display());
        let dir = tempfile::Builder::new()
            .prefix("skin-")
            .tempdir_in(temp_parent)?;
        // On error `dir` is dropped here and the partial tree removed.
        match kind {
            ArchiveKind::Zip => extract_zip(path, dir.path())?,
            tarball => extract_tar(path, tarball, dir.path())?,
        }
        Ok(Self {
            origin: path.to_path_buf(),
            root: dir.path().to_path_buf(),
            extracted: Some(dir),
        })
    }

    /// The path the caller asked for.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// The directory holding the skin's files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_extracted(&self) -> bool {
        self.extracted.is_some()
    }
}

/// Unpack a zip archive into `dest`, flattening directory structure.
///
/// Every file entry is written under its base name, matching how classic
/// skins are distributed (some archives wrap everything in a folder).
/// Entries whose names escape the archive are rejected.
pub fn extract_zip(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| SkinError::Archive(format!("{}: {e}", archive_path.display())))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| SkinError::Archive(format!("{}: {e}", archive_path.display())))?;
        if entry.is_dir() {
            continue;
        }
        let Some(name) = entry.enclosed_name() else {
            return Err(SkinError::Archive(format!(
                "{}: unsafe entry name {:?}",
                archive_path.display(),
                entry.name()
            )));
        };
        let Some(base) = name.file_name() else {
            continue;
        };
        let mut out = File::create(dest.join(base))?;
        io::copy(&mut entry, &mut out)?;
    }
    Ok(())
}

/// Unpack a plain, gzip or bzip2 tarball into `dest`, flattened like
/// [`extract_zip`]. Links and other special entries are skipped.
pub fn extract_tar(archive_path: &Path, kind: ArchiveKind, dest: &Path) -> Result<()> {
    let archive_err = |e: io::Error| SkinError::Archive(format!("{}: {e}", archive_path.display()));

    let file = BufReader::new(File::open(archive_path)?);
    let reader: Box<dyn Read> = match kind {
        ArchiveKind::TarGz => Box::new(flate2::read::GzDecoder::new(file)),
        ArchiveKind::TarBz2 => Box::new(bzip2::read::BzDecoder::new(file)),
        _ => Box::new(file),
    };

    let mut archive = tar::Archive::new(reader);
    for entry in archive.entries().map_err(archive_err)? {
        let mut entry = entry.map_err(archive_err)?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let name = entry.path().map_err(archive_err)?.into_owned();
        if name
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(SkinError::Archive(format!(
                "{}: unsafe entry name {:?}",
                archive_path.display(),
                name
            )));
        }
        let Some(base) = name.file_name() else {
            continue;
        };
        let mut out = File::create(dest.join(base))?;
        io::copy(&mut entry, &mut out).map_err(archive_err)?;
    }
    Ok(())
}

/// Find `name` in `dir`, ignoring ASCII case.
///
/// An exact match is tried first; otherwise the directory is scanned.
pub fn find_file_case(dir: &Path, name: &str) -> Option<PathBuf> {
    let exact = dir.join(name);
    if exact.is_file() {
        return Some(exact);
    }

    let entries = fs::read_dir(dir).ok()?;
    entries
        .filter_map(|e| e.ok())
        .find(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
                && e.path().is_file()
        })
        .map(|e| e.path())
}

/// Return the first of `candidates` present in `dir` (case-insensitively).
pub fn find_first<S: AsRef<str>>(dir: &Path, candidates: &[S]) -> Option<PathBuf> {
    candidates
        .iter()
        .find_map(|name| find_file_case(dir, name.as_ref()))
}
