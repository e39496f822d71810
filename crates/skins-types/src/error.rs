//! Error types for the skin subsystem.

use std::io;

/// Errors produced while locating, loading, or installing a skin.
///
/// Malformed optional data (hints, regions, colors) never surfaces here; the
/// loaders substitute defaults. Only conditions that abort a load or an
/// install are represented.
#[derive(Debug, thiserror::Error)]
pub enum SkinError {
    /// The skin path, or a file inside it, does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A required pixmap slot could not be resolved to any file.
    #[error("incomplete skin: {0}")]
    Incomplete(String),

    /// The requested path is already the active skin and no reload was forced.
    #[error("skin {0} already loaded")]
    AlreadyLoaded(String),

    #[error("archive error: {0}")]
    Archive(String),

    #[error("image decode error: {0}")]
    Decode(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SkinError {
    /// Whether the failure means the caller should fall back to the default
    /// skin rather than report a hard error.
    pub fn is_not_found(&self) -> bool {
        match self {
            SkinError::NotFound(_) => true,
            SkinError::Io(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let e = SkinError::NotFound("/skins/missing".into());
        assert_eq!(format!("{e}"), "not found: /skins/missing");
    }

    #[test]
    fn incomplete_display() {
        let e = SkinError::Incomplete("missing \"titlebar\" pixmap".into());
        assert_eq!(format!("{e}"), "incomplete skin: missing \"titlebar\" pixmap");
    }

    #[test]
    fn already_loaded_display() {
        let e = SkinError::AlreadyLoaded("/skins/base".into());
        assert_eq!(format!("{e}"), "skin /skins/base already loaded");
    }

    #[test]
    fn archive_display() {
        let e = SkinError::Archive("bad central directory".into());
        assert_eq!(format!("{e}"), "archive error: bad central directory");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let e: SkinError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("skin = [[[").unwrap_err();
        let e: SkinError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn not_found_classification() {
        assert!(SkinError::NotFound("x".into()).is_not_found());
        assert!(SkinError::Io(io::Error::from(io::ErrorKind::NotFound)).is_not_found());
        assert!(!SkinError::Incomplete("x".into()).is_not_found());
        assert!(!SkinError::Io(io::Error::from(io::ErrorKind::Other)).is_not_found());
    }

    #[test]
    fn result_alias_err() {
        let r: Result<()> = Err(SkinError::Decode("truncated".into()));
        assert!(r.is_err());
    }
}
