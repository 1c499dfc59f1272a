//! Platform directory resolution.

use std::path::{Path, PathBuf};

use crate::error::AppError;

const APP_NAME: &str = "verdant";

/// OS-specific directories used by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `verdant.ron`.
    pub config_dir: PathBuf,
    /// Holds the debug-build JSON log.
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Directories under the OS configuration directory
    /// (XDG on Linux, Known Folders on Windows, Library on macOS).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoConfigDir`] if the OS does not expose one.
    pub fn resolve() -> Result<Self, AppError> {
        let base = dirs::config_dir().ok_or(AppError::NoConfigDir)?;
        Ok(Self::with_root(&base.join(APP_NAME)))
    }

    /// Directories rooted at an explicit config directory, as given by
    /// `--config`.
    pub fn with_root(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
            log_dir: config_dir.join("logs"),
        }
    }

    /// `--config` when given, otherwise [`resolve`](Self::resolve).
    pub fn from_override(config_dir: Option<&Path>) -> Result<Self, AppError> {
        match config_dir {
            Some(dir) => Ok(Self::with_root(dir)),
            None => Self::resolve(),
        }
    }
}
