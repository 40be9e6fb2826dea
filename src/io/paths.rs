use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::{BookstallError, Result};

/// Path layout for bookstall's on-disk state.
#[derive(Debug, Clone)]
pub struct BookstallPaths {
    /// Base data directory
    pub data_dir: PathBuf,
}

impl BookstallPaths {
    /// Resolve the platform data directory.
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "bookstall").ok_or_else(|| {
            BookstallError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Use an explicit directory instead of the platform default.
    pub fn for_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory the catalog store writes into.
    pub fn catalog_dir(&self) -> PathBuf {
        self.data_dir.join("catalog")
    }

    /// Location of the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join(crate::config::SETTINGS_FILE)
    }

    /// Ensure the directory tree exists.
    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(self.catalog_dir())?;
        Ok(())
    }
}
