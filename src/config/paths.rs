//! Path resolution for rundist configuration and data files.
//!
//! All rundist data is stored in `~/.rundist/`:
//! - `config.yaml` - Main configuration file
//! - `rundist.db` - `SQLite` database holding session history

use std::path::PathBuf;

use crate::error::RunDistError;

/// Paths to rundist configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.rundist/`
    pub root: PathBuf,
    /// Config file: `~/.rundist/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.rundist/rundist.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RunDistError> {
        let home = std::env::var("HOME").map_err(|_| {
            RunDistError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".rundist")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("rundist.db"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            log::warn!("HOME is not set; using ./.rundist");
            Self::with_root(PathBuf::from(".rundist"))
        })
    }
}
