//! Settings resolved from config file, environment and flags.

use std::path::PathBuf;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::RunDistError;
use crate::features::calculator::History;
use crate::storage::SqliteStore;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub paths: Paths,
    pub format: OutputFormat,
    /// History key; flag or env var, else the config file.
    pub storage_key: String,
    pub database: PathBuf,
    pub config_file: PathBuf,
}

impl Context {
    /// Resolve settings for a parsed command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be loaded, or
    /// the storage key is empty.
    pub fn from_cli(cli: &Cli) -> Result<Self, RunDistError> {
        let paths = Paths::default();
        let config_file = cli
            .config
            .clone()
            .unwrap_or_else(|| paths.config_file.clone());
        let config = Config::load_from_path(&config_file)?;

        Self::resolve(cli, config, paths, config_file)
    }

    fn resolve(
        cli: &Cli,
        config: Config,
        paths: Paths,
        config_file: PathBuf,
    ) -> Result<Self, RunDistError> {
        let storage_key = cli
            .storage_key
            .clone()
            .unwrap_or_else(|| config.calculator.storage_key.clone());
        if storage_key.trim().is_empty() {
            return Err(RunDistError::InvalidArgument(
                "Storage key must not be empty".to_string(),
            ));
        }

        let format = cli.output.unwrap_or(config.general.default_output);
        let database = cli.database.clone().unwrap_or_else(|| paths.database.clone());

        Ok(Self {
            config,
            paths,
            format,
            storage_key,
            database,
            config_file,
        })
    }

    /// Distance unit label.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.config.calculator.distance_unit
    }

    /// Open the session history.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_history(&self) -> Result<History<SqliteStore>, RunDistError> {
        let store = SqliteStore::open_at(&self.database)?;
        Ok(History::new(store, self.storage_key.clone()))
    }
}
