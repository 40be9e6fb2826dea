pub mod browse;
pub mod buy;
pub mod reset;
pub mod show;

use std::path::Path;

use async_trait::async_trait;

use crate::config::{self, Settings};
use crate::engine::Engine;
use crate::io::BookstallPaths;
use crate::store::FileStore;
use crate::Result;

/// Common trait for all command handlers
#[async_trait]
pub trait CommandHandler {
    /// Execute the command
    async fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Resolve the data directory, load settings and open the file store.
///
/// Precedence for the catalog location: `--data-dir` flag, then the
/// settings file's `[store].data_dir`, then the platform default.
pub(crate) fn open_store(data_dir: Option<&Path>) -> Result<(FileStore, Settings)> {
    let paths = match data_dir {
        Some(dir) => BookstallPaths::for_dir(dir),
        None => BookstallPaths::new()?,
    };
    paths.ensure_directories()?;

    let settings = config::load_or_default(paths.settings_file())?;

    let catalog_dir = match &settings.store.data_dir {
        Some(dir) => BookstallPaths::for_dir(dir).catalog_dir(),
        None => paths.catalog_dir(),
    };

    Ok((FileStore::new(catalog_dir)?, settings))
}

/// Open an engine over the configured file store.
pub(crate) fn open_engine(data_dir: Option<&Path>) -> Result<Engine<FileStore>> {
    let (store, settings) = open_store(data_dir)?;
    Ok(Engine::new(store, settings.engine_config()))
}
