use std::path::PathBuf;

use async_trait::async_trait;

use super::{open_store, CommandHandler};
use crate::catalog::seed_books;
use crate::store::{CatalogStore, CATALOG_KEY};
use crate::Result;

/// Handler for the `reset` command
pub struct ResetCommand {
    pub data_dir: Option<PathBuf>,
}

impl ResetCommand {
    /// Create new reset command
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self { data_dir }
    }
}

#[async_trait]
impl CommandHandler for ResetCommand {
    async fn execute(&self) -> Result<()> {
        let (mut store, _settings) = open_store(self.data_dir.as_deref())?;

        let books = seed_books();
        store.write(CATALOG_KEY, &serde_json::to_string(&books)?)?;
        println!("Catalog reset to {} seed books", books.len());

        Ok(())
    }

    fn name(&self) -> &'static str {
        "reset"
    }
}
