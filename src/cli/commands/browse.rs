use std::path::PathBuf;

use async_trait::async_trait;

use super::{open_engine, CommandHandler};
use crate::engine::{LevelFilter, PriceFilter, SearchRequest};
use crate::Result;

/// Handler for the `browse` command
pub struct BrowseCommand {
    pub data_dir: Option<PathBuf>,
    pub query: String,
    pub price: PriceFilter,
    pub level: LevelFilter,
    pub offset: usize,
    pub limit: usize,
}

impl BrowseCommand {
    /// Create new browse command
    pub fn new(
        data_dir: Option<PathBuf>,
        query: String,
        price: PriceFilter,
        level: LevelFilter,
        offset: usize,
        limit: usize,
    ) -> Self {
        Self {
            data_dir,
            query,
            price,
            level,
            offset,
            limit,
        }
    }
}

#[async_trait]
impl CommandHandler for BrowseCommand {
    async fn execute(&self) -> Result<()> {
        let engine = open_engine(self.data_dir.as_deref())?;

        let req = SearchRequest {
            query: self.query.clone(),
            price: self.price,
            level: self.level,
            offset: self.offset,
            limit: self.limit,
        };
        let page = engine.search(&req).await;

        if page.books.is_empty() {
            println!("Not found...");
            return Ok(());
        }

        for book in &page.books {
            println!(
                "#{:<4} {:<52} {:<36} ${:>6.2}  {:<8} stock {}",
                book.id,
                book.title,
                book.author,
                book.price,
                book.level.to_string(),
                book.amount
            );
        }
        println!(
            "Showing {}-{} of {}",
            self.offset + 1,
            self.offset + page.books.len(),
            page.total
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "browse"
    }
}
