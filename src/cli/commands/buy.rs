use std::path::PathBuf;

use async_trait::async_trait;

use super::{open_engine, CommandHandler};
use crate::catalog::CartItem;
use crate::Result;

/// Handler for the `buy` command
pub struct BuyCommand {
    pub data_dir: Option<PathBuf>,
    pub items: Vec<CartItem>,
}

impl BuyCommand {
    /// Create new buy command
    pub fn new(data_dir: Option<PathBuf>, items: Vec<CartItem>) -> Self {
        Self { data_dir, items }
    }
}

#[async_trait]
impl CommandHandler for BuyCommand {
    async fn execute(&self) -> Result<()> {
        let mut engine = open_engine(self.data_dir.as_deref())?;

        engine.purchase(&self.items).await?;

        for item in &self.items {
            match engine.books().iter().find(|b| b.id == item.book_id) {
                Some(book) => println!(
                    "Bought {} x {} (stock left: {})",
                    item.amount, book.title, book.amount
                ),
                None => println!("Skipped unknown book {}", item.book_id),
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "buy"
    }
}
