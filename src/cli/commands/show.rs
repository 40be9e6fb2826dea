use std::path::PathBuf;

use async_trait::async_trait;

use super::{open_engine, CommandHandler};
use crate::Result;

/// Handler for the `show` command
pub struct ShowCommand {
    pub data_dir: Option<PathBuf>,
    pub id: u32,
}

impl ShowCommand {
    /// Create new show command
    pub fn new(data_dir: Option<PathBuf>, id: u32) -> Self {
        Self { data_dir, id }
    }
}

#[async_trait]
impl CommandHandler for ShowCommand {
    async fn execute(&self) -> Result<()> {
        let engine = open_engine(self.data_dir.as_deref())?;

        match engine.fetch_by_id(self.id).await {
            Some(book) => {
                println!("#{} {}", book.id, book.title);
                println!("  author: {}", book.author);
                println!("  price:  ${:.2}", book.price);
                println!("  level:  {}", book.level);
                if !book.tags.is_empty() {
                    println!("  tags:   {}", book.tags.join(", "));
                }
                println!("  stock:  {}", book.amount);
            }
            None => println!("Book {} not found", self.id),
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}
