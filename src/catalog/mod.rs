//! Catalog data model: books and cart lines.

use serde::{Deserialize, Serialize};

mod seed;

pub use seed::seed_books;

/// Reading level of a catalog item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Middle,
    Pro,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Beginner => write!(f, "Beginner"),
            Level::Middle => write!(f, "Middle"),
            Level::Pro => write!(f, "Pro"),
        }
    }
}

/// A single catalog item.
///
/// The collection of books is created once at engine start-up and only
/// `amount` ever changes afterwards, through the purchase operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier, stable for the process lifetime
    pub id: u32,

    pub title: String,

    pub author: String,

    /// Price in currency units, non-negative
    pub price: f64,

    pub level: Level,

    /// Keywords matched exactly against the search query
    #[serde(default)]
    pub tags: Vec<String>,

    /// Remaining stock; never goes negative
    pub amount: u32,
}

/// One purchase request line: a book reference plus a requested quantity.
///
/// Ephemeral — exists only as purchase input, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub book_id: u32,
    pub amount: u32,
}

impl CartItem {
    pub fn new(book_id: u32, amount: u32) -> Self {
        Self { book_id, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_book_json_round_trip() {
        let book = Book {
            id: 3,
            title: "The Rust Programming Language".to_string(),
            author: "Steve Klabnik".to_string(),
            price: 29.95,
            level: Level::Middle,
            tags: vec!["rust".to_string(), "systems".to_string()],
            amount: 4,
        };

        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn test_level_serializes_as_plain_name() {
        let json = serde_json::to_string(&Level::Pro).unwrap();
        assert_eq!(json, "\"Pro\"");

        let parsed: Level = serde_json::from_str("\"Beginner\"").unwrap();
        assert_eq!(parsed, Level::Beginner);
    }

    #[test]
    fn test_book_tags_default_to_empty() {
        let json = r#"{"id":1,"title":"T","author":"A","price":9.5,"level":"Beginner","amount":2}"#;
        let parsed: Book = serde_json::from_str(json).unwrap();
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn test_seed_covers_every_level_and_price_bracket() {
        let books = seed_books();

        assert!(books.iter().any(|b| b.level == Level::Beginner));
        assert!(books.iter().any(|b| b.level == Level::Middle));
        assert!(books.iter().any(|b| b.level == Level::Pro));

        assert!(books.iter().any(|b| b.price < 15.0));
        assert!(books.iter().any(|b| b.price >= 15.0 && b.price < 30.0));
        assert!(books.iter().any(|b| b.price >= 30.0));
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let books = seed_books();
        let mut ids: Vec<u32> = books.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), books.len());
    }
}
