//! The catalog query engine.
//!
//! Owns the in-memory book collection for the process lifetime and exposes
//! three operations: paginated filtered search, lookup by id, and a
//! stock-decrementing purchase. The collection is loaded once from the
//! backing store (or seeded on first run); every successful purchase writes
//! the whole collection back in one shot.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::catalog::{seed_books, Book, CartItem};
use crate::store::{CatalogStore, CATALOG_KEY};
use crate::{BookstallError, Result};

pub mod filters;
pub mod query;

pub use filters::{LevelFilter, PriceFilter};
pub use query::{MatchMode, QueryMatcher, SearchPage, SearchRequest};

/// Default simulated I/O delay applied to every operation.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// How purchase handles a batch that runs out of stock partway through.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseMode {
    /// Decrement line by line; on underflow, earlier lines in the same call
    /// stay applied in memory and nothing is persisted.
    #[default]
    Partial,
    /// Validate every line against current stock before touching anything.
    Atomic,
}

/// Engine tuning knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Simulated network latency awaited before each operation runs
    pub latency: Duration,
    pub match_mode: MatchMode,
    pub purchase_mode: PurchaseMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            match_mode: MatchMode::default(),
            purchase_mode: PurchaseMode::default(),
        }
    }
}

impl EngineConfig {
    /// Config with no simulated latency, for deterministic callers and tests.
    pub fn immediate() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// The catalog query engine.
///
/// All mutation funnels through [`Engine::purchase`]; `search` and
/// `fetch_by_id` are read-only. Purchase takes `&mut self`, so mutation is
/// serialized by the borrow rules without any locking, matching the
/// single-task model the engine assumes.
pub struct Engine<S: CatalogStore> {
    store: S,
    config: EngineConfig,
    books: Vec<Book>,
}

impl<S: CatalogStore> Engine<S> {
    /// Build an engine over `store`, loading the collection or seeding it
    /// on first run.
    ///
    /// Storage failures are reported, never surfaced: an unreadable store
    /// degrades to an empty collection.
    pub fn new(mut store: S, config: EngineConfig) -> Self {
        let books = load_or_seed(&mut store);
        info!("Catalog engine ready with {} books", books.len());

        Self {
            store,
            config,
            books,
        }
    }

    /// The current in-memory collection, in storage order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The backing store (read access, e.g. to inspect persisted state).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Paginated, filtered search over the collection.
    ///
    /// A book is in the match set iff it passes the level filter AND the
    /// price filter AND the free-text query. Collection order is preserved;
    /// `total` counts the match set before windowing so callers can decide
    /// whether more pages exist. Search has no error conditions.
    pub async fn search(&self, req: &SearchRequest) -> SearchPage {
        self.simulate_latency().await;

        let matcher = QueryMatcher::new(&req.query, self.config.match_mode);
        let matched: Vec<&Book> = self
            .books
            .iter()
            .filter(|b| req.level.matches(b) && req.price.matches(b) && matcher.matches(b))
            .collect();

        let total = matched.len();
        let books: Vec<Book> = matched
            .into_iter()
            .skip(req.offset)
            .take(req.limit)
            .cloned()
            .collect();

        debug!(
            "Search {:?} matched {total} book(s), returning window [{}, {})",
            req.query,
            req.offset,
            req.offset + books.len()
        );

        SearchPage { books, total }
    }

    /// First book whose id matches, or `None`.
    pub async fn fetch_by_id(&self, id: u32) -> Option<Book> {
        self.simulate_latency().await;
        self.books.iter().find(|b| b.id == id).cloned()
    }

    /// Decrement stock for each cart line and persist the collection.
    ///
    /// Lines are processed in order; lines naming unknown ids are silently
    /// skipped. A line that would drive stock below zero aborts with
    /// [`BookstallError::StockUnderflow`] and nothing is persisted — in
    /// [`PurchaseMode::Partial`] the earlier decrements of the same call
    /// remain applied in memory, in [`PurchaseMode::Atomic`] the collection
    /// is untouched.
    pub async fn purchase(&mut self, items: &[CartItem]) -> Result<()> {
        self.simulate_latency().await;

        match self.config.purchase_mode {
            PurchaseMode::Partial => self.decrement_in_order(items)?,
            PurchaseMode::Atomic => self.decrement_atomically(items)?,
        }

        let raw = serde_json::to_string(&self.books)?;
        self.store.write(CATALOG_KEY, &raw)?;
        info!("Purchase of {} line(s) persisted", items.len());

        Ok(())
    }

    fn decrement_in_order(&mut self, items: &[CartItem]) -> Result<()> {
        for item in items {
            let Some(book) = self.books.iter_mut().find(|b| b.id == item.book_id) else {
                continue;
            };

            if item.amount > book.amount {
                return Err(BookstallError::StockUnderflow {
                    id: book.id,
                    requested: item.amount,
                    available: book.amount,
                });
            }

            book.amount -= item.amount;
        }

        Ok(())
    }

    fn decrement_atomically(&mut self, items: &[CartItem]) -> Result<()> {
        // Lines targeting the same book are summed before validation.
        let mut requested: HashMap<u32, u32> = HashMap::new();

        for item in items {
            let Some(book) = self.books.iter().find(|b| b.id == item.book_id) else {
                continue;
            };

            let total = requested.entry(book.id).or_insert(0);
            *total += item.amount;

            if *total > book.amount {
                return Err(BookstallError::StockUnderflow {
                    id: book.id,
                    requested: *total,
                    available: book.amount,
                });
            }
        }

        for book in self.books.iter_mut() {
            if let Some(amount) = requested.get(&book.id) {
                book.amount -= amount;
            }
        }

        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }
}

/// Read the collection from the store, seeding it if the key is absent.
///
/// Absent key: write the seed set and start from it. Read or parse failure:
/// log and degrade to an empty collection without touching the store.
fn load_or_seed<S: CatalogStore>(store: &mut S) -> Vec<Book> {
    match store.read(CATALOG_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(books) => books,
            Err(e) => {
                error!("Stored catalog is unreadable, starting with an empty collection: {e}");
                Vec::new()
            }
        },
        Ok(None) => {
            let books = seed_books();
            match serde_json::to_string(&books) {
                Ok(raw) => {
                    if let Err(e) = store.write(CATALOG_KEY, &raw) {
                        error!("Failed to persist seed catalog: {e}");
                    }
                }
                Err(e) => error!("Failed to serialize seed catalog: {e}"),
            }
            info!("Seeded catalog with {} books", books.len());
            books
        }
        Err(e) => {
            error!("Failed to read catalog from store: {e}");
            Vec::new()
        }
    }
}
