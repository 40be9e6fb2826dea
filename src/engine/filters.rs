//! Price and level filters over the catalog.

use crate::catalog::{Book, Level};

/// Price bracket filter.
///
/// The three non-`Any` brackets partition `[0, ∞)` with no gap or overlap:
/// `< 15`, `[15, 30)`, `>= 30`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceFilter {
    #[default]
    Any,
    Below15,
    From15To30,
    Above30,
}

impl PriceFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            PriceFilter::Any => true,
            PriceFilter::Below15 => book.price < 15.0,
            PriceFilter::From15To30 => book.price >= 15.0 && book.price < 30.0,
            PriceFilter::Above30 => book.price >= 30.0,
        }
    }
}

/// Level filter: everything, or one exact level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelFilter {
    #[default]
    Any,
    Only(Level),
}

impl LevelFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            LevelFilter::Any => true,
            LevelFilter::Only(level) => book.level == *level,
        }
    }
}
