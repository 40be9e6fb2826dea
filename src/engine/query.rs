//! Search request shape and free-text query matching.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use super::filters::{LevelFilter, PriceFilter};
use crate::catalog::Book;

/// Default result window size, matching the API the engine replaces.
pub const DEFAULT_LIMIT: usize = 30;

/// How the free-text query matches author and title.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive literal substring; pattern metacharacters are inert.
    #[default]
    Literal,
    /// Case-insensitive regular expression. Patterns that fail to compile
    /// fall back to literal matching rather than erroring.
    Regex,
}

/// One paginated search request.
///
/// Produces no side effects; an empty query matches every book.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub price: PriceFilter,
    pub level: LevelFilter,
    pub offset: usize,
    pub limit: usize,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            price: PriceFilter::Any,
            level: LevelFilter::Any,
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchRequest {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    /// The window `[offset, offset + limit)` of the ordered match set
    pub books: Vec<Book>,
    /// Size of the full match set before windowing
    pub total: usize,
}

/// Compiled form of a free-text query.
///
/// Author and title match case-insensitively in the configured mode; tags
/// match by exact membership of the raw query string in either mode.
pub enum QueryMatcher {
    /// Empty query — matches every book
    All,
    Literal {
        raw: String,
        lowered: String,
    },
    Pattern {
        raw: String,
        regex: regex::Regex,
    },
}

impl QueryMatcher {
    pub fn new(query: &str, mode: MatchMode) -> Self {
        if query.is_empty() {
            return QueryMatcher::All;
        }

        if mode == MatchMode::Regex {
            match RegexBuilder::new(query).case_insensitive(true).build() {
                Ok(regex) => {
                    return QueryMatcher::Pattern {
                        raw: query.to_string(),
                        regex,
                    }
                }
                Err(e) => {
                    tracing::debug!("query {query:?} is not a valid pattern, matching literally: {e}");
                }
            }
        }

        QueryMatcher::Literal {
            raw: query.to_string(),
            lowered: query.to_lowercase(),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            QueryMatcher::All => true,
            QueryMatcher::Literal { raw, lowered } => {
                book.author.to_lowercase().contains(lowered)
                    || book.title.to_lowercase().contains(lowered)
                    || book.tags.iter().any(|t| t == raw)
            }
            QueryMatcher::Pattern { raw, regex } => {
                regex.is_match(&book.author)
                    || regex.is_match(&book.title)
                    || book.tags.iter().any(|t| t == raw)
            }
        }
    }
}
