//! Filesystem layout.

mod paths;

pub use paths::BookstallPaths;
