use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookstallError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Stock underflow for book {id}: requested {requested}, available {available}")]
    StockUnderflow {
        id: u32,
        requested: u32,
        available: u32,
    },
}

pub type Result<T> = std::result::Result<T, BookstallError>;
