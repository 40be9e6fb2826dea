use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::{CartItem, Level};
use crate::engine::{LevelFilter, PriceFilter};

/// Bookstall: browse and buy from a local book catalog
#[derive(Parser)]
#[command(name = "bookstall")]
#[command(version)]
#[command(about = "Browse and buy from a local book catalog")]
pub struct Cli {
    /// Data directory override (defaults to the platform location)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog with filters and pagination
    Browse {
        /// Free-text query matched against author, title and tags
        #[arg(default_value = "")]
        query: String,

        /// Price bracket
        #[arg(long, value_enum, default_value_t = PriceArg::Any)]
        price: PriceArg,

        /// Reading level
        #[arg(long, value_enum, default_value_t = LevelArg::Any)]
        level: LevelArg,

        /// Start of the result window
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Size of the result window
        #[arg(long, default_value_t = 12)]
        limit: usize,
    },

    /// Show one book by id
    Show {
        /// Book identifier
        id: u32,
    },

    /// Buy books; each line is ID:QTY
    Buy {
        /// Cart lines, e.g. 3:2 for two copies of book 3
        #[arg(required = true, value_parser = parse_cart_item)]
        items: Vec<CartItem>,
    },

    /// Overwrite the store with the seed catalog
    Reset,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Browse { .. } => "browse",
            Commands::Show { .. } => "show",
            Commands::Buy { .. } => "buy",
            Commands::Reset => "reset",
        }
    }
}

/// Price bracket on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriceArg {
    Any,
    #[value(name = "lt15")]
    Lt15,
    #[value(name = "15-30")]
    Mid15To30,
    #[value(name = "gt30")]
    Gt30,
}

impl From<PriceArg> for PriceFilter {
    fn from(arg: PriceArg) -> Self {
        match arg {
            PriceArg::Any => PriceFilter::Any,
            PriceArg::Lt15 => PriceFilter::Below15,
            PriceArg::Mid15To30 => PriceFilter::From15To30,
            PriceArg::Gt30 => PriceFilter::Above30,
        }
    }
}

/// Reading level on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Any,
    Beginner,
    Middle,
    Pro,
}

impl From<LevelArg> for LevelFilter {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Any => LevelFilter::Any,
            LevelArg::Beginner => LevelFilter::Only(Level::Beginner),
            LevelArg::Middle => LevelFilter::Only(Level::Middle),
            LevelArg::Pro => LevelFilter::Only(Level::Pro),
        }
    }
}

/// Parse a `ID:QTY` cart line.
fn parse_cart_item(raw: &str) -> Result<CartItem, String> {
    let (id, amount) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected ID:QTY, got {raw:?}"))?;

    let id: u32 = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid book id in {raw:?}"))?;
    let amount: u32 = amount
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity in {raw:?}"))?;

    if amount == 0 {
        return Err(format!("quantity must be positive in {raw:?}"));
    }

    Ok(CartItem { book_id: id, amount })
}
