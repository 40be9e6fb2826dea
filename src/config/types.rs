use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::{EngineConfig, MatchMode, PurchaseMode, DEFAULT_LATENCY};

/// Root structure of `bookstall.toml`. Every field has a default, so an
/// absent or empty file yields a fully working configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub engine: EngineSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

/// `[engine]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineSettings {
    /// Simulated I/O delay in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// How the free-text query matches author and title
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Whether purchase validates the whole batch before decrementing
    #[serde(default)]
    pub purchase_mode: PurchaseMode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            match_mode: MatchMode::default(),
            purchase_mode: PurchaseMode::default(),
        }
    }
}

/// `[store]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StoreSettings {
    /// Override for the data directory; the platform default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Settings {
    /// Produce the engine's runtime configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            latency: Duration::from_millis(self.engine.latency_ms),
            match_mode: self.engine.match_mode,
            purchase_mode: self.engine.purchase_mode,
        }
    }
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY.as_millis() as u64
}
