//! Run configuration

use crate::scryfall::{DEFAULT_BASE_URL, DEFAULT_DELAY};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CACHE_FILE: &str = ".scryfall_cache.json";

/// How Scryfall is consulted during a run
#[derive(Debug, Clone, PartialEq)]
pub enum ScryfallMode {
    /// Catalogue matching only
    Disabled,
    /// Per-card API requests, cached by Scryfall id
    Remote {
        cache_path: Option<PathBuf>,
        delay: Duration,
        base_url: String,
    },
    /// Offline lookups from a bulk data file
    Bulk { path: PathBuf },
}

impl Default for ScryfallMode {
    fn default() -> Self {
        ScryfallMode::Remote {
            cache_path: Some(PathBuf::from(DEFAULT_CACHE_FILE)),
            delay: DEFAULT_DELAY,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Inputs and options for one price fill run
#[derive(Debug, Clone, Default)]
pub struct FillConfig {
    /// Collection CSV (e.g. a ManaBox export)
    pub collection: PathBuf,
    /// Cardmarket product catalogue (CSV or JSON)
    pub products: PathBuf,
    /// Cardmarket price guide (CSV or JSON)
    pub prices: PathBuf,
    /// Output CSV, defaults to `<collection>.with_prices.csv`
    pub output: Option<PathBuf>,
    /// Add a column with the matched Cardmarket product id
    pub add_product_id: bool,
    pub scryfall: ScryfallMode,
}

impl FillConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let mut path = self.collection.as_os_str().to_owned();
            path.push(".with_prices.csv");
            PathBuf::from(path)
        })
    }
}
