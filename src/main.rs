//! Price Fill - Cardmarket prices for MTG collection exports
//!
//! Reads a collection CSV plus Cardmarket's product catalogue and price guide,
//! and writes the collection back out with price, type and finish columns.

use clap::Parser;
use price_fill::config::DEFAULT_CACHE_FILE;
use price_fill::scryfall::DEFAULT_BASE_URL;
use price_fill::{FillConfig, ScryfallMode};
use std::path::PathBuf;
use std::time::Duration;

/// Fill Cardmarket average prices into a collection CSV
#[derive(Parser, Debug)]
#[command(name = "price_fill")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the collection CSV (e.g. a ManaBox export)
    #[arg(long)]
    collection: PathBuf,

    /// Path to the Cardmarket product catalogue (CSV or JSON)
    #[arg(long)]
    products: PathBuf,

    /// Path to the Cardmarket price guide (CSV or JSON)
    #[arg(long)]
    prices: PathBuf,

    /// Output CSV path (default: <collection>.with_prices.csv)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Add a column with the matched Cardmarket product id
    #[arg(long, default_value_t = false)]
    add_product_id: bool,

    /// Disable Scryfall lookups
    #[arg(long, default_value_t = false)]
    no_scryfall: bool,

    /// Cache file for Scryfall lookups
    #[arg(long, default_value = DEFAULT_CACHE_FILE)]
    scryfall_cache: PathBuf,

    /// Delay between Scryfall requests in seconds
    #[arg(long, default_value_t = 0.12)]
    scryfall_delay: f64,

    /// Path to Scryfall bulk data JSON (offline lookups, no API requests)
    #[arg(long)]
    scryfall_bulk: Option<PathBuf>,

    /// Scryfall API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL, hide = true)]
    scryfall_url: String,
}

impl Args {
    fn into_config(self) -> FillConfig {
        let scryfall = if self.no_scryfall {
            ScryfallMode::Disabled
        } else if let Some(path) = self.scryfall_bulk {
            ScryfallMode::Bulk { path }
        } else {
            ScryfallMode::Remote {
                cache_path: Some(self.scryfall_cache),
                delay: Duration::try_from_secs_f64(self.scryfall_delay).unwrap_or_default(),
                base_url: self.scryfall_url,
            }
        };

        FillConfig {
            collection: self.collection,
            products: self.products,
            prices: self.prices,
            output: self.output,
            add_product_id: self.add_product_id,
            scryfall,
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();

    match price_fill::run(&config) {
        Ok(report) => {
            println!(
                "Wrote {} rows -> {}",
                report.summary.total,
                report.output_path.display()
            );
            println!("Matched prices: {}", report.summary.matched);
            println!("Unmatched rows: {}", report.summary.unmatched);
        }
        Err(e) => {
            log::error!("Price fill failed: {}", e);
            std::process::exit(1);
        }
    }
}
