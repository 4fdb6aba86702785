//! Price Fill - Cardmarket prices for MTG collection exports
//!
//! Matches collection rows (name, set, collector number, foil) to Cardmarket
//! products, using Scryfall's Cardmarket ids where available and a tiered
//! catalogue match otherwise, then fills in the 7-day average price.

pub mod cardmarket;
pub mod columns;
pub mod config;
pub mod engine;
pub mod error;
pub mod inventory;
pub mod normalize;
pub mod output;
pub mod scryfall;
pub mod table;

pub use cardmarket::{CatalogueIndex, PriceEntry, PriceTable};
pub use config::{FillConfig, ScryfallMode};
pub use engine::{Engine, Finish, ResolvedRow, RunSummary};
pub use error::{PriceFillError, Result};
pub use inventory::{InventoryColumns, InventoryRow};
pub use normalize::{normalize_foil, normalize_name, normalize_number, Foil};
pub use scryfall::{CardDescriptor, DescriptorCache, SecondaryResolver, VisualType};

use scryfall::{BulkIndex, ScryfallClient};
use std::path::PathBuf;

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: RunSummary,
    pub output_path: PathBuf,
}

/// Run a complete price fill: read inputs, resolve every collection row,
/// write the output CSV and persist the Scryfall cache.
///
/// Fails only on unreadable inputs or missing required columns; rows that
/// cannot be matched are written unpriced.
pub fn run(config: &FillConfig) -> Result<RunReport> {
    let collection = table::read_table(&config.collection)?;
    let products = table::read_table(&config.products)?;
    let prices = table::read_table(&config.prices)?;

    let catalog = CatalogueIndex::build(&products)?;
    let price_table = PriceTable::build(&prices)?;
    let columns = InventoryColumns::resolve(&collection.headers)?;

    let secondary = secondary_resolver(config, &columns)?;
    let cache_path = match (&secondary, &config.scryfall) {
        (Some(SecondaryResolver::Remote(_)), ScryfallMode::Remote { cache_path, .. }) => {
            cache_path.as_deref()
        }
        _ => None,
    };
    let mut cache = cache_path.map(DescriptorCache::load).unwrap_or_default();

    let rows: Vec<InventoryRow> = collection.rows.iter().map(|r| columns.row(r)).collect();
    let engine = Engine::new(&catalog, &price_table, secondary.as_ref());
    let (resolved, summary) = engine.resolve_all(&rows, &mut cache);

    let output_path = config.output_path();
    output::write_output(&output_path, &collection, &resolved, config.add_product_id)?;

    if let Some(path) = cache_path {
        if let Err(e) = cache.save(path) {
            log::warn!("Failed to save Scryfall cache: {}", e);
        }
    }

    log::info!(
        "Resolved {} rows: {} priced, {} unpriced",
        summary.total,
        summary.matched,
        summary.unmatched
    );
    Ok(RunReport {
        summary,
        output_path,
    })
}

fn secondary_resolver(
    config: &FillConfig,
    columns: &InventoryColumns,
) -> Result<Option<SecondaryResolver>> {
    if config.scryfall == ScryfallMode::Disabled {
        return Ok(None);
    }
    if !columns.supports_secondary() {
        log::info!(
            "Collection has no Scryfall ID or set code + collector number columns, skipping Scryfall"
        );
        return Ok(None);
    }

    let resolver = match &config.scryfall {
        ScryfallMode::Disabled => return Ok(None),
        ScryfallMode::Bulk { path } => SecondaryResolver::Bulk(BulkIndex::load(path)?),
        ScryfallMode::Remote {
            delay, base_url, ..
        } => SecondaryResolver::Remote(ScryfallClient::with_base_url(base_url, *delay)?),
    };
    Ok(Some(resolver))
}
