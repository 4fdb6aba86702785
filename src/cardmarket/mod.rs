//! Cardmarket product catalogue and price guide lookups

mod catalog;
mod price_table;

pub use catalog::{candidate_keys, CatalogueIndex, NormalizedKey, ProductRecord};
pub use price_table::{PriceEntry, PriceTable};
