//! Per-row matching and price resolution
//!
//! Each row first tries Scryfall (when enabled), whose Cardmarket id gives the
//! most precise product. Rows Scryfall cannot price fall back to the
//! catalogue, from name+set+number down to name alone.

use crate::cardmarket::{CatalogueIndex, PriceTable};
use crate::inventory::InventoryRow;
use crate::normalize::{normalize_name, normalize_number};
use crate::scryfall::{CardDescriptor, DescriptorCache, SecondaryResolver, VisualType};
use std::fmt;

/// Whether a row was priced as foil or nonfoil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Finish {
    Foil,
    #[default]
    Nonfoil,
}

impl Finish {
    pub fn from_foil(is_foil: bool) -> Self {
        if is_foil {
            Finish::Foil
        } else {
            Finish::Nonfoil
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Finish::Foil => "foil",
            Finish::Nonfoil => "nonfoil",
        }
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome for one inventory row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRow {
    /// Selected price, empty when none was found
    pub price: String,
    pub visual_type: VisualType,
    pub finish: Finish,
    /// Matched Cardmarket product id, possibly empty
    pub product_id: String,
}

impl ResolvedRow {
    pub fn is_priced(&self) -> bool {
        !self.price.is_empty()
    }
}

/// Run-level counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
}

impl RunSummary {
    pub fn record(&mut self, row: &ResolvedRow) {
        self.total += 1;
        if row.is_priced() {
            self.matched += 1;
        } else {
            self.unmatched += 1;
        }
    }
}

/// Matching engine over read-only lookup tables
pub struct Engine<'a> {
    catalog: &'a CatalogueIndex,
    prices: &'a PriceTable,
    secondary: Option<&'a SecondaryResolver>,
}

impl<'a> Engine<'a> {
    pub fn new(
        catalog: &'a CatalogueIndex,
        prices: &'a PriceTable,
        secondary: Option<&'a SecondaryResolver>,
    ) -> Self {
        Self {
            catalog,
            prices,
            secondary,
        }
    }

    /// Resolve one row. Never fails: misses produce an unpriced row.
    pub fn resolve(&self, row: &InventoryRow, cache: &mut DescriptorCache) -> ResolvedRow {
        let is_foil = row.foil.is_foil();
        let finish = Finish::from_foil(is_foil);
        let mut product_id = String::new();

        if let Some(card) = self.secondary_descriptor(row, cache) {
            if let Some(cardmarket_id) = card.cardmarket_id.as_deref() {
                product_id = cardmarket_id.to_string();
                if let Some(price) = self.prices.price_for(cardmarket_id, is_foil) {
                    return ResolvedRow {
                        price: price.to_string(),
                        visual_type: card.visual_type(),
                        finish,
                        product_id,
                    };
                }
                log::debug!(
                    "No price for Cardmarket id {} ({}), trying catalogue",
                    cardmarket_id,
                    row.name
                );
            }
        }

        let name = normalize_name(&row.name);
        let set_name = normalize_name(&row.set_name);
        let number = normalize_number(&row.collector_number);
        let candidates = self
            .catalog
            .match_product_ids(&name, &set_name, &number, row.foil);

        for id in candidates {
            if let Some(entry) = self.prices.get(id) {
                return ResolvedRow {
                    price: entry.select(is_foil).unwrap_or_default().to_string(),
                    visual_type: VisualType::Normal,
                    finish,
                    product_id: id.clone(),
                };
            }
        }

        log::debug!("No price found for {} ({})", row.name, row.set_name);
        ResolvedRow {
            price: String::new(),
            visual_type: VisualType::Normal,
            finish,
            product_id,
        }
    }

    /// Resolve rows in order, one result per input row.
    pub fn resolve_all(
        &self,
        rows: &[InventoryRow],
        cache: &mut DescriptorCache,
    ) -> (Vec<ResolvedRow>, RunSummary) {
        let mut summary = RunSummary::default();
        let resolved = rows
            .iter()
            .map(|row| {
                let resolved = self.resolve(row, cache);
                summary.record(&resolved);
                resolved
            })
            .collect();
        (resolved, summary)
    }

    fn secondary_descriptor(
        &self,
        row: &InventoryRow,
        cache: &mut DescriptorCache,
    ) -> Option<CardDescriptor> {
        let secondary = self.secondary?;

        if !row.scryfall_id.is_empty() {
            if let Some(card) = secondary.by_id(&row.scryfall_id, cache) {
                return Some(card);
            }
        }
        if !row.set_code.is_empty() && !row.collector_number.is_empty() {
            return secondary.by_set_number(&row.set_code, &row.collector_number);
        }
        None
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
