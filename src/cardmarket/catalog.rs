//! Cardmarket product catalogue index
//!
//! Products are keyed by their normalized (name, set, number, foil) tuple.
//! Several products may share a key (duplicate printings); they are kept in
//! catalogue order.

use crate::columns::{
    pick_column, require_column, PRODUCT_FOIL, PRODUCT_ID, PRODUCT_NAME, PRODUCT_NUMBER,
    PRODUCT_SET,
};
use crate::error::Result;
use crate::normalize::{normalize_name, normalize_number, Foil};
use crate::table::Table;
use std::collections::HashMap;

/// Normalized matching unit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedKey {
    pub name: String,
    pub set_name: String,
    pub number: String,
    pub foil: Foil,
}

impl NormalizedKey {
    pub fn new(name: &str, set_name: &str, number: &str, foil: Foil) -> Self {
        Self {
            name: name.to_string(),
            set_name: set_name.to_string(),
            number: number.to_string(),
            foil,
        }
    }
}

/// Normalized catalogue product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub set_name: String,
    pub number: String,
    pub foil: Foil,
}

/// Product lookup by id and by normalized key
#[derive(Debug, Default)]
pub struct CatalogueIndex {
    by_id: HashMap<String, ProductRecord>,
    index: HashMap<NormalizedKey, Vec<String>>,
}

impl CatalogueIndex {
    /// Build the index from a product catalogue table.
    ///
    /// Fails when no id or name column can be found. Rows with an empty id or
    /// name are skipped.
    pub fn build(table: &Table) -> Result<Self> {
        let id_col = require_column(&table.headers, PRODUCT_ID, "Product catalogue", "product id")?;
        let name_col = require_column(&table.headers, PRODUCT_NAME, "Product catalogue", "name")?;
        let set_col = pick_column(&table.headers, PRODUCT_SET);
        let num_col = pick_column(&table.headers, PRODUCT_NUMBER);
        let foil_col = pick_column(&table.headers, PRODUCT_FOIL);

        let cell = |row: &HashMap<String, String>, col: Option<&str>| -> String {
            col.and_then(|c| row.get(c)).cloned().unwrap_or_default()
        };

        let mut catalogue = Self::default();
        let mut skipped = 0;
        for row in &table.rows {
            let id = cell(row, Some(id_col.as_str())).trim().to_string();
            let name = normalize_name(&cell(row, Some(name_col.as_str())));
            if id.is_empty() || name.is_empty() {
                skipped += 1;
                continue;
            }
            catalogue.insert(ProductRecord {
                id,
                name,
                set_name: normalize_name(&cell(row, set_col)),
                number: normalize_number(&cell(row, num_col)),
                foil: foil_col.map_or(Foil::Unknown, |c| Foil::parse(&cell(row, Some(c)))),
            });
        }

        log::info!(
            "Indexed {} catalogue products under {} keys ({} rows skipped)",
            catalogue.by_id.len(),
            catalogue.index.len(),
            skipped
        );
        Ok(catalogue)
    }

    /// Add a normalized product. Products with unknown foil state are filed
    /// under the unknown, foil and nonfoil keys alike.
    pub fn insert(&mut self, product: ProductRecord) {
        for &foil in product.foil.variants() {
            let key = NormalizedKey::new(&product.name, &product.set_name, &product.number, foil);
            self.index.entry(key).or_default().push(product.id.clone());
        }
        self.by_id.insert(product.id.clone(), product);
    }

    /// Product ids filed under exactly this key
    pub fn lookup(&self, key: &NormalizedKey) -> Option<&[String]> {
        self.index.get(key).map(Vec::as_slice)
    }

    /// Look up a product by its Cardmarket product ID
    pub fn get(&self, product_id: &str) -> Option<&ProductRecord> {
        self.by_id.get(product_id)
    }

    /// Product ids of the most specific candidate key present in the index.
    ///
    /// Inputs are expected to be normalized already.
    pub fn match_product_ids(
        &self,
        name: &str,
        set_name: &str,
        number: &str,
        foil: Foil,
    ) -> &[String] {
        candidate_keys(name, set_name, number, foil)
            .iter()
            .find_map(|key| self.lookup(key))
            .unwrap_or(&[])
    }

    /// Get the number of products
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Candidate keys for a row, most specific first:
/// name+set+number, then name+set, then name alone. An unknown foil flag
/// additionally tries foil and nonfoil at each tier.
pub fn candidate_keys(name: &str, set_name: &str, number: &str, foil: Foil) -> Vec<NormalizedKey> {
    if name.is_empty() {
        return Vec::new();
    }

    let mut tiers: Vec<(&str, &str)> = Vec::with_capacity(3);
    if !set_name.is_empty() && !number.is_empty() {
        tiers.push((set_name, number));
    }
    if !set_name.is_empty() {
        tiers.push((set_name, ""));
    }
    tiers.push(("", ""));

    tiers
        .into_iter()
        .flat_map(|(set, num)| {
            foil.variants()
                .iter()
                .map(move |&f| NormalizedKey::new(name, set, num, f))
        })
        .collect()
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
