//! Cardmarket price guide lookup by product ID
//!
//! Prices are kept as the decimal strings found in the source so they are
//! written back out unchanged. An empty cell means "no price", never zero.

use crate::columns::{pick_column, require_column, PRICE_AVG7, PRICE_AVG7_FOIL, PRODUCT_ID};
use crate::error::Result;
use crate::table::Table;
use std::collections::HashMap;

/// 7-day average prices for one product
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceEntry {
    pub avg: Option<String>,
    pub avg_foil: Option<String>,
}

impl PriceEntry {
    pub fn new(avg: &str, avg_foil: &str) -> Self {
        Self {
            avg: non_empty(avg),
            avg_foil: non_empty(avg_foil),
        }
    }

    /// Foil price for foil rows when one exists, base price otherwise.
    pub fn select(&self, foil: bool) -> Option<&str> {
        match (&self.avg_foil, foil) {
            (Some(avg_foil), true) => Some(avg_foil.as_str()),
            _ => self.avg.as_deref(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Price guide lookup by product ID
#[derive(Debug, Default)]
pub struct PriceTable {
    entries: HashMap<String, PriceEntry>,
}

impl PriceTable {
    /// Build the table from a price guide.
    ///
    /// Fails when no id or avg7 column can be found. Rows without an id are
    /// skipped; a repeated id replaces the earlier entry.
    pub fn build(table: &Table) -> Result<Self> {
        let id_col = require_column(&table.headers, PRODUCT_ID, "Price guide", "product id")?;
        let avg_col = require_column(&table.headers, PRICE_AVG7, "Price guide", "avg7 price")?;
        let foil_col = pick_column(&table.headers, PRICE_AVG7_FOIL);

        let mut entries = HashMap::with_capacity(table.len());
        for row in &table.rows {
            let id = row.get(&id_col).map(|s| s.trim()).unwrap_or("");
            if id.is_empty() {
                continue;
            }
            let avg = row.get(&avg_col).map(String::as_str).unwrap_or("");
            let avg_foil = foil_col.and_then(|c| row.get(c)).map(String::as_str).unwrap_or("");
            entries.insert(id.to_string(), PriceEntry::new(avg, avg_foil));
        }

        log::info!("Loaded {} price entries", entries.len());
        Ok(Self { entries })
    }

    pub fn insert(&mut self, product_id: &str, entry: PriceEntry) {
        self.entries.insert(product_id.to_string(), entry);
    }

    /// Look up prices for a Cardmarket product ID
    pub fn get(&self, product_id: &str) -> Option<&PriceEntry> {
        self.entries.get(product_id)
    }

    /// Selected price for a product, `None` when it is unknown or empty.
    pub fn price_for(&self, product_id: &str, foil: bool) -> Option<&str> {
        self.get(product_id).and_then(|entry| entry.select(foil))
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PriceFillError;

    #[test]
    fn prefers_avg7_columns() {
        let table = Table::from_rows(
            &["idProduct", "avg7", "avg7-foil", "avg"],
            &[&["10", "1.11", "2.22", "9.99"], &["11", "3.33", ""]],
        );
        let prices = PriceTable::build(&table).unwrap();

        let entry = prices.get("10").unwrap();
        assert_eq!(entry.avg.as_deref(), Some("1.11"));
        assert_eq!(entry.avg_foil.as_deref(), Some("2.22"));
        assert_eq!(prices.get("11").unwrap().avg.as_deref(), Some("3.33"));
    }

    #[test]
    fn empty_cells_are_absent_not_zero() {
        let table = Table::from_rows(&["idProduct", "avg7", "avg7-foil"], &[&["12", "", ""]]);
        let prices = PriceTable::build(&table).unwrap();

        assert_eq!(prices.get("12"), Some(&PriceEntry::default()));
        assert_eq!(prices.price_for("12", false), None);
        assert_eq!(prices.price_for("12", true), None);
    }

    #[test]
    fn foil_price_preferred_only_for_foil_rows() {
        let entry = PriceEntry::new("5.26", "5.39");
        assert_eq!(entry.select(true), Some("5.39"));
        assert_eq!(entry.select(false), Some("5.26"));

        let no_foil = PriceEntry::new("5.26", "");
        assert_eq!(no_foil.select(true), Some("5.26"));
    }

    #[test]
    fn foil_column_is_optional() {
        let table = Table::from_rows(&["ProductId", "AVG7"], &[&["1", "0.10"]]);
        let prices = PriceTable::build(&table).unwrap();
        assert_eq!(prices.price_for("1", true), Some("0.10"));
    }

    #[test]
    fn rows_without_id_are_skipped() {
        let table = Table::from_rows(&["idProduct", "avg7"], &[&["", "1.00"], &["2", "2.00"]]);
        let prices = PriceTable::build(&table).unwrap();
        assert_eq!(prices.len(), 1);
    }

    #[test]
    fn missing_avg7_column_is_configuration_error() {
        let table = Table::from_rows(&["idProduct", "avg", "trend"], &[&["1", "1.0", "1.1"]]);
        match PriceTable::build(&table) {
            Err(PriceFillError::MissingColumn { field, .. }) => assert_eq!(field, "avg7 price"),
            other => panic!("Expected MissingColumn, got: {other:?}"),
        }
    }

    #[test]
    fn missing_id_column_is_configuration_error() {
        let table = Table::from_rows(&["avg7"], &[&["1.0"]]);
        assert!(PriceTable::build(&table).unwrap_err().is_configuration());
    }
}
