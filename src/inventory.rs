//! Typed view of collection (inventory) rows

use crate::columns::{
    pick_column, require_column, INVENTORY_FOIL, INVENTORY_NAME, INVENTORY_NUMBER,
    INVENTORY_SCRYFALL_ID, INVENTORY_SET, INVENTORY_SET_CODE,
};
use crate::error::Result;
use crate::normalize::Foil;
use crate::table::Row;

/// Source columns for each logical inventory field
#[derive(Debug, Clone)]
pub struct InventoryColumns {
    pub name: String,
    pub set_name: Option<String>,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    pub foil: Option<String>,
    pub scryfall_id: Option<String>,
}

impl InventoryColumns {
    /// Resolve inventory columns. Only the name column is required.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let pick = |aliases: &[&str]| pick_column(headers, aliases).map(str::to_string);
        Ok(Self {
            name: require_column(headers, INVENTORY_NAME, "Collection", "name")?,
            set_name: pick(INVENTORY_SET),
            set_code: pick(INVENTORY_SET_CODE),
            collector_number: pick(INVENTORY_NUMBER),
            foil: pick(INVENTORY_FOIL),
            scryfall_id: pick(INVENTORY_SCRYFALL_ID),
        })
    }

    /// Whether rows can be looked up on Scryfall at all: by id, or by set code
    /// and collector number.
    pub fn supports_secondary(&self) -> bool {
        self.scryfall_id.is_some() || (self.set_code.is_some() && self.collector_number.is_some())
    }

    /// Extract the typed fields of one raw row
    pub fn row(&self, raw: &Row) -> InventoryRow {
        let cell = |col: &Option<String>| {
            col.as_ref()
                .and_then(|c| raw.get(c))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };
        InventoryRow {
            name: raw.get(&self.name).map(|v| v.trim().to_string()).unwrap_or_default(),
            set_name: cell(&self.set_name),
            collector_number: cell(&self.collector_number),
            foil: Foil::parse(&cell(&self.foil)),
            scryfall_id: cell(&self.scryfall_id),
            set_code: cell(&self.set_code),
        }
    }
}

/// One collection row, trimmed but not normalized. Absent columns read as
/// empty strings and an unknown foil flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryRow {
    pub name: String,
    pub set_name: String,
    pub collector_number: String,
    pub foil: Foil,
    pub scryfall_id: String,
    pub set_code: String,
}
