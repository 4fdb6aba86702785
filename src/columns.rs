//! Column discovery through case-insensitive header aliases.
//!
//! Every input source names its columns differently (ManaBox exports,
//! Cardmarket JSON dumps, hand-made CSVs), so each logical field carries an
//! ordered alias list. The first alias present in the headers wins.

use crate::error::{PriceFillError, Result};

pub const PRODUCT_ID: &[&str] = &["idProduct", "productId", "id", "Product ID", "ProductId"];
pub const PRODUCT_NAME: &[&str] = &["Name", "name", "Product Name", "productName"];
pub const PRODUCT_SET: &[&str] = &[
    "Expansion",
    "expansion",
    "Expansion Name",
    "Set",
    "Edition",
    "ExpansionName",
    "NameExpansion",
    "setName",
];
pub const PRODUCT_NUMBER: &[&str] = &[
    "Number",
    "Collector Number",
    "collectorNumber",
    "Card Number",
    "collector_number",
];
pub const PRODUCT_FOIL: &[&str] = &["IsFoil", "Foil", "isFoil", "foil"];

pub const PRICE_AVG7: &[&str] = &["avg7", "avg_7", "avg7Price", "avg7_price", "AVG7"];
pub const PRICE_AVG7_FOIL: &[&str] = &["avg7-foil", "avg7_foil", "avg7Foil", "AVG7_FOIL"];

pub const INVENTORY_NAME: &[&str] = &["Name", "name", "Card", "card"];
pub const INVENTORY_SET: &[&str] = &["Set name", "Set", "Edition", "set", "setName"];
pub const INVENTORY_SET_CODE: &[&str] = &["Set code", "Set Code", "set code", "set_code", "setCode"];
pub const INVENTORY_NUMBER: &[&str] = &[
    "Collector number",
    "Number",
    "collectorNumber",
    "Card Number",
    "collector_number",
];
pub const INVENTORY_FOIL: &[&str] = &["Foil", "foil", "IsFoil", "isFoil"];
pub const INVENTORY_SCRYFALL_ID: &[&str] = &["Scryfall ID", "Scryfall Id", "scryfall_id", "scryfallId"];

/// Find the header matching the first alias, ignoring case.
///
/// Returns the header as spelled in the source so it can be used as a row key.
pub fn pick_column<'a>(headers: &'a [String], aliases: &[&str]) -> Option<&'a str> {
    aliases.iter().find_map(|alias| {
        headers
            .iter()
            .find(|h| h.eq_ignore_ascii_case(alias))
            .map(String::as_str)
    })
}

/// Like [`pick_column`], but a miss is a configuration error naming `field`.
pub fn require_column(
    headers: &[String],
    aliases: &[&str],
    source_name: &'static str,
    field: &'static str,
) -> Result<String> {
    pick_column(headers, aliases)
        .map(str::to_string)
        .ok_or(PriceFillError::MissingColumn { source_name, field })
}
