//! Writing the collection back out with price columns appended

use crate::engine::ResolvedRow;
use crate::error::Result;
use crate::table::Table;
use std::io::Write;
use std::path::Path;

pub const PRICE_COLUMN: &str = "card market price";
pub const TYPE_COLUMN: &str = "card market type";
pub const FINISH_COLUMN: &str = "card market finish";
pub const PRODUCT_ID_COLUMN: &str = "card market product id";

/// Output headers: the input headers in their given order, then the
/// result columns not already present.
pub fn output_headers(input: &[String], add_product_id: bool) -> Vec<String> {
    let mut headers = input.to_vec();
    let mut extra = vec![PRICE_COLUMN, TYPE_COLUMN, FINISH_COLUMN];
    if add_product_id {
        extra.push(PRODUCT_ID_COLUMN);
    }
    for column in extra {
        if !headers.iter().any(|h| h == column) {
            headers.push(column.to_string());
        }
    }
    headers
}

/// Write one output record per input row, in input order.
pub fn write_rows<W: Write>(
    writer: W,
    input: &Table,
    resolved: &[ResolvedRow],
    add_product_id: bool,
) -> Result<()> {
    let headers = output_headers(&input.headers, add_product_id);
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(input.delimiter)
        .from_writer(writer);

    wtr.write_record(&headers)?;
    for (row, result) in input.rows.iter().zip(resolved) {
        let record = headers.iter().map(|h| match h.as_str() {
            PRICE_COLUMN => result.price.as_str(),
            TYPE_COLUMN => result.visual_type.as_str(),
            FINISH_COLUMN => result.finish.as_str(),
            PRODUCT_ID_COLUMN if add_product_id => result.product_id.as_str(),
            _ => row.get(h).map(String::as_str).unwrap_or(""),
        });
        wtr.write_record(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the output CSV, creating parent directories as needed.
pub fn write_output<P: AsRef<Path>>(
    path: P,
    input: &Table,
    resolved: &[ResolvedRow],
    add_product_id: bool,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_rows(file, input, resolved, add_product_id)?;
    log::info!("Wrote {} rows to {}", resolved.len(), path.display());
    Ok(())
}
