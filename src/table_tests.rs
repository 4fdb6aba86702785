//! Tests for table reading

use super::*;
use crate::error::PriceFillError;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

fn write_gzip(path: &std::path::Path, content: &str) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

#[test]
fn sniffs_semicolon_and_tab() {
    assert_eq!(sniff_delimiter("a;b;c\n1;2;3"), b';');
    assert_eq!(sniff_delimiter("a\tb\n1\t2"), b'\t');
    assert_eq!(sniff_delimiter("a|b|c"), b'|');
}

#[test]
fn sniff_defaults_to_comma() {
    assert_eq!(sniff_delimiter("single"), b',');
    assert_eq!(sniff_delimiter(""), b',');
    assert_eq!(sniff_delimiter("a,b;c"), b',');
}

#[test]
fn csv_cells_are_trimmed_and_quoted_commas_kept() {
    let content = "Name , Set name,Foil\n\"Oko, Lorwyn Liege // Oko, Shadowmoor Scion\", Lorwyn Eclipsed ,foil\n";
    let table = parse_csv(content).unwrap();

    assert_eq!(table.headers, vec!["Name", "Set name", "Foil"]);
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.rows[0]["Name"],
        "Oko, Lorwyn Liege // Oko, Shadowmoor Scion"
    );
    assert_eq!(table.rows[0]["Set name"], "Lorwyn Eclipsed");
    assert_eq!(table.delimiter, b',');
}

#[test]
fn csv_short_rows_get_empty_cells() {
    let table = parse_csv("a;b;c\n1;2\n").unwrap();
    assert_eq!(table.delimiter, b';');
    assert_eq!(table.rows[0]["a"], "1");
    assert_eq!(table.rows[0]["c"], "");
}

#[test]
fn json_container_key_is_unwrapped() {
    let content = r#"{"version": 1, "priceGuides": [
        {"idProduct": 100, "avg7": 7.02, "avg7-foil": 7.2},
        {"idProduct": 101, "avg7": 5.26, "avg7-foil": null}
    ]}"#;
    let table = parse_json(content);

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0]["idProduct"], "100");
    assert_eq!(table.rows[0]["avg7"], "7.02");
    assert_eq!(table.rows[0]["avg7-foil"], "7.2");
    assert_eq!(table.rows[1]["avg7-foil"], "");
    assert!(table.headers.contains(&"avg7-foil".to_string()));
}

#[test]
fn json_id_map_is_flattened() {
    let content = r#"{"100": {"idProduct": "100", "name": "Emptiness"},
                      "101": {"idProduct": "101", "name": "Oko"}}"#;
    let table = parse_json(content);
    assert_eq!(table.len(), 2);
}

#[test]
fn json_scalar_object_gives_no_rows() {
    let table = parse_json(r#"{"version": 1, "createdAt": "2025-01-15"}"#);
    assert!(table.is_empty());
    assert!(table.headers.is_empty());
}

#[test]
fn ndjson_fallback_skips_bad_lines() {
    let content = "{\"idProduct\": 1, \"name\": \"A\"}\nnot json\n\n[1,2]\n{\"idProduct\": 2, \"name\": \"B\"}\n";
    let table = parse_json(content);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[1]["name"], "B");
}

#[test]
fn read_table_dispatches_on_extension() {
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("collection.csv");
    std::fs::write(&csv_path, "Name;Foil\nEmptiness;normal\n").unwrap();
    let table = read_table(&csv_path).unwrap();
    assert_eq!(table.delimiter, b';');
    assert_eq!(table.rows[0]["Name"], "Emptiness");

    let json_path = dir.path().join("products.JSON");
    let mut file = std::fs::File::create(&json_path).unwrap();
    write!(file, r#"[{{"idProduct": 5, "name": "Mox Pearl"}}]"#).unwrap();
    let table = read_table(&json_path).unwrap();
    assert_eq!(table.rows[0]["idProduct"], "5");
}

#[test]
fn read_table_decompresses_gzip_csv_and_json() {
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("products.csv.gz");
    write_gzip(&csv_path, "idProduct;Name\n100;Emptiness\n");
    let table = read_table(&csv_path).unwrap();
    assert_eq!(table.delimiter, b';');
    assert_eq!(table.rows[0]["Name"], "Emptiness");

    let json_path = dir.path().join("price_guide.JSON.GZ");
    write_gzip(
        &json_path,
        r#"{"priceGuides": [{"idProduct": 100, "avg7": 7.02}]}"#,
    );
    let table = read_table(&json_path).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0]["avg7"], "7.02");
}

#[test]
fn corrupt_gzip_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.csv.gz");
    std::fs::write(&path, "idProduct,Name\n").unwrap();

    assert!(matches!(read_table(&path), Err(PriceFillError::Io(_))));
}

#[test]
fn invalid_utf8_bytes_are_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.csv");
    std::fs::write(
        &path,
        b"idProduct,Name,Expansion\n1,Caf\xe9 Sorcery,Alpha\n2,Island,Alpha\n",
    )
    .unwrap();

    let table = read_table(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0]["Name"], "Caf\u{FFFD} Sorcery");
    assert_eq!(table.rows[1]["Name"], "Island");
}

#[test]
fn read_text_handles_plain_and_gzip() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("cards.json");
    std::fs::write(&plain, "[]").unwrap();
    let gz = dir.path().join("cards.json.gz");
    write_gzip(&gz, "[]");

    assert_eq!(read_text(&plain).unwrap(), "[]");
    assert_eq!(read_text(&gz).unwrap(), "[]");
}

#[test]
fn read_table_missing_file_is_io_error() {
    let result = read_table("/nonexistent/path/collection.csv");
    assert!(matches!(result, Err(PriceFillError::Io(_))));
}
