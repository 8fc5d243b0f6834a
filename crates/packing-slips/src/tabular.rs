//! CSV parsing into header-keyed records

use crate::types::{RawRecord, Result};
use crate::validate::verify_columns;

fn reader(bytes: &[u8]) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes)
}

fn read_rows(
    reader: &mut csv::Reader<&[u8]>,
    headers: &csv::StringRecord,
) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        records.push(headers.iter().zip(row.iter()).collect::<RawRecord>());
    }

    log::debug!("Parsed {} CSV rows", records.len());
    Ok(records)
}

/// Parse CSV bytes with a header row into one record per data row.
///
/// Rows are returned in file order. A UTF-8 byte order mark before the
/// first header is ignored.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let mut reader = reader(bytes);
    let headers = reader.headers()?.clone();
    read_rows(&mut reader, &headers)
}

/// Parse an order-list export, rejecting it when its header row lacks a
/// required column even if no data rows follow
pub fn parse_export(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let mut reader = reader(bytes);
    let headers = reader.headers()?.clone();
    verify_columns(headers.iter())?;
    read_rows(&mut reader, &headers)
}
