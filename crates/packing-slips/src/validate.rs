//! Header validation at the CSV boundary

use crate::types::{Field, LineItem, RawRecord, Result, SlipError};
use std::collections::HashSet;

fn require_all(has: impl Fn(Field) -> bool) -> Result<()> {
    match Field::REQUIRED.iter().copied().find(|field| !has(*field)) {
        Some(field) => {
            log::error!("Missing column {:?} ({})", field, field.header());
            Err(SlipError::MissingHeader { field })
        }
        None => Ok(()),
    }
}

/// Check a header row for every required column
pub fn verify_columns<'a>(columns: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let present: HashSet<&str> = columns.into_iter().collect();
    require_all(|field| present.contains(field.header()))
}

/// Check that `first` carries every required column.
///
/// Only the first record of a batch is inspected; every later row comes from
/// the same export and shares its header.
pub fn verify_headers(first: &RawRecord) -> Result<()> {
    require_all(|field| first.get(field).is_some())
}

/// Convert every record that is ready to ship into a [`LineItem`].
///
/// Records in any other status are skipped before they are examined, so a
/// short row for an order that is not due yet never fails the batch. The
/// first ready record stands in for the header and is checked for every
/// required column before anything is converted.
pub fn parse_line_items(records: &[RawRecord], ready_status: &str) -> Result<Vec<LineItem>> {
    // Without a status column nothing could ever match
    if let Some(first) = records.first()
        && first.get(Field::Status).is_none()
    {
        verify_headers(first)?;
    }

    let ready: Vec<&RawRecord> = records
        .iter()
        .filter(|record| record.get(Field::Status) == Some(ready_status))
        .collect();
    if ready.len() < records.len() {
        log::debug!(
            "Skipped {} rows not in status {:?}",
            records.len() - ready.len(),
            ready_status
        );
    }

    let Some(first) = ready.first() else {
        return Ok(Vec::new());
    };
    verify_headers(first)?;
    ready.into_iter().map(LineItem::try_from).collect()
}
