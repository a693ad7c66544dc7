//! Populates an empty store from a semicolon-delimited source file.
//!
//! Column layout of a data row:
//! `0` country ISO2, `1` SWIFT code, `3` bank name, `4` address, `6` country name.
//! The first row is a header and is discarded.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder, StringRecord};

use crate::error::SwiftError;
use crate::record::Record;
use crate::store::Store;

/// Rows with fewer fields than this are skipped.
pub const MIN_FIELDS: usize = 6;

const COL_COUNTRY_ISO2: usize = 0;
const COL_CODE: usize = 1;
const COL_BANK_NAME: usize = 3;
const COL_ADDRESS: usize = 4;
const COL_COUNTRY_NAME: usize = 6;

/// Outcome of a population run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Distinct codes written to the store
    pub inserted: usize,
    /// Data rows skipped for having too few fields or failing to parse
    pub skipped: usize,
    /// The store already held records, so the source was not read
    pub already_populated: bool,
}

/// Converts one data row into a record, or `None` when the row is too short.
pub fn record_from_row(row: &StringRecord) -> Option<Record> {
    if row.len() < MIN_FIELDS {
        return None;
    }
    let field = |i: usize| row.get(i).unwrap_or("");
    Some(Record::new(
        field(COL_CODE),
        field(COL_BANK_NAME),
        field(COL_ADDRESS),
        field(COL_COUNTRY_ISO2),
        field(COL_COUNTRY_NAME),
    ))
}

/// Populates the store from `path` unless it already holds records.
pub fn populate_if_empty(store: &Store, path: impl AsRef<Path>) -> Result<LoadReport, SwiftError> {
    let path = path.as_ref();
    if !store.is_empty()? {
        tracing::info!(bucket = store.bucket(), "Store already populated, skipping load");
        return Ok(LoadReport {
            already_populated: true,
            ..Default::default()
        });
    }

    let file = File::open(path)
        .map_err(|e| SwiftError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let report = load_rows(store, file)?;
    tracing::info!(
        source = %path.display(),
        inserted = report.inserted,
        skipped = report.skipped,
        "Populated store"
    );
    Ok(report)
}

/// Reads every data row from `reader` and writes the resulting records in one transaction.
pub fn load_rows<R: Read>(store: &Store, reader: R) -> Result<LoadReport, SwiftError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut report = LoadReport::default();
    // a repeated code keeps its last row
    let mut entries = BTreeMap::new();

    for (index, row) in reader.records().enumerate() {
        // header is line 1, first data row is line 2
        let fallback_line = index as u64 + 2;
        let row = match row {
            Ok(row) => row,
            Err(e) if matches!(e.kind(), ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                let line = e.position().map_or(fallback_line, |p| p.line());
                tracing::warn!(line, error = %e, "Skipping malformed row");
                report.skipped += 1;
                continue;
            }
        };
        let line = row.position().map_or(fallback_line, |p| p.line());
        let Some(record) = record_from_row(&row) else {
            tracing::warn!(line, fields = row.len(), "Skipping short row");
            report.skipped += 1;
            continue;
        };
        let value = record.to_stored()?;
        if entries.insert(record.code, value).is_some() {
            tracing::debug!(line, "Duplicate code replaces earlier row");
        }
    }

    if entries.is_empty() {
        tracing::warn!("Source contained no data rows");
        return Ok(report);
    }

    let entries: Vec<(String, Vec<u8>)> = entries.into_iter().collect();
    report.inserted = store.put_batch(&entries)?;
    Ok(report)
}
