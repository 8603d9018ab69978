//! CSV store loader.
//!
//! # CSV format
//!
//! One row per store, four columns in this order:
//!
//! ```csv
//! 1,Downtown Market,30.6954,-88.0399
//! 2,Midtown Grocer,30.6790,-88.1010
//! 3,West Mobile,30.6866,-88.2000
//! ```
//!
//! Files have **no header row** by default; the columns are named
//! positionally `store_id, store_name, latitude, longitude`.  Set
//! [`CsvOptions::has_headers`] to read a file whose first row carries those
//! names instead (columns are then matched by name, in any order).
//!
//! # Validation
//!
//! Every row is checked before it becomes a [`Store`]:
//!
//! | Problem                                   | Error                      |
//! |-------------------------------------------|----------------------------|
//! | Wrong field count / non-numeric field     | `DatasetError::Parse`      |
//! | Latitude or longitude out of range / NaN  | `DatasetError::CoordinateOutOfRange` |
//! | Repeated `store_id`                       | `DatasetError::DuplicateId` |
//! | More rows than a `RecordIndex` addresses  | `DatasetError::TooManyStores` |
//!
//! The first offending row aborts the load; no partial dataset is returned.
//! File order is preserved and becomes the tie-break order of query results.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;

use sf_core::{GeoPoint, RecordIndex, Store, StoreId};

use crate::{DatasetError, DatasetResult};

// ── CSV record ────────────────────────────────────────────────────────────────

const FIELDS: usize = 4;

#[derive(Deserialize)]
struct StoreRecord {
    store_id:   i64,
    store_name: String,
    latitude:   f64,
    longitude:  f64,
}

// ── Options ───────────────────────────────────────────────────────────────────

/// How to read a store CSV.
#[derive(Clone, Debug, Default)]
pub struct CsvOptions {
    /// First row is a header naming the columns.
    pub has_headers: bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every store from a CSV file, in file order.
pub fn load_stores_csv(path: &Path, opts: &CsvOptions) -> DatasetResult<Vec<Store>> {
    let file = std::fs::File::open(path).map_err(DatasetError::Io)?;
    load_stores_reader(file, opts)
}

/// Like [`load_stores_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for datasets embedded in
/// the binary.
pub fn load_stores_reader<R: Read>(reader: R, opts: &CsvOptions) -> DatasetResult<Vec<Store>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(opts.has_headers)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = if opts.has_headers {
        Some(csv_reader.headers().map_err(|e| parse_error(e, 1))?.clone())
    } else {
        None
    };

    let mut stores: Vec<Store> = Vec::new();
    let mut seen: FxHashSet<i64> = FxHashSet::default();
    let mut record = csv::StringRecord::new();

    while csv_reader.read_record(&mut record).map_err(|e| parse_error(e, 0))? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        // Positional deserialization ignores trailing fields, and the csv
        // reader only compares rows with each other.
        if record.len() != FIELDS {
            return Err(DatasetError::Parse {
                line,
                message: format!("expected {FIELDS} fields, found {}", record.len()),
            });
        }
        if stores.len() == RecordIndex::MAX_RECORDS {
            return Err(DatasetError::TooManyStores { line, max: RecordIndex::MAX_RECORDS });
        }

        let row: StoreRecord = record
            .deserialize(headers.as_ref())
            .map_err(|e| parse_error(e, line))?;

        let pos = GeoPoint::new(row.latitude, row.longitude);
        if let Err(source) = pos.validate() {
            return Err(DatasetError::CoordinateOutOfRange {
                line,
                id: StoreId(row.store_id),
                source,
            });
        }

        if !seen.insert(row.store_id) {
            return Err(DatasetError::DuplicateId { id: StoreId(row.store_id), line });
        }

        stores.push(Store {
            id:   StoreId(row.store_id),
            name: row.store_name,
            pos,
        });
    }

    Ok(stores)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `line` is used when the error itself carries no position.
fn parse_error(e: csv::Error, line: u64) -> DatasetError {
    let line = e.position().map(|p| p.line()).unwrap_or(line);
    match e.into_kind() {
        csv::ErrorKind::Io(io) => DatasetError::Io(io),
        kind => DatasetError::Parse { line, message: describe(kind) },
    }
}

fn describe(kind: csv::ErrorKind) -> String {
    match kind {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("expected {expected_len} fields, found {len}")
        }
        other => format!("{other:?}"),
    }
}
