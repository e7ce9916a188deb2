//! Bulk payload parsing.
//!
//! Turns an uploaded tab-delimited file into a [`NewBatch`]. The whole file
//! is decoded, then validated, before anything is written: the result is
//! either every row as a storage tuple, or the first failure tagged with its
//! 1-based data row number. Decode failures in any row are reported ahead of
//! validation failures.

use csv::ReaderBuilder;

use crate::codec::{decode_row, precheck_row, RawRecord};
use crate::entity::{EntityKind, NewBatch};
use crate::error::CoreError;

/// Column delimiter of bulk files.
pub const BULK_DELIMITER: u8 = b'\t';

/// Parse and validate a bulk payload for `kind`.
pub fn parse_batch(kind: EntityKind, bytes: &[u8]) -> Result<NewBatch, CoreError> {
    let mut batch = NewBatch::empty(kind)?;

    let text = std::str::from_utf8(bytes)
        .map_err(|e| CoreError::Decode(format!("bulk data is not valid UTF-8: {e}")))?;

    let mut reader = ReaderBuilder::new()
        .delimiter(BULK_DELIMITER)
        .quoting(false)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CoreError::Decode(format!("bad bulk format: {e}")))?
        .clone();

    // Pass 1: shape and dates for every row, so a decode failure anywhere in
    // the file wins over a rule violation in an earlier row.
    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let record =
            result.map_err(|e| CoreError::Decode(format!("row {row}: bad bulk format: {e}")))?;

        // Short rows leave trailing columns absent, which the codec reports as missing.
        let raw: RawRecord = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();

        precheck_row(kind, &raw).map_err(|e| at_row(row, e))?;
        rows.push(raw);
    }

    // Pass 2: field rules.
    for (index, raw) in rows.iter().enumerate() {
        let tuple = decode_row(kind, raw).map_err(|e| at_row(index + 1, e))?;
        batch.push(tuple)?;
    }

    Ok(batch)
}

/// Tag a row-level failure with its row number, keeping the error kind.
fn at_row(row: usize, err: CoreError) -> CoreError {
    match err {
        CoreError::Validation(msg) => CoreError::Validation(format!("row {row}: {msg}")),
        CoreError::Decode(msg) => CoreError::Decode(format!("row {row}: {msg}")),
        CoreError::ConstraintViolation(msg) => {
            CoreError::ConstraintViolation(format!("row {row}: {msg}"))
        }
        other => other,
    }
}
