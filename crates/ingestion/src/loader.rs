//! CSV loader for transducer exports.
//!
//! Columns are fixed by position; the first row is a header and is skipped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bathy_common::Sample;
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{IngestionError, Result};

/// Column index of the latitude value (0-based).
pub const LATITUDE_COLUMN: usize = 1;
/// Column index of the longitude value.
pub const LONGITUDE_COLUMN: usize = 2;
/// Column index of the depth value.
pub const DEPTH_COLUMN: usize = 3;

const MIN_COLUMNS: usize = DEPTH_COLUMN + 1;

/// Load every sample from a CSV file.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path).map_err(|source| IngestionError::FileRead {
        path: name.clone(),
        source,
    })?;

    read_samples(BufReader::new(file), &name)
}

/// Load every sample from CSV text read from `reader`.
///
/// `source_name` is only used in diagnostics.
pub fn read_samples<R: Read>(reader: R, source_name: &str) -> Result<Vec<Sample>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    for record in csv.records() {
        let record = record.map_err(|source| IngestionError::Csv {
            path: source_name.to_string(),
            source,
        })?;
        samples.push(parse_record(&record, source_name)?);
    }

    tracing::debug!(source = %source_name, rows = samples.len(), "Loaded samples");
    Ok(samples)
}

fn parse_record(record: &StringRecord, source_name: &str) -> Result<Sample> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    if record.len() < MIN_COLUMNS {
        return Err(IngestionError::MissingColumn {
            path: source_name.to_string(),
            line,
            expected: MIN_COLUMNS,
            found: record.len(),
        });
    }

    let field = |column: usize| -> Result<f64> {
        let raw = record.get(column).unwrap_or_default();
        // `nan` and `inf` parse, but no sounding can carry them
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| IngestionError::InvalidNumber {
                path: source_name.to_string(),
                line,
                column,
                value: raw.to_string(),
            })
    };

    Ok(Sample::new(
        field(LATITUDE_COLUMN)?,
        field(LONGITUDE_COLUMN)?,
        field(DEPTH_COLUMN)?,
    ))
}
