//! CSV ingestion
//!
//! Turns an analyzer CSV export into a [`Dataset`] of raw text cells.
//! The reader guarantees what the pipeline assumes about headers: BOM
//! stripped, trimmed, internal whitespace runs collapsed to one space.
//! Schema inference is disabled so locale-variant numbers ("12,5",
//! "1,234.56") reach the scalar parsers untouched.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::*;

use crate::constants::ingest::DELIMITER_CANDIDATES;
use crate::data::model::Dataset;
use crate::error::{IngestError, Result};

/// Load a CSV file into a [`Dataset`].
///
/// The delimiter is sniffed from the header line over the candidates
/// `, ; \t |` (most frequent wins, comma on ties). Cells are trimmed;
/// missing cells become empty strings.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    profiling::scope!("load_csv");

    let delimiter = sniff_delimiter(path)?;

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_separator(delimiter)
        // 0 disables inference: every column is read as a string column.
        .with_infer_schema_length(Some(0))
        .finish()?
        .collect()?;

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_header(name.as_str()))
        .collect();

    let mut rows: Vec<Vec<String>> = vec![Vec::with_capacity(columns.len()); df.height()];
    for column in df.get_columns() {
        let cells = column.as_materialized_series().str()?;
        for (row, cell) in cells.into_iter().enumerate() {
            rows[row].push(cell.unwrap_or("").trim().to_string());
        }
    }

    let dataset = Dataset::new(columns, rows)?;
    log::info!(
        "loaded {} rows x {} columns from {} (delimiter {:?})",
        dataset.height(),
        dataset.width(),
        path.display(),
        delimiter as char,
    );
    Ok(dataset)
}

/// Pick the delimiter with the highest count in the header line.
fn sniff_delimiter(path: &Path) -> Result<u8> {
    let file = File::open(path)?;
    let mut header = String::new();
    BufReader::new(file).read_line(&mut header)?;
    if header.trim().is_empty() {
        return Err(IngestError::EmptyFile);
    }

    let mut best = (DELIMITER_CANDIDATES[0], 0usize);
    for candidate in DELIMITER_CANDIDATES {
        let count = header.bytes().filter(|&b| b == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    Ok(best.0)
}

/// Strip a UTF-8 BOM, trim, and collapse internal whitespace runs.
fn normalize_header(raw: &str) -> String {
    let stripped = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
