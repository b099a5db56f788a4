//! Error types for phase-plot
//!
//! Two taxonomies with different lifecycles: [`IngestError`] is fatal to a
//! single load attempt and reported by the ingestion collaborator;
//! [`ValidationError`] is a recoverable plottability diagnosis surfaced to
//! the user together with the detected column list.

use thiserror::Error;

use crate::constants::columns;
use crate::view::Metric;

/// Errors raised while turning a CSV file into a [`crate::data::Dataset`].
#[derive(Error, Debug)]
pub enum IngestError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// CSV decoding error from the polars reader
    #[error("CSV read error: {0}")]
    Csv(#[from] polars::error::PolarsError),

    /// File has no header line
    #[error("File is empty or has no header row")]
    EmptyFile,

    /// A row's cell count does not match the header
    #[error("Row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Why the current dataset/selection combination cannot be plotted.
///
/// Every variant carries the detected column list so the diagnosis can show
/// what was actually found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No time-role candidate matched any column
    #[error("no time column found")]
    MissingTimeColumn { columns: Vec<String> },

    /// No non-time column holds a single parseable numeric value
    #[error("no numeric columns found")]
    NoNumericColumns { columns: Vec<String> },

    /// None of the selected metric's roles resolved to a column
    #[error("no {metric} columns found")]
    MissingMetricColumns { metric: Metric, columns: Vec<String> },
}

impl ValidationError {
    /// Get a user-friendly diagnosis suitable for displaying in UI,
    /// naming the columns that were searched for and the ones detected.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingTimeColumn { columns } => format!(
                "No time column found. Expected one of: {}. Detected columns: {}",
                columns::TIME.join(", "),
                columns.join(", ")
            ),
            ValidationError::NoNumericColumns { columns } => format!(
                "No numeric columns to plot. Detected columns: {}",
                columns.join(", ")
            ),
            ValidationError::MissingMetricColumns { metric, columns } => format!(
                "No {} columns found. Expected names like: {}. Detected columns: {}",
                metric,
                expected_names(*metric).join(", "),
                columns.join(", ")
            ),
        }
    }

    /// The detected column list carried by this diagnosis.
    pub fn detected_columns(&self) -> &[String] {
        match self {
            ValidationError::MissingTimeColumn { columns }
            | ValidationError::NoNumericColumns { columns }
            | ValidationError::MissingMetricColumns { columns, .. } => columns,
        }
    }
}

/// Preferred spellings for a metric's columns, one per phase role.
fn expected_names(metric: Metric) -> Vec<&'static str> {
    let per_phase = |table: [&'static [&'static str]; 3]| -> Vec<&'static str> {
        table.iter().map(|candidates| candidates[0]).collect()
    };
    match metric {
        Metric::Voltage => per_phase(columns::VOLTAGE),
        Metric::Current => per_phase(columns::CURRENT),
        Metric::PeakCurrent => per_phase(columns::PEAK_CURRENT),
        Metric::Power | Metric::TotalPower => {
            let mut names = per_phase(columns::POWER);
            names.push(columns::TOTAL_POWER[0]);
            names
        }
        // The all-columns metric has no role table; anything numeric works.
        Metric::All => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MissingTimeColumn {
            columns: vec!["A".to_string(), "B".to_string()],
        };
        let msg = err.user_message();
        assert!(msg.contains("Time"));
        assert!(msg.contains("A, B"));

        let err = ValidationError::MissingMetricColumns {
            metric: Metric::Voltage,
            columns: vec!["Time".to_string()],
        };
        let msg = err.user_message();
        assert!(msg.contains("Urms L1 MAX"));
        assert!(msg.contains("Detected columns: Time"));
    }

    #[test]
    fn test_detected_columns_accessor() {
        let columns = vec!["Time".to_string(), "Extra".to_string()];
        let err = ValidationError::NoNumericColumns {
            columns: columns.clone(),
        };
        assert_eq!(err.detected_columns(), columns);
    }

    #[test]
    fn test_power_expected_names_include_total() {
        let names = expected_names(Metric::TotalPower);
        assert!(names.contains(&"P All MAX"));
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_ingest_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ingest_err: IngestError = io_err.into();
        assert!(matches!(ingest_err, IngestError::FileIo(_)));
    }
}
