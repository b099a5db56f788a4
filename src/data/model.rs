//! Tabular dataset model
//!
//! A [`Dataset`] is one atomically loaded snapshot of an analyzer export:
//! the normalized header (column order preserved, it drives display order)
//! and one row of raw cell text per record. Cells stay text; typing them
//! is the pipeline's job, not the container's.

use crate::error::IngestError;

/// The full loaded dataset. Immutable once constructed; a new upload
/// replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset from pre-parsed parts.
    ///
    /// Every row must have exactly one cell per column (use an empty
    /// string for a missing value); a ragged row is rejected so all
    /// records are guaranteed to share the header's key set.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, IngestError> {
        let expected = columns.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(IngestError::RaggedRow {
                    row,
                    expected,
                    got: cells.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// A dataset with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ordered column names from the header.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Raw cell text at (row, column). `None` when the column is unknown
    /// or the row is out of range; an empty cell is `Some("")`.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|cells| cells[idx].as_str())
    }

    /// Iterate a column's cells top to bottom.
    pub fn column_cells(&self, column: &str) -> Option<impl Iterator<Item = &str>> {
        let idx = self.column_index(column)?;
        Some(self.rows.iter().map(move |cells| cells[idx].as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["Time".to_string(), "Urms L1 MAX".to_string()],
            vec![
                vec!["01/01/2024 00:00".to_string(), "230.1".to_string()],
                vec!["01/01/2024 00:10".to_string(), String::new()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_dataset_shape() {
        let ds = sample();
        assert_eq!(ds.height(), 2);
        assert_eq!(ds.width(), 2);
        assert!(!ds.is_empty());
        assert_eq!(ds.column_names(), ["Time", "Urms L1 MAX"]);
    }

    #[test]
    fn test_cell_access() {
        let ds = sample();
        assert_eq!(ds.cell(0, "Urms L1 MAX"), Some("230.1"));
        assert_eq!(ds.cell(1, "Urms L1 MAX"), Some(""));
        assert_eq!(ds.cell(0, "Nope"), None);
        assert_eq!(ds.cell(5, "Time"), None);

        let cells: Vec<&str> = ds.column_cells("Time").unwrap().collect();
        assert_eq!(cells, ["01/01/2024 00:00", "01/01/2024 00:10"]);
        assert!(ds.column_cells("Nope").is_none());
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = Dataset::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec!["1".to_string()]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IngestError::RaggedRow {
                row: 0,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::empty();
        assert!(ds.is_empty());
        assert_eq!(ds.width(), 0);
    }
}
