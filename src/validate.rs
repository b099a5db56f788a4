//! Plottability validation
//!
//! Decides whether the current (dataset, schema, selection) combination
//! can be charted at all, and if not, why. Checks run in a fixed order
//! and the first failure wins. An empty dataset is its own status, not
//! an error: hosts render an empty state for it.

use crate::data::Dataset;
use crate::error::ValidationError;
use crate::parse::parse_number;
use crate::schema::Schema;
use crate::view::{Metric, ViewSelection};

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationStatus {
    /// No records loaded.
    Empty,
    /// The selection is plottable.
    Ok,
    /// The selection cannot be plotted; the diagnosis says why.
    Error(ValidationError),
}

impl Default for ValidationStatus {
    fn default() -> Self {
        ValidationStatus::Empty
    }
}

impl ValidationStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationStatus::Ok)
    }
}

/// Validate the selection against the dataset and its schema.
pub fn validate(dataset: &Dataset, schema: &Schema, selection: &ViewSelection) -> ValidationStatus {
    if dataset.is_empty() {
        return ValidationStatus::Empty;
    }

    let columns = || dataset.column_names().to_vec();

    let Some(time_col) = schema.time.as_deref() else {
        return ValidationStatus::Error(ValidationError::MissingTimeColumn { columns: columns() });
    };

    match selection.metric {
        Metric::All => {
            let has_numeric = dataset
                .column_names()
                .iter()
                .filter(|name| name.as_str() != time_col)
                .any(|name| {
                    dataset
                        .column_cells(name)
                        .is_some_and(|mut cells| cells.any(|cell| parse_number(cell).is_some()))
                });
            if !has_numeric {
                return ValidationStatus::Error(ValidationError::NoNumericColumns {
                    columns: columns(),
                });
            }
        }
        Metric::Voltage => {
            if !schema.voltage.any_resolved() {
                return ValidationStatus::Error(ValidationError::MissingMetricColumns {
                    metric: Metric::Voltage,
                    columns: columns(),
                });
            }
        }
        Metric::Current => {
            if !schema.current.any_resolved() {
                return ValidationStatus::Error(ValidationError::MissingMetricColumns {
                    metric: Metric::Current,
                    columns: columns(),
                });
            }
        }
        Metric::PeakCurrent => {
            if !schema.peak_current.any_resolved() {
                return ValidationStatus::Error(ValidationError::MissingMetricColumns {
                    metric: Metric::PeakCurrent,
                    columns: columns(),
                });
            }
        }
        // Either power metric plots as long as any power role resolved.
        Metric::Power | Metric::TotalPower => {
            if !schema.any_power_resolved() {
                return ValidationStatus::Error(ValidationError::MissingMetricColumns {
                    metric: Metric::Power,
                    columns: columns(),
                });
            }
        }
    }

    ValidationStatus::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::PhaseFilter;

    fn dataset(columns: &[&str], rows: &[&[&str]]) -> Dataset {
        Dataset::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    fn selection(metric: Metric) -> ViewSelection {
        ViewSelection::new(metric, PhaseFilter::All, PhaseFilter::All)
    }

    #[test]
    fn test_empty_dataset_is_not_an_error() {
        let ds = Dataset::empty();
        let status = validate(&ds, &Schema::default(), &selection(Metric::All));
        assert_eq!(status, ValidationStatus::Empty);
    }

    #[test]
    fn test_missing_time_wins_over_everything() {
        // All metric roles resolve, but no time candidate matches.
        let ds = dataset(
            &["Zeit", "Urms L1 MAX", "P All MAX"],
            &[&["01/01/2024 00:00", "230", "950"]],
        );
        let schema = Schema::detect(ds.column_names());
        let status = validate(&ds, &schema, &selection(Metric::Voltage));
        match status {
            ValidationStatus::Error(ValidationError::MissingTimeColumn { columns }) => {
                assert_eq!(columns, ["Zeit", "Urms L1 MAX", "P All MAX"]);
            }
            other => panic!("expected MissingTimeColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_all_metric_needs_one_numeric_column() {
        let ds = dataset(
            &["Time", "Comment"],
            &[&["01/01/2024 00:00", "startup"], &["01/01/2024 00:10", ""]],
        );
        let schema = Schema::detect(ds.column_names());
        let status = validate(&ds, &schema, &selection(Metric::All));
        assert!(matches!(
            status,
            ValidationStatus::Error(ValidationError::NoNumericColumns { .. })
        ));

        // One parseable cell anywhere flips the verdict.
        let ds = dataset(
            &["Time", "Comment", "X"],
            &[&["01/01/2024 00:00", "startup", ""], &["01/01/2024 00:10", "", "7,5"]],
        );
        let schema = Schema::detect(ds.column_names());
        assert!(validate(&ds, &schema, &selection(Metric::All)).is_ok());
    }

    #[test]
    fn test_metric_without_columns() {
        let ds = dataset(&["Time", "P L1 MAX"], &[&["01/01/2024 00:00", "950"]]);
        let schema = Schema::detect(ds.column_names());

        let status = validate(&ds, &schema, &selection(Metric::Voltage));
        assert!(matches!(
            status,
            ValidationStatus::Error(ValidationError::MissingMetricColumns {
                metric: Metric::Voltage,
                ..
            })
        ));
    }

    #[test]
    fn test_power_accepts_any_power_role() {
        // Only the aggregate column resolves; both power metrics pass.
        let ds = dataset(&["Time", "P All MAX"], &[&["01/01/2024 00:00", "950"]]);
        let schema = Schema::detect(ds.column_names());
        assert!(validate(&ds, &schema, &selection(Metric::Power)).is_ok());
        assert!(validate(&ds, &schema, &selection(Metric::TotalPower)).is_ok());

        // No power role at all: both report the power taxonomy entry.
        let ds = dataset(&["Time", "Urms L1 MAX"], &[&["01/01/2024 00:00", "230"]]);
        let schema = Schema::detect(ds.column_names());
        let status = validate(&ds, &schema, &selection(Metric::TotalPower));
        assert!(matches!(
            status,
            ValidationStatus::Error(ValidationError::MissingMetricColumns {
                metric: Metric::Power,
                ..
            })
        ));
    }

    #[test]
    fn test_happy_path() {
        let ds = dataset(
            &["Time", "Urms L1 MAX", "Irms L1 MAX"],
            &[&["31/01/2024 08:15", "229,9", "12,5"]],
        );
        let schema = Schema::detect(ds.column_names());
        for metric in [Metric::All, Metric::Voltage, Metric::Current] {
            assert!(validate(&ds, &schema, &selection(metric)).is_ok());
        }
    }
}
