//! Host-facing chart state
//!
//! [`ChartState`] is the boundary consumed by the excluded collaborators
//! (file picker, dropdown controls, renderer): feed it a dataset and a
//! selection, read back the chart, the validation verdict, and the
//! detected columns. Recomputation happens eagerly on the two mutation
//! events, so every getter is a cheap borrow.

use crate::data::Dataset;
use crate::schema::Schema;
use crate::series::{ChartResult, build_chart};
use crate::validate::{ValidationStatus, validate};
use crate::view::ViewSelection;

/// Main state container for one chart view.
#[derive(Debug, Default)]
pub struct ChartState {
    dataset: Dataset,
    schema: Schema,
    selection: ViewSelection,
    chart: Option<ChartResult>,
    status: ValidationStatus,
}

impl ChartState {
    /// Create an empty state with the default selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dataset wholesale and re-detect the schema.
    ///
    /// The previous dataset is discarded entirely; there is no
    /// incremental append.
    pub fn load_dataset(&mut self, dataset: Dataset) {
        self.schema = if dataset.is_empty() {
            Schema::default()
        } else {
            Schema::detect(dataset.column_names())
        };
        log::info!(
            "dataset loaded: {} rows, {} columns",
            dataset.height(),
            dataset.width()
        );
        self.dataset = dataset;
        self.recompute();
    }

    /// Update the active view selection.
    pub fn set_selection(&mut self, selection: ViewSelection) {
        self.selection = selection.normalized();
        self.recompute();
    }

    /// The active (normalized) selection.
    pub fn selection(&self) -> &ViewSelection {
        &self.selection
    }

    /// The schema detected from the current dataset.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The chart for the current selection. `Some` iff the validation
    /// status is [`ValidationStatus::Ok`].
    pub fn chart_result(&self) -> Option<&ChartResult> {
        self.chart.as_ref()
    }

    /// The current validation verdict.
    pub fn validation_status(&self) -> &ValidationStatus {
        &self.status
    }

    /// Ordered column names of the current dataset, for diagnostics.
    pub fn detected_columns(&self) -> &[String] {
        self.dataset.column_names()
    }

    fn recompute(&mut self) {
        self.status = validate(&self.dataset, &self.schema, &self.selection);
        self.chart = if self.status.is_ok() {
            Some(build_chart(&self.dataset, &self.schema, &self.selection))
        } else {
            None
        };
    }
}
