//! Series construction
//!
//! Turns (dataset, schema, selection) into the ordered list of named
//! series a renderer should draw. Cell coercion runs through the scalar
//! parsers; a candidate whose values are all unparseable is dropped as
//! unusable rather than reported as an error.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::data::Dataset;
use crate::parse::{parse_number, parse_timestamp};
use crate::schema::{PhaseColumns, Schema};
use crate::view::{Metric, Phase, PhaseFilter, ViewSelection};

/// One named, time-aligned numeric sequence.
///
/// Index-aligned with the dataset: unparseable cells stay as `None`
/// gaps so row positions are preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub timestamps: Vec<Option<NaiveDateTime>>,
    pub values: Vec<Option<f64>>,
}

impl Series {
    /// A series is usable iff at least one value parsed.
    pub fn is_usable(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }
}

/// Everything a renderer needs for one chart. Derived data; recomputed,
/// never patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub series: Vec<Series>,
    pub title: String,
    pub y_axis_label: String,
}

/// Whether a column name contains the line's token as a delimited word.
///
/// Tokens are split on space and underscore; matching is exact and
/// ASCII-case-insensitive, so `"Irms L1 MAX"` and `"P_L1_MAX"` match L1
/// while `"L11_Status"` does not.
pub fn matches_line(column: &str, line: Phase) -> bool {
    column
        .split([' ', '_'])
        .any(|token| token.eq_ignore_ascii_case(line.token()))
}

/// Build the chart for the given selection.
///
/// Series order is deterministic in (schema, selection) and labels are
/// unique within one result. Callers should validate first; with an
/// unresolved time role every timestamp comes out `None`.
pub fn build_chart(dataset: &Dataset, schema: &Schema, selection: &ViewSelection) -> ChartResult {
    profiling::scope!("build_chart");

    let timestamps: Vec<Option<NaiveDateTime>> = match schema.time.as_deref() {
        Some(time_col) => match dataset.column_cells(time_col) {
            Some(cells) => cells.map(parse_timestamp).collect(),
            None => vec![None; dataset.height()],
        },
        None => vec![None; dataset.height()],
    };

    let mut builder = ChartBuilder {
        dataset,
        timestamps,
        series: Vec::new(),
    };

    let (title, y_axis_label) = match selection.metric {
        Metric::All => {
            for column in dataset.column_names() {
                if Some(column.as_str()) == schema.time.as_deref() {
                    continue;
                }
                let admitted = match selection.line_filter.phase() {
                    Some(line) => matches_line(column, line),
                    None => true,
                };
                if admitted {
                    builder.push(column, Some(column.as_str()));
                }
            }
            ("All columns".to_string(), "Value")
        }
        Metric::Voltage => {
            builder.push_phases("Urms", &schema.voltage, selection.phase);
            (format!("Voltage (Urms) - {}", selection.phase), "V")
        }
        Metric::Current => {
            builder.push_phases("Irms", &schema.current, selection.phase);
            (format!("Current (Irms) - {}", selection.phase), "A")
        }
        Metric::PeakCurrent => {
            builder.push_phases("Ipk", &schema.peak_current, selection.phase);
            (format!("Peak current (Ipk) - {}", selection.phase), "A")
        }
        Metric::Power => {
            builder.push_phases("P", &schema.power, selection.phase);
            if selection.phase == PhaseFilter::All {
                builder.push("P Total (All)", schema.total_power.as_deref());
                ("Power - all phases + total".to_string(), "W")
            } else {
                (format!("Power - {}", selection.phase), "W")
            }
        }
        Metric::TotalPower => {
            // Phase selection has no effect here.
            builder.push("P Total (All)", schema.total_power.as_deref());
            ("Total power (P All)".to_string(), "W")
        }
    };

    ChartResult {
        series: builder.series,
        title,
        y_axis_label: y_axis_label.to_string(),
    }
}

struct ChartBuilder<'a> {
    dataset: &'a Dataset,
    timestamps: Vec<Option<NaiveDateTime>>,
    series: Vec<Series>,
}

impl ChartBuilder<'_> {
    /// Parse one column into a series, dropping it when no value is
    /// usable or the role is unresolved.
    fn push(&mut self, label: &str, column: Option<&str>) {
        let Some(column) = column else { return };
        let Some(cells) = self.dataset.column_cells(column) else {
            return;
        };
        let values: Vec<Option<f64>> = cells.map(parse_number).collect();
        if !values.iter().any(Option::is_some) {
            return;
        }
        self.series.push(Series {
            label: label.to_string(),
            timestamps: self.timestamps.clone(),
            values,
        });
    }

    /// Push L1..L3 for `All`, or exactly the selected line.
    fn push_phases(&mut self, prefix: &str, roles: &PhaseColumns, phase: PhaseFilter) {
        match phase.phase() {
            None => {
                for p in Phase::ALL {
                    self.push(&format!("{prefix} {}", p.token()), roles.get(p));
                }
            }
            Some(p) => self.push(&format!("{prefix} {}", p.token()), roles.get(p)),
        }
    }
}
