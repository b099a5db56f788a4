//! phase-plot crate root: re-exports and module wiring.
//!
//! Turns power-quality analyzer CSV exports (per-phase voltage, current,
//! peak current, and power over time) into labeled, time-indexed numeric
//! series for any charting frontend. The pipeline is pure and
//! synchronous: ingestion produces a [`Dataset`] of raw text cells,
//! [`Schema::detect`] resolves the measurement roles from the header,
//! and [`build_chart`] / [`validate`] derive the series and the
//! plottability verdict for a [`ViewSelection`].
//!
//! Hosts that prefer a stateful boundary use [`ChartState`]: load a
//! dataset, set a selection, read back chart, status, and detected
//! columns.

pub mod constants;
pub mod data;
pub mod error;
pub mod parse;
pub mod schema;
pub mod series;
pub mod state;
pub mod validate;
pub mod view;

// Public re-exports for a compact external API
pub use data::{Dataset, load_csv};
pub use error::{IngestError, ValidationError};
pub use parse::{parse_number, parse_timestamp};
pub use schema::{PhaseColumns, Schema};
pub use series::{ChartResult, Series, build_chart};
pub use state::ChartState;
pub use validate::{ValidationStatus, validate};
pub use view::{Metric, Phase, PhaseFilter, ViewSelection};
