//! Logical schema detection
//!
//! Maps the raw header of a dataset onto the fixed measurement roles:
//! the time axis, per-phase voltage / current / peak current / power,
//! and the aggregate power column. Resolution is a pure function of the
//! column names; candidate tables live in [`crate::constants::columns`].

use crate::constants::columns;
use crate::view::Phase;

/// Resolved column names for one per-phase measurement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseColumns {
    pub l1: Option<String>,
    pub l2: Option<String>,
    pub l3: Option<String>,
}

impl PhaseColumns {
    fn detect(column_names: &[String], candidates: [&[&str]; 3]) -> Self {
        Self {
            l1: resolve(column_names, candidates[Phase::L1.index()]),
            l2: resolve(column_names, candidates[Phase::L2.index()]),
            l3: resolve(column_names, candidates[Phase::L3.index()]),
        }
    }

    /// The resolved column for one phase, if any.
    pub fn get(&self, phase: Phase) -> Option<&str> {
        match phase {
            Phase::L1 => self.l1.as_deref(),
            Phase::L2 => self.l2.as_deref(),
            Phase::L3 => self.l3.as_deref(),
        }
    }

    /// Whether at least one phase resolved.
    pub fn any_resolved(&self) -> bool {
        self.l1.is_some() || self.l2.is_some() || self.l3.is_some()
    }
}

/// The detected logical schema of a dataset.
///
/// Every resolved name is guaranteed to be a column of the dataset the
/// schema was detected from; an unresolved role is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub time: Option<String>,
    pub voltage: PhaseColumns,
    pub current: PhaseColumns,
    pub peak_current: PhaseColumns,
    pub power: PhaseColumns,
    pub total_power: Option<String>,
}

impl Schema {
    /// Detect the schema from an ordered header.
    ///
    /// Deterministic: the same set of column names always yields the
    /// same schema, regardless of row contents. Callers must not invoke
    /// this for a dataset with no records.
    pub fn detect(column_names: &[String]) -> Self {
        profiling::scope!("schema_detect");

        let schema = Self {
            time: resolve(column_names, columns::TIME),
            voltage: PhaseColumns::detect(column_names, columns::VOLTAGE),
            current: PhaseColumns::detect(column_names, columns::CURRENT),
            peak_current: PhaseColumns::detect(column_names, columns::PEAK_CURRENT),
            power: PhaseColumns::detect(column_names, columns::POWER),
            total_power: resolve(column_names, columns::TOTAL_POWER),
        };
        log::debug!(
            "schema detected: time={:?}, total_power={:?}",
            schema.time,
            schema.total_power
        );
        schema
    }

    /// Whether any power role (per-phase or aggregate) resolved.
    pub fn any_power_resolved(&self) -> bool {
        self.power.any_resolved() || self.total_power.is_some()
    }
}

/// First candidate present among the column names, cloned from the
/// actual header entry so the schema always points at a real column.
fn resolve(column_names: &[String], candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|candidate| column_names.iter().any(|name| name == *candidate))
        .map(|candidate| (*candidate).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_detect_partial_header() {
        let schema = Schema::detect(&header(&["Time", "Urms L1 MAX", "Irms L1 MAX"]));
        assert_eq!(schema.time.as_deref(), Some("Time"));
        assert_eq!(schema.voltage.l1.as_deref(), Some("Urms L1 MAX"));
        assert_eq!(schema.current.l1.as_deref(), Some("Irms L1 MAX"));
        assert_eq!(schema.voltage.l2, None);
        assert_eq!(schema.voltage.l3, None);
        assert_eq!(schema.total_power, None);
    }

    #[test]
    fn test_detect_full_header() {
        let schema = Schema::detect(&header(&[
            "Time",
            "Urms L1 MAX",
            "Urms L2 MAX",
            "Urms L3 MAX",
            "Irms L1 MAX",
            "Irms L2 MAX",
            "Irms L3 MAX",
            "Ipk L1 MAX",
            "Ipk L2 MAX",
            "Ipk L3 MAX",
            "P L1 MAX",
            "P L2 MAX",
            "P L3 MAX",
            "P All MAX",
        ]));
        for phase in Phase::ALL {
            assert!(schema.voltage.get(phase).is_some());
            assert!(schema.current.get(phase).is_some());
            assert!(schema.peak_current.get(phase).is_some());
            assert!(schema.power.get(phase).is_some());
        }
        assert_eq!(schema.total_power.as_deref(), Some("P All MAX"));
        assert!(schema.any_power_resolved());
    }

    #[test]
    fn test_detect_underscore_variant() {
        let schema = Schema::detect(&header(&["Time", "Urms_L1_MAX", "P_All_MAX"]));
        assert_eq!(schema.voltage.l1.as_deref(), Some("Urms_L1_MAX"));
        assert_eq!(schema.total_power.as_deref(), Some("P_All_MAX"));
    }

    #[test]
    fn test_candidate_order_breaks_ties() {
        // Both spellings present: the earlier candidate wins.
        let schema = Schema::detect(&header(&["Time", "Urms_L1_MAX", "Urms L1 MAX"]));
        assert_eq!(schema.voltage.l1.as_deref(), Some("Urms L1 MAX"));
    }

    #[test]
    fn test_detection_is_deterministic() {
        let cols = header(&["Time", "Urms L1 MAX", "P All MAX", "Extra"]);
        assert_eq!(Schema::detect(&cols), Schema::detect(&cols));
    }

    #[test]
    fn test_unmatched_header_resolves_nothing() {
        let schema = Schema::detect(&header(&["foo", "bar"]));
        assert_eq!(schema, Schema::default());
        assert!(!schema.any_power_resolved());
    }
}
