//! View selection state
//!
//! What the host wants plotted: a metric, a phase, and (for the all-columns
//! metric) a line filter. Pure data, serializable so hosts can persist it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three electrical phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    L1,
    L2,
    L3,
}

impl Phase {
    /// All phases in display order.
    pub const ALL: [Phase; 3] = [Phase::L1, Phase::L2, Phase::L3];

    /// The literal token used in column names and labels.
    pub fn token(self) -> &'static str {
        match self {
            Phase::L1 => "L1",
            Phase::L2 => "L2",
            Phase::L3 => "L3",
        }
    }

    /// Index into per-phase tables (L1 = 0).
    pub fn index(self) -> usize {
        match self {
            Phase::L1 => 0,
            Phase::L2 => 1,
            Phase::L3 => 2,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Which measurement to plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// Every non-time column, optionally filtered by line.
    All,
    /// RMS voltage (Urms) per phase.
    Voltage,
    /// RMS current (Irms) per phase.
    Current,
    /// Peak current (Ipk) per phase.
    PeakCurrent,
    /// Active power (P) per phase, plus the total.
    Power,
    /// Aggregate active power only.
    TotalPower,
}

impl Default for Metric {
    fn default() -> Self {
        Metric::All
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::All => "all columns",
            Metric::Voltage => "voltage (Urms)",
            Metric::Current => "current (Irms)",
            Metric::PeakCurrent => "peak current (Ipk)",
            Metric::Power => "power (P)",
            Metric::TotalPower => "total power (P All)",
        };
        f.write_str(name)
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Metric::All),
            "voltage" | "urms" => Ok(Metric::Voltage),
            "current" | "irms" => Ok(Metric::Current),
            "peak-current" | "peakcurrent" | "ipk" => Ok(Metric::PeakCurrent),
            "power" | "p" => Ok(Metric::Power),
            "total-power" | "totalpower" | "pall" => Ok(Metric::TotalPower),
            other => Err(format!("unknown metric '{other}'")),
        }
    }
}

/// A phase restriction: a single line, or no restriction.
///
/// Doubles as the line filter for [`Metric::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseFilter {
    All,
    L1,
    L2,
    L3,
}

impl Default for PhaseFilter {
    fn default() -> Self {
        PhaseFilter::All
    }
}

impl PhaseFilter {
    /// The specific phase selected, if any.
    pub fn phase(self) -> Option<Phase> {
        match self {
            PhaseFilter::All => None,
            PhaseFilter::L1 => Some(Phase::L1),
            PhaseFilter::L2 => Some(Phase::L2),
            PhaseFilter::L3 => Some(Phase::L3),
        }
    }
}

impl fmt::Display for PhaseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase() {
            Some(phase) => phase.fmt(f),
            None => f.write_str("all phases"),
        }
    }
}

impl FromStr for PhaseFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(PhaseFilter::All),
            "l1" => Ok(PhaseFilter::L1),
            "l2" => Ok(PhaseFilter::L2),
            "l3" => Ok(PhaseFilter::L3),
            other => Err(format!("unknown phase '{other}'")),
        }
    }
}

/// The active view: metric + phase + line filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewSelection {
    pub metric: Metric,
    /// Phase restriction for per-phase metrics. Ignored by
    /// [`Metric::TotalPower`] and [`Metric::All`].
    pub phase: PhaseFilter,
    /// Line filter for [`Metric::All`] only.
    pub line_filter: PhaseFilter,
}

impl ViewSelection {
    pub fn new(metric: Metric, phase: PhaseFilter, line_filter: PhaseFilter) -> Self {
        Self {
            metric,
            phase,
            line_filter,
        }
        .normalized()
    }

    /// Apply the selection invariant: total power has no phase dimension,
    /// so its phase is pinned to `All`.
    pub fn normalized(mut self) -> Self {
        if self.metric == Metric::TotalPower {
            self.phase = PhaseFilter::All;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_power_pins_phase() {
        let sel = ViewSelection::new(Metric::TotalPower, PhaseFilter::L2, PhaseFilter::All);
        assert_eq!(sel.phase, PhaseFilter::All);

        let sel = ViewSelection::new(Metric::Power, PhaseFilter::L2, PhaseFilter::All);
        assert_eq!(sel.phase, PhaseFilter::L2);
    }

    #[test]
    fn test_metric_from_str() {
        assert_eq!("voltage".parse::<Metric>().unwrap(), Metric::Voltage);
        assert_eq!("Ipk".parse::<Metric>().unwrap(), Metric::PeakCurrent);
        assert_eq!("pall".parse::<Metric>().unwrap(), Metric::TotalPower);
        assert!("watts".parse::<Metric>().is_err());
    }

    #[test]
    fn test_phase_filter_from_str() {
        assert_eq!("l2".parse::<PhaseFilter>().unwrap(), PhaseFilter::L2);
        assert_eq!("ALL".parse::<PhaseFilter>().unwrap(), PhaseFilter::All);
        assert!("l4".parse::<PhaseFilter>().is_err());
    }

    #[test]
    fn test_phase_tokens() {
        assert_eq!(Phase::ALL.map(Phase::token), ["L1", "L2", "L3"]);
    }
}
