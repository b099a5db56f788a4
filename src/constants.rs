//! Column-name tables and parsing constants
//!
//! This module centralizes the candidate column names for every logical
//! measurement role, merging the naming variants observed across analyzer
//! firmware revisions into one table per role.

/// Candidate column names per logical role, ordered by preference.
///
/// Resolution is exact-match only: the first candidate present in the
/// dataset header wins. Lists may grow as new export variants show up;
/// order within a list is the tie-breaker, nothing else.
pub mod columns {
    /// Time axis column.
    pub const TIME: &[&str] = &["Time", "time", "TIME", "Timestamp", "Date/Time"];

    /// Per-phase RMS voltage (Urms), indexed L1..L3.
    pub const VOLTAGE: [&[&str]; 3] = [
        &["Urms L1 MAX", "Urms_L1_MAX", "Urms L1"],
        &["Urms L2 MAX", "Urms_L2_MAX", "Urms L2"],
        &["Urms L3 MAX", "Urms_L3_MAX", "Urms L3"],
    ];

    /// Per-phase RMS current (Irms), indexed L1..L3.
    pub const CURRENT: [&[&str]; 3] = [
        &["Irms L1 MAX", "Irms_L1_MAX", "Irms L1"],
        &["Irms L2 MAX", "Irms_L2_MAX", "Irms L2"],
        &["Irms L3 MAX", "Irms_L3_MAX", "Irms L3"],
    ];

    /// Per-phase peak current (Ipk), indexed L1..L3.
    pub const PEAK_CURRENT: [&[&str]; 3] = [
        &["Ipk L1 MAX", "Ipk_L1_MAX", "Ipk L1"],
        &["Ipk L2 MAX", "Ipk_L2_MAX", "Ipk L2"],
        &["Ipk L3 MAX", "Ipk_L3_MAX", "Ipk L3"],
    ];

    /// Per-phase active power (P), indexed L1..L3.
    pub const POWER: [&[&str]; 3] = [
        &["P L1 MAX", "P_L1_MAX", "P L1"],
        &["P L2 MAX", "P_L2_MAX", "P L2"],
        &["P L3 MAX", "P_L3_MAX", "P L3"],
    ];

    /// Aggregate active power over all phases.
    pub const TOTAL_POWER: &[&str] = &["P All MAX", "P_All_MAX", "P ALL MAX", "P All"];
}

/// Date/time parsing constants
pub mod datetime {
    /// Day-first formats tried before anything else. Day and month are
    /// never reordered; `dd/mm/yyyy` is authoritative for these exports.
    pub const DAY_FIRST_FORMATS: &[&str] = &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"];

    /// Unambiguous fallback date-time formats.
    pub const FALLBACK_DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    /// Date-only fallbacks, interpreted as midnight.
    pub const FALLBACK_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];
}

/// CSV ingestion defaults
pub mod ingest {
    /// Delimiters considered when sniffing the header line, in tie-break
    /// order.
    pub const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];
}
