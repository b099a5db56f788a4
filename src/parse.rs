//! Locale-tolerant scalar parsing
//!
//! Analyzer exports mix number locales freely: grouped thousands with
//! dot decimals (`1,234.56`) next to comma decimals (`12,5`), sometimes
//! with stray whitespace. Timestamps are day-first `dd/mm/yyyy HH:MM[:SS]`.
//! Both parsers recover malformed cells as `None` rather than erroring;
//! noisy sensor rows are expected and handled downstream as gaps.

use chrono::{NaiveDate, NaiveDateTime};

use crate::constants::datetime;

/// Parse a raw cell into a finite `f64`.
///
/// Whitespace is stripped, grouped thousands (`1,234.56`) lose their
/// commas, and a comma with no dot is read as a decimal separator
/// (`12,5` → 12.5). Empty, bare-sign, and non-numeric text all yield
/// `None`, never zero.
pub fn parse_number(raw: &str) -> Option<f64> {
    let compact: String = raw.trim().chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }

    let normalized = if is_grouped_thousands(&compact) {
        compact.replace(',', "")
    } else if compact.contains(',') && !compact.contains('.') {
        compact.replace(',', ".")
    } else {
        compact
    };

    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Matches `\d{1,3}(,\d{3})+(\.\d+)?`: comma groups of exactly three
/// digits with an optional dot-decimal tail. No sign allowed; signed
/// values never carry group separators in these exports.
fn is_grouped_thousands(s: &str) -> bool {
    let (int_part, dec_part) = match s.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (s, None),
    };
    if let Some(dec) = dec_part {
        if dec.is_empty() || !dec.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }

    let mut groups = int_part.split(',');
    let first = match groups.next() {
        Some(g) => g,
        None => return false,
    };
    if first.is_empty() || first.len() > 3 || !first.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut grouped = false;
    for group in groups {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        grouped = true;
    }
    grouped
}

/// Parse a raw cell into a naive local timestamp.
///
/// The day-first `dd/mm/yyyy HH:MM[:SS]` pattern is authoritative and
/// tried first so a generic parser can never swap day and month. Other
/// unambiguous forms (ISO 8601 variants, date-only at midnight) are
/// accepted as fallbacks. Invalid calendar values yield `None`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    for format in datetime::DAY_FIRST_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(text, format) {
            return Some(ts);
        }
    }
    for format in datetime::FALLBACK_DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(text, format) {
            return Some(ts);
        }
    }
    for format in datetime::FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}
