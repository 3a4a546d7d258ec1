//! Numeric cleaning for raw page text.
//!
//! Two deliberately separate strategies exist because the source page
//! mixes conventions: financial-table cells use a bare dash as a "no
//! data" placeholder, while page-level figures are always positive
//! comma-grouped numbers with unit suffixes. The modes must not be
//! merged — a dash is a placeholder in one category and noise in the
//! other.

use crate::types::Metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Any dash in the raw text marks the value as unavailable. Used for
    /// financial-table cells, where "-" means "no data for this period".
    RejectDash,
    /// Keep digits, one leading minus and the decimal point, drop every
    /// other character, then reparse. Used for page-level figures.
    StripAll,
}

/// Convert raw text into a metric. Absent, empty, "N/A"-marked or
/// unparseable input yields unavailable — never zero, never an error.
pub fn normalize(raw: Option<&str>, mode: NormalizeMode) -> Metric {
    let text = raw?.trim();
    if text.is_empty() || text.contains("N/A") {
        return None;
    }

    match mode {
        NormalizeMode::RejectDash => {
            if text.contains('-') {
                return None;
            }
            parse_cleaned(text, false)
        }
        NormalizeMode::StripAll => parse_cleaned(text, true),
    }
}

fn parse_cleaned(text: &str, allow_minus: bool) -> Metric {
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '0'..='9' | '.' => cleaned.push(ch),
            '-' if allow_minus && cleaned.is_empty() => cleaned.push(ch),
            _ => {}
        }
    }

    if cleaned.is_empty() || cleaned == "-" || cleaned == "." {
        return None;
    }

    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_are_unavailable() {
        assert_eq!(normalize(None, NormalizeMode::RejectDash), None);
        assert_eq!(normalize(Some(""), NormalizeMode::RejectDash), None);
        assert_eq!(normalize(Some("   "), NormalizeMode::StripAll), None);
    }

    #[test]
    fn no_data_markers_are_unavailable_not_zero() {
        assert_eq!(normalize(Some("N/A"), NormalizeMode::RejectDash), None);
        assert_eq!(normalize(Some("N/A"), NormalizeMode::StripAll), None);
        assert_eq!(normalize(Some("-"), NormalizeMode::RejectDash), None);
        assert_eq!(normalize(Some("-"), NormalizeMode::StripAll), None);
    }

    #[test]
    fn thousands_separators_are_stripped_exactly() {
        assert_eq!(
            normalize(Some("1,234.5"), NormalizeMode::RejectDash),
            Some(1234.5)
        );
        assert_eq!(
            normalize(Some("2,920,000"), NormalizeMode::StripAll),
            Some(2_920_000.0)
        );
    }

    #[test]
    fn unit_suffixes_are_dropped() {
        assert_eq!(normalize(Some("12.34%"), NormalizeMode::StripAll), Some(12.34));
        assert_eq!(normalize(Some("35.11배"), NormalizeMode::RejectDash), Some(35.11));
    }

    #[test]
    fn reject_dash_treats_any_dash_as_placeholder() {
        // Negative table values render as dashes-with-digits on layout
        // drift; the strict mode refuses to guess.
        assert_eq!(normalize(Some("-5.2"), NormalizeMode::RejectDash), None);
        assert_eq!(normalize(Some("1-2"), NormalizeMode::RejectDash), None);
    }

    #[test]
    fn strip_all_keeps_a_leading_minus_only() {
        assert_eq!(normalize(Some("-5.2"), NormalizeMode::StripAll), Some(-5.2));
        assert_eq!(normalize(Some("약-5.2%"), NormalizeMode::StripAll), Some(-5.2));
        // An interior dash is not a sign.
        assert_eq!(normalize(Some("1-2"), NormalizeMode::StripAll), Some(12.0));
    }

    #[test]
    fn residual_garbage_is_unavailable() {
        assert_eq!(normalize(Some("abc"), NormalizeMode::StripAll), None);
        assert_eq!(normalize(Some("1.2.3"), NormalizeMode::RejectDash), None);
        assert_eq!(normalize(Some("."), NormalizeMode::StripAll), None);
    }
}
