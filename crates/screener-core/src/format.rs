//! Display formatting for metrics. Unavailable values always render as
//! an explicit no-data token, never as an empty string or "0".

use crate::types::Metric;

/// Rendered in place of any unavailable metric.
pub const NO_DATA: &str = "데이터 없음";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Bare number, e.g. PSR or PER.
    Plain,
    /// Percentage-typed ratio, e.g. ROE or debt ratio.
    Percent,
    /// Large magnitude in hundred-million won, e.g. market cap.
    EokWon,
}

pub fn format_metric(value: Metric, style: DisplayStyle) -> String {
    let Some(v) = value else {
        return NO_DATA.to_string();
    };
    match style {
        DisplayStyle::Plain => group_thousands(v),
        DisplayStyle::Percent => format!("{}%", group_thousands(v)),
        DisplayStyle::EokWon => format!("{}억", group_thousands(v)),
    }
}

/// Format with comma grouping on the integer part. Integral values drop
/// the fraction; everything else keeps at most two decimal places.
pub fn group_thousands(v: f64) -> String {
    let s = if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let negative = int_part.starts_with('-');
    let digits = int_part.trim_start_matches('-');

    let mut out = String::with_capacity(s.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}
