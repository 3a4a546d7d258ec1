use serde::{Deserialize, Serialize};

/// A single financial metric: a concrete finite value or unavailable.
/// `None` is never interchangeable with `0.0` — a missing debt ratio and
/// a zero debt ratio mean very different things to the rule evaluator.
pub type Metric = Option<f64>;

/// Raw field texts pulled off the securities page by the locator, before
/// any numeric cleaning. A field is `None` when its selector, table row
/// or column produced nothing.
#[derive(Debug, Clone, Default)]
pub struct RawFields {
    pub current_price: Option<String>,
    pub market_cap: Option<String>,
    pub week_52_low: Option<String>,
    pub week_52_high: Option<String>,
    pub foreign_ratio: Option<String>,
    pub sales: Option<String>,
    pub operating_profit_margin: Option<String>,
    pub net_profit_margin: Option<String>,
    pub roe: Option<String>,
    pub debt_ratio: Option<String>,
    pub current_ratio: Option<String>,
    pub reserve_ratio: Option<String>,
    pub per: Option<String>,
    pub pbr: Option<String>,
    pub dividend_yield: Option<String>,
}

/// The full metric vocabulary for one stock, in display order.
///
/// `roa`, `pcr`, `peg`, `sales_growth`, `profit_growth` and `margin_rate`
/// are not derivable from the item page and stay unavailable; the domain
/// does not distinguish "out of scope" from "failed to parse".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub current_price: Metric,
    pub market_cap: Metric,
    pub week_52_low: Metric,
    pub week_52_high: Metric,
    pub foreign_ratio: Metric,
    pub sales: Metric,
    pub operating_profit_margin: Metric,
    pub net_profit_margin: Metric,
    pub roe: Metric,
    pub debt_ratio: Metric,
    pub current_ratio: Metric,
    pub reserve_ratio: Metric,
    pub per: Metric,
    pub pbr: Metric,
    pub dividend_yield: Metric,
    pub psr: Metric,
    pub roa: Metric,
    pub pcr: Metric,
    pub peg: Metric,
    pub sales_growth: Metric,
    pub profit_growth: Metric,
    pub margin_rate: Metric,
}

impl MetricSet {
    /// All metrics as (name, value) pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, Metric); 22] {
        [
            ("current_price", self.current_price),
            ("market_cap", self.market_cap),
            ("week_52_low", self.week_52_low),
            ("week_52_high", self.week_52_high),
            ("foreign_ratio", self.foreign_ratio),
            ("sales", self.sales),
            ("operating_profit_margin", self.operating_profit_margin),
            ("net_profit_margin", self.net_profit_margin),
            ("roe", self.roe),
            ("debt_ratio", self.debt_ratio),
            ("current_ratio", self.current_ratio),
            ("reserve_ratio", self.reserve_ratio),
            ("per", self.per),
            ("pbr", self.pbr),
            ("dividend_yield", self.dividend_yield),
            ("psr", self.psr),
            ("roa", self.roa),
            ("pcr", self.pcr),
            ("peg", self.peg),
            ("sales_growth", self.sales_growth),
            ("profit_growth", self.profit_growth),
            ("margin_rate", self.margin_rate),
        ]
    }
}

/// Outcome of one screening rule applied to one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
    /// The underlying metric is unavailable; the rule cannot be judged.
    Indeterminate,
}

impl Verdict {
    pub fn glyph(&self) -> &'static str {
        match self {
            Verdict::Pass => "\u{2705}",
            Verdict::Fail => "\u{274C}",
            Verdict::Indeterminate => "\u{26A0}\u{FE0F}",
        }
    }
}

/// One evaluated rule, ready for display: the rule name, the threshold it
/// checked, the verdict, and the pre-formatted metric value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub name: String,
    pub threshold: String,
    pub verdict: Verdict,
    pub display: String,
}

/// A named group of rule outcomes in the final report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub outcomes: Vec<RuleOutcome>,
}

/// The complete, display-ready result of one stock lookup. Constructed
/// fresh per query, immutable once returned, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreCard {
    pub name: String,
    pub code: String,
    pub metrics: MetricSet,
    pub sections: Vec<ReportSection>,
}

/// A listed stock as resolved by the symbol directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListedStock {
    pub code: String,
    pub name: String,
    pub market: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_cover_full_vocabulary_in_order() {
        let set = MetricSet::default();
        let entries = set.entries();
        assert_eq!(entries.len(), 22);
        assert_eq!(entries[0].0, "current_price");
        assert_eq!(entries[15].0, "psr");
        assert_eq!(entries[21].0, "margin_rate");
    }

    #[test]
    fn default_metric_set_is_fully_unavailable() {
        let set = MetricSet::default();
        assert!(set.entries().iter().all(|(_, v)| v.is_none()));
    }
}
