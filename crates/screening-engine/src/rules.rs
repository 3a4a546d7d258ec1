//! Investment screening rules. Thresholds are domain constants of the
//! buy discipline, not per-call configuration. Each rule is judged
//! independently; an unavailable metric yields Indeterminate, never a
//! pass or fail by default.

use screener_core::{format_metric, DisplayStyle, Metric, MetricSet, RuleOutcome, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSection {
    Valuation,
    Stability,
}

impl RuleSection {
    pub fn title(&self) -> &'static str {
        match self {
            RuleSection::Valuation => "밸류에이션",
            RuleSection::Stability => "수익성 및 안정성",
        }
    }
}

pub struct Rule {
    pub name: &'static str,
    /// Human-readable threshold description shown in the report.
    pub threshold: &'static str,
    pub section: RuleSection,
    pub style: DisplayStyle,
    metric: fn(&MetricSet) -> Metric,
    passes: fn(f64) -> bool,
}

/// Evaluation and display order is the definition order of this table.
pub const RULES: &[Rule] = &[
    Rule {
        name: "시가총액",
        threshold: "3,000억 이상",
        section: RuleSection::Valuation,
        style: DisplayStyle::EokWon,
        metric: |m| m.market_cap,
        passes: |v| v >= 3000.0,
    },
    Rule {
        name: "PSR",
        threshold: "0.5 이하",
        section: RuleSection::Valuation,
        style: DisplayStyle::Plain,
        metric: |m| m.psr,
        passes: |v| v <= 0.5,
    },
    Rule {
        name: "ROE",
        threshold: "5% 이상",
        section: RuleSection::Stability,
        style: DisplayStyle::Percent,
        metric: |m| m.roe,
        passes: |v| v >= 5.0,
    },
    Rule {
        name: "부채비율",
        threshold: "100% 이하",
        section: RuleSection::Stability,
        style: DisplayStyle::Percent,
        metric: |m| m.debt_ratio,
        passes: |v| v <= 100.0,
    },
];

pub fn evaluate(metrics: &MetricSet) -> Vec<(RuleSection, RuleOutcome)> {
    RULES
        .iter()
        .map(|rule| {
            let value = (rule.metric)(metrics);
            let verdict = match value {
                Some(v) if (rule.passes)(v) => Verdict::Pass,
                Some(_) => Verdict::Fail,
                None => Verdict::Indeterminate,
            };
            let outcome = RuleOutcome {
                name: rule.name.to_string(),
                threshold: rule.threshold.to_string(),
                verdict,
                display: format_metric(value, rule.style),
            };
            (rule.section, outcome)
        })
        .collect()
}
