//! Report assembly: evaluated rules grouped into fixed, ordered
//! sections, with the metric set attached for richer presentation.

use screener_core::{MetricSet, ReportSection, RuleOutcome, ScoreCard};

use crate::rules::RuleSection;

/// Section order is fixed: valuation first, then profitability and
/// stability. Within a section, outcomes keep rule-definition order.
const SECTION_ORDER: [RuleSection; 2] = [RuleSection::Valuation, RuleSection::Stability];

pub fn assemble(
    name: &str,
    code: &str,
    metrics: MetricSet,
    outcomes: Vec<(RuleSection, RuleOutcome)>,
) -> ScoreCard {
    let sections = SECTION_ORDER
        .iter()
        .map(|section| ReportSection {
            title: section.title().to_string(),
            outcomes: outcomes
                .iter()
                .filter(|(s, _)| s == section)
                .map(|(_, o)| o.clone())
                .collect(),
        })
        .collect();

    ScoreCard {
        name: name.to_string(),
        code: code.to_string(),
        metrics,
        sections,
    }
}
