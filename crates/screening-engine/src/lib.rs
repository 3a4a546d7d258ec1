//! Financial metrics extraction and scoring engine.
//!
//! One synchronous pipeline per lookup: locate raw fields on the page,
//! normalize them into metrics, derive secondary ratios, score against
//! the fixed rule set, assemble the display-ready scorecard. Everything
//! downstream of retrieval is a pure transformation over resolved data;
//! concurrent lookups share no state.

pub mod derive;
pub mod extract;
pub mod locate;
pub mod report;
pub mod rules;
pub mod schema;

#[cfg(test)]
mod testutil;

use screener_core::{FinanceDocument, ScoreCard};

/// Build the complete scorecard for one stock from its retrieved page.
/// Per-field problems degrade to unavailable metrics; this never fails
/// once a document is in hand.
pub fn build_score_card(name: &str, code: &str, document: &dyn FinanceDocument) -> ScoreCard {
    let raw = locate::locate(document);
    let metrics = derive::derive(extract::extract(&raw));
    let outcomes = rules::evaluate(&metrics);

    tracing::debug!(
        name,
        code,
        available = metrics.entries().iter().filter(|(_, v)| v.is_some()).count(),
        "scorecard assembled"
    );

    report::assemble(name, code, metrics, outcomes)
}
