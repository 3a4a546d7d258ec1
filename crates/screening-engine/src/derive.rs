//! Secondary metrics computed from primary ones. Pure and total: any
//! arithmetic hazard maps to unavailable, never to an error.

use screener_core::MetricSet;

pub fn derive(mut metrics: MetricSet) -> MetricSet {
    // PSR = market cap / sales, both in 억원. Requires positive sales.
    metrics.psr = match (metrics.market_cap, metrics.sales) {
        (Some(cap), Some(sales)) if sales > 0.0 => Some(round2(cap / sales)),
        _ => None,
    };

    // Not derivable from the item page. Forced unavailable so a stale
    // value can never survive a re-derivation.
    metrics.roa = None;
    metrics.pcr = None;
    metrics.peg = None;
    metrics.sales_growth = None;
    metrics.profit_growth = None;
    metrics.margin_rate = None;

    metrics
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
