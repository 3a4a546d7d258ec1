//! Normalization stage: raw field texts become metrics.
//!
//! Table cells go through the dash-rejecting mode because the summary
//! table prints a bare "-" for periods with no data. Page-level figures
//! (price, market cap, 52-week range, foreign ratio) never use dash
//! placeholders, so they take the permissive strip-everything mode.

use screener_core::{normalize, MetricSet, NormalizeMode, RawFields};

pub fn extract(raw: &RawFields) -> MetricSet {
    let page = |v: &Option<String>| normalize(v.as_deref(), NormalizeMode::StripAll);
    let cell = |v: &Option<String>| normalize(v.as_deref(), NormalizeMode::RejectDash);

    MetricSet {
        current_price: page(&raw.current_price),
        market_cap: page(&raw.market_cap),
        week_52_low: page(&raw.week_52_low),
        week_52_high: page(&raw.week_52_high),
        foreign_ratio: page(&raw.foreign_ratio),
        sales: cell(&raw.sales),
        operating_profit_margin: cell(&raw.operating_profit_margin),
        net_profit_margin: cell(&raw.net_profit_margin),
        roe: cell(&raw.roe),
        debt_ratio: cell(&raw.debt_ratio),
        current_ratio: cell(&raw.current_ratio),
        reserve_ratio: cell(&raw.reserve_ratio),
        per: cell(&raw.per),
        pbr: cell(&raw.pbr),
        dividend_yield: cell(&raw.dividend_yield),
        ..MetricSet::default()
    }
}
