//! Field locator: pulls the fixed set of raw values off the page by
//! selector and by table position. Positional mapping is brittle by
//! nature, so every miss degrades to an absent field with a diagnostic
//! instead of failing the lookup.

use screener_core::{FinanceDocument, RawFields};

use crate::schema;

pub fn locate(document: &dyn FinanceDocument) -> RawFields {
    let mut raw = RawFields::default();

    raw.current_price = document.select_first(schema::CURRENT_PRICE);
    raw.market_cap = document
        .select_first(schema::MARKET_CAP)
        .map(strip_market_cap_units);
    raw.foreign_ratio = document.select_labelled(schema::FOREIGN_RATIO_LABEL);

    // 52-week range comes as a homogeneous ordered list: low first.
    let mut range = document.select_all(schema::WEEK_52_RANGE).into_iter();
    raw.week_52_low = range.next();
    raw.week_52_high = range.next();

    for slot in schema::TABLE_SCHEMA {
        let cell = document.table_cell(schema::FINANCE_TABLE, slot.row, slot.col);
        if cell.is_none() {
            tracing::warn!(
                metric = slot.metric,
                row = slot.row,
                col = slot.col,
                "financial table cell missing, marking unavailable"
            );
        }
        *(slot.field)(&mut raw) = cell;
    }

    if raw.current_price.is_none() {
        tracing::warn!("current price block missing from page");
    }

    raw
}

/// Market cap renders as e.g. "425조 6,000억원". Dropping the unit
/// tokens leaves the digit string in 억원 (hundred-million won), which
/// is the unit the rule thresholds are written in.
fn strip_market_cap_units(text: String) -> String {
    text.replace('조', "").replace("억원", "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeDocument;

    #[test]
    fn locates_page_fields_and_table_rows() {
        let doc = FakeDocument::full();
        let raw = locate(&doc);

        assert_eq!(raw.current_price.as_deref(), Some("71,300"));
        assert_eq!(raw.market_cap.as_deref(), Some("425 6,000"));
        assert_eq!(raw.week_52_low.as_deref(), Some("49,900"));
        assert_eq!(raw.week_52_high.as_deref(), Some("88,800"));
        assert_eq!(raw.foreign_ratio.as_deref(), Some("51.72%"));
        assert_eq!(raw.sales.as_deref(), Some("300,870"));
        assert_eq!(raw.dividend_yield.as_deref(), Some("2.02"));
    }

    #[test]
    fn missing_rows_degrade_to_absent_fields() {
        // Table truncated below the highest referenced row index.
        let mut doc = FakeDocument::full();
        doc.truncate_table(6);
        let raw = locate(&doc);

        assert!(raw.sales.is_some());
        assert!(raw.roe.is_some());
        assert!(raw.debt_ratio.is_none());
        assert!(raw.per.is_none());
        assert!(raw.dividend_yield.is_none());
    }

    #[test]
    fn short_52_week_list_leaves_missing_sides_absent() {
        let mut doc = FakeDocument::full();
        doc.week_52 = vec!["49,900".to_string()];
        let raw = locate(&doc);
        assert_eq!(raw.week_52_low.as_deref(), Some("49,900"));
        assert!(raw.week_52_high.is_none());

        doc.week_52.clear();
        let raw = locate(&doc);
        assert!(raw.week_52_low.is_none());
        assert!(raw.week_52_high.is_none());
    }

    #[test]
    fn strips_market_cap_unit_tokens() {
        assert_eq!(strip_market_cap_units("4,992억원".to_string()), "4,992");
        assert_eq!(strip_market_cap_units("1조2,345억원".to_string()), "12,345");
    }
}
