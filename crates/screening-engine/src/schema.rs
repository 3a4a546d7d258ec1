//! The implicit contract with the Naver Finance page layout, made
//! explicit. Every selector and every (row, column) position the locator
//! touches lives here, so layout drift is a single localized update.

use screener_core::RawFields;

/// Current price, inside the realtime quote block.
pub const CURRENT_PRICE: &str = ".no_today .blind";

/// Market capitalization. Carries 조/억원 unit tokens that must be
/// stripped before normalization.
pub const MARKET_CAP: &str = "#_market_sum";

/// Whole-page match list whose first two entries are the 52-week low and
/// high, in that order.
pub const WEEK_52_RANGE: &str = ".tab_con1 .blind";

/// Row label of the foreign-ownership ratio (the page keys this field by
/// header text, not by a stable class).
pub const FOREIGN_RATIO_LABEL: &str = "외국인소진율";

/// The financial-summary table ("주요재무정보").
pub const FINANCE_TABLE: &str = ".section.cop_analysis div.sub_section table";

/// Column holding the most recent annual period.
pub const ANNUAL_COLUMN: usize = 3;

/// One financial-summary metric pinned to a table position.
pub struct TableSlot {
    pub metric: &'static str,
    pub row: usize,
    pub col: usize,
    pub field: fn(&mut RawFields) -> &mut Option<String>,
}

/// Row mapping for the financial-summary table, tied to the page's
/// current layout.
pub const TABLE_SCHEMA: &[TableSlot] = &[
    TableSlot { metric: "sales", row: 0, col: ANNUAL_COLUMN, field: |r| &mut r.sales },
    TableSlot { metric: "operating_profit_margin", row: 1, col: ANNUAL_COLUMN, field: |r| &mut r.operating_profit_margin },
    TableSlot { metric: "net_profit_margin", row: 2, col: ANNUAL_COLUMN, field: |r| &mut r.net_profit_margin },
    TableSlot { metric: "roe", row: 5, col: ANNUAL_COLUMN, field: |r| &mut r.roe },
    TableSlot { metric: "debt_ratio", row: 6, col: ANNUAL_COLUMN, field: |r| &mut r.debt_ratio },
    TableSlot { metric: "current_ratio", row: 7, col: ANNUAL_COLUMN, field: |r| &mut r.current_ratio },
    TableSlot { metric: "reserve_ratio", row: 8, col: ANNUAL_COLUMN, field: |r| &mut r.reserve_ratio },
    TableSlot { metric: "per", row: 10, col: ANNUAL_COLUMN, field: |r| &mut r.per },
    TableSlot { metric: "pbr", row: 12, col: ANNUAL_COLUMN, field: |r| &mut r.pbr },
    TableSlot { metric: "dividend_yield", row: 13, col: ANNUAL_COLUMN, field: |r| &mut r.dividend_yield },
];
