//! In-memory document stand-in for engine tests.

use std::collections::HashMap;

use screener_core::FinanceDocument;

use crate::schema;

/// Fake page keyed by the same selectors the schema uses, with a
/// row-major copy of the financial-summary table.
pub struct FakeDocument {
    pub selectors: HashMap<String, String>,
    pub labelled: HashMap<String, String>,
    pub week_52: Vec<String>,
    pub table: Vec<Vec<String>>,
}

impl FakeDocument {
    /// A fully populated page resembling a large-cap listing.
    pub fn full() -> Self {
        let mut selectors = HashMap::new();
        selectors.insert(schema::CURRENT_PRICE.to_string(), "71,300".to_string());
        selectors.insert(schema::MARKET_CAP.to_string(), "425조 6,000억원".to_string());

        let mut labelled = HashMap::new();
        labelled.insert(schema::FOREIGN_RATIO_LABEL.to_string(), "51.72%".to_string());

        // Rows 0..=13 of the summary table; column 3 is the most recent
        // annual period. Rows the schema skips hold filler values.
        let row = |v: &str| {
            vec!["a".to_string(), "b".to_string(), "c".to_string(), v.to_string()]
        };
        let table = vec![
            row("300,870"), // sales
            row("14.35"),   // operating margin
            row("13.15"),   // net margin
            row("filler3"),
            row("filler4"),
            row("17.07"),   // roe
            row("26.65"),   // debt ratio
            row("258.2"),   // current ratio
            row("33,143.6"),// reserve ratio
            row("filler9"),
            row("13.58"),   // per
            row("filler11"),
            row("1.32"),    // pbr
            row("2.02"),    // dividend yield
        ];

        Self {
            selectors,
            labelled,
            week_52: vec!["49,900".to_string(), "88,800".to_string()],
            table,
        }
    }

    /// Drop table rows from `len` onward, simulating layout drift.
    pub fn truncate_table(&mut self, len: usize) {
        self.table.truncate(len);
    }

    pub fn clear_row(&mut self, row: usize) {
        if let Some(cells) = self.table.get_mut(row) {
            cells.clear();
        }
    }
}

impl FinanceDocument for FakeDocument {
    fn select_first(&self, selector: &str) -> Option<String> {
        self.selectors.get(selector).cloned()
    }

    fn select_all(&self, selector: &str) -> Vec<String> {
        if selector == schema::WEEK_52_RANGE {
            self.week_52.clone()
        } else {
            Vec::new()
        }
    }

    fn select_labelled(&self, label: &str) -> Option<String> {
        self.labelled.get(label).cloned()
    }

    fn table_cell(&self, table_selector: &str, row: usize, col: usize) -> Option<String> {
        if table_selector != schema::FINANCE_TABLE {
            return None;
        }
        self.table.get(row)?.get(col).cloned()
    }
}
