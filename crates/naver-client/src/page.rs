use scraper::{Html, Selector};

use screener_core::FinanceDocument;

/// One parsed Naver Finance item page. Scoped to a single lookup — the
/// caller parses, extracts and drops it; nothing holds it across awaits.
pub struct NaverPage {
    html: Html,
}

impl NaverPage {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

fn element_text(el: scraper::ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

impl FinanceDocument for NaverPage {
    fn select_first(&self, selector: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        let text = self.html.select(&sel).next().map(element_text)?;
        (!text.is_empty()).then_some(text)
    }

    fn select_all(&self, selector: &str) -> Vec<String> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.html
            .select(&sel)
            .map(element_text)
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn select_labelled(&self, label: &str) -> Option<String> {
        let tr_sel = Selector::parse("tr").ok()?;
        let td_sel = Selector::parse("td").ok()?;
        for row in self.html.select(&tr_sel) {
            let row_text: String = row.text().collect();
            if !row_text.contains(label) {
                continue;
            }
            // First numeric-looking cell in the labelled row.
            for cell in row.select(&td_sel) {
                let text = element_text(cell);
                if text.chars().any(|c| c.is_ascii_digit()) {
                    return Some(text);
                }
            }
        }
        None
    }

    fn table_cell(&self, table_selector: &str, row: usize, col: usize) -> Option<String> {
        let table_sel = Selector::parse(table_selector).ok()?;
        let tr_sel = Selector::parse("tbody tr").ok()?;
        let td_sel = Selector::parse("td").ok()?;

        let table = self.html.select(&table_sel).next()?;
        let row_el = table.select(&tr_sel).nth(row)?;
        let text = row_el.select(&td_sel).nth(col).map(element_text)?;
        (!text.is_empty()).then_some(text)
    }
}
