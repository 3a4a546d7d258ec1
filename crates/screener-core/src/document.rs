use async_trait::async_trait;

use crate::error::ScreenerError;
use crate::types::ListedStock;

/// Addressable handle over one retrieved securities page. The handle is
/// transient — it lives for a single lookup and no engine component
/// retains it past the extraction call.
///
/// All methods return trimmed inner text; a selector, label or position
/// that matches nothing yields `None`/empty rather than an error, so the
/// locator can degrade to partial results on layout drift.
pub trait FinanceDocument {
    /// Text of the first element matching a CSS selector.
    fn select_first(&self, selector: &str) -> Option<String>;

    /// Texts of every element matching a CSS selector, in document order.
    fn select_all(&self, selector: &str) -> Vec<String>;

    /// Text of the value cell in the first table row whose text contains
    /// `label` (for fields the page keys by header text, not by class).
    fn select_labelled(&self, label: &str) -> Option<String>;

    /// Cell text at (`row`, `col`) within the body of the first table
    /// matching `table_selector`.
    fn table_cell(&self, table_selector: &str, row: usize, col: usize) -> Option<String>;
}

/// Symbol-listing collaborator: resolves a free-text, human-entered
/// stock name to its exchange listing.
#[async_trait]
pub trait SymbolDirectory: Send + Sync {
    async fn resolve(&self, name: &str) -> Result<Option<ListedStock>, ScreenerError>;
}
