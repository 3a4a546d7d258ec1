use thiserror::Error;

/// Errors that abort a whole lookup. Per-field problems (a missing table
/// row, a garbled cell) are never errors — they degrade to unavailable
/// metrics instead.
#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    #[error("Rate limited by data source")]
    RateLimited,

    #[error("Data source returned HTTP {0}")]
    Status(u16),

    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),
}
