//! Naver Finance retrieval collaborator.
//!
//! Fetches the item page for a Korean listed stock and resolves
//! free-text stock names through Naver's stock-search API. Retrieval is
//! the only blocking stage of a lookup, so the client bounds it with a
//! request timeout and a fixed inter-request delay.

pub mod page;

pub use page::NaverPage;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use screener_core::{ListedStock, ScreenerError, SymbolDirectory};

const BASE_URL: &str = "https://finance.naver.com";
const SEARCH_BASE_URL: &str = "https://m.stock.naver.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone)]
pub struct NaverClient {
    client: Client,
    base_url: String,
    search_base_url: String,
    request_delay: Duration,
}

impl NaverClient {
    pub fn new() -> Self {
        Self::with_base_urls(BASE_URL.to_string(), SEARCH_BASE_URL.to_string())
    }

    /// Override endpoints, used by tests against a local server.
    pub fn with_base_urls(base_url: String, search_base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url,
            search_base_url,
            request_delay: REQUEST_DELAY,
        }
    }

    /// Fetch the raw item-page HTML for a 6-digit stock code. Transport
    /// faults are fatal to the lookup; there is no document to degrade to.
    pub async fn fetch_item_page(&self, code: &str) -> Result<String, ScreenerError> {
        let url = format!("{}/item/main.naver?code={}", self.base_url, code);

        tokio::time::sleep(self.request_delay).await;
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ScreenerError::Retrieval(e.to_string()))?;

        match response.status() {
            s if s == reqwest::StatusCode::TOO_MANY_REQUESTS => Err(ScreenerError::RateLimited),
            s if !s.is_success() => Err(ScreenerError::Status(s.as_u16())),
            _ => response
                .text()
                .await
                .map_err(|e| ScreenerError::Retrieval(e.to_string())),
        }
    }
}

impl Default for NaverClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    result: SearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResult {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(rename = "itemCode")]
    item_code: String,
    #[serde(rename = "stockName")]
    stock_name: String,
    #[serde(rename = "stockExchangeName", default)]
    stock_exchange_name: Option<String>,
}

#[async_trait]
impl SymbolDirectory for NaverClient {
    /// Resolve a human-entered stock name to its listing. Only an exact
    /// name match counts; a typo surfaces as "not found" rather than a
    /// silent lookup of the wrong company.
    async fn resolve(&self, name: &str) -> Result<Option<ListedStock>, ScreenerError> {
        let url = format!("{}/api/search/stock", self.search_base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("query", name), ("page", "1"), ("pageSize", "10")])
            .send()
            .await
            .map_err(|e| ScreenerError::Retrieval(e.to_string()))?;

        match response.status() {
            s if s == reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(ScreenerError::RateLimited),
            s if !s.is_success() => return Err(ScreenerError::Status(s.as_u16())),
            _ => {}
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| ScreenerError::Retrieval(e.to_string()))?;

        let listed = parsed
            .result
            .items
            .into_iter()
            .find(|item| item.stock_name == name)
            .map(|item| ListedStock {
                code: item.item_code,
                name: item.stock_name,
                market: item.stock_exchange_name,
            });

        if listed.is_none() {
            tracing::debug!(name, "no exact listing match");
        }
        Ok(listed)
    }
}
