//! High-level client — `BybitClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::kline::client::Klines;
use crate::domain::orderbook::client::Orderbooks;
use crate::domain::symbol::client::Symbols;
use crate::domain::ticker::client::Tickers;
use crate::domain::trade::client::Trades;
use crate::error::SdkError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::{BybitHttp, RetryPolicy};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::kline::client::Klines as KlinesClient;
pub use crate::domain::orderbook::client::Orderbooks as OrderbooksClient;
pub use crate::domain::symbol::client::Symbols as SymbolsClient;
pub use crate::domain::ticker::client::Tickers as TickersClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// The primary entry point for the Bybit spot SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.symbols()`, `client.orderbooks()`, etc. The client is stateless
/// apart from the underlying connection pool, so cloning is cheap and any
/// number of calls may run concurrently.
#[derive(Clone)]
pub struct BybitClient {
    pub(crate) http: BybitHttp,
}

impl BybitClient {
    pub fn builder() -> BybitClientBuilder {
        BybitClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn symbols(&self) -> Symbols<'_> {
        Symbols { client: self }
    }

    pub fn orderbooks(&self) -> Orderbooks<'_> {
        Orderbooks { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn klines(&self) -> Klines<'_> {
        Klines { client: self }
    }

    pub fn tickers(&self) -> Tickers<'_> {
        Tickers { client: self }
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BybitClientBuilder {
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl Default for BybitClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

impl BybitClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the retry policy applied to every request.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<BybitClient, SdkError> {
        Ok(BybitClient {
            http: BybitHttp::new(&self.base_url, self.timeout, self.retry),
        })
    }
}
