//! # Bybit Spot SDK
//!
//! A typed Rust client for Bybit's public spot market-data REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, wire types, domain modules
//! 2. **HTTP transport** — `BybitHttp` with retry policies and the shared
//!    response envelope
//! 3. **High-Level Client** — `BybitClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bybit_spot_sdk::prelude::*;
//!
//! let client = BybitClient::builder()
//!     .base_url("https://api.bybit.com")
//!     .build()?;
//!
//! let symbols = client.symbols().list().await?;
//! let depth = client.orderbooks().depth(&DepthParams {
//!     symbol: Symbol::from("BTCUSDT"),
//!     limit: Some(50),
//! }).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP transport ──────────────────────────────────────────────────

/// HTTP client with retry policies and the shared response envelope.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `BybitClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Interval, Symbol};

    // Domain types — symbols
    pub use crate::domain::symbol::{SymbolInfo, SymbolsResponse};

    // Domain types — orderbook
    pub use crate::domain::orderbook::{
        Depth, DepthParams, DepthResponse, MergedDepthParams, MergedDepthResponse, PriceLevel,
    };

    // Domain types — trades
    pub use crate::domain::trade::{RecentTradesParams, RecentTradesResponse, TradeRecord};

    // Domain types — klines
    pub use crate::domain::kline::{Kline, KlineParams, KlineResponse};

    // Domain types — tickers
    pub use crate::domain::ticker::{
        BookTicker, BookTickerResponse, PriceTicker, PriceTickerResponse, Ticker24h,
        Ticker24hResponse, TickerParams,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, TESTNET_API_URL};

    // Envelope
    pub use crate::http::{ApiResponse, CommonResponse};

    // HTTP client + sub-clients
    pub use crate::client::{
        BybitClient, BybitClientBuilder, KlinesClient, OrderbooksClient, SymbolsClient,
        TickersClient, TradesClient,
    };
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
