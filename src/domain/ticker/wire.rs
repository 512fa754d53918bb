//! Wire types for the ticker endpoints.

use crate::http::envelope::ApiResponse;
use crate::shared::serde_util::timestamp_ms;
use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters shared by the three ticker endpoints.
///
/// A default (symbol-less) value selects all symbols; the request then
/// carries no query string at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerParams {
    pub symbol: Option<Symbol>,
}

impl TickerParams {
    pub fn for_symbol(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: Some(symbol.into()),
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        match &self.symbol {
            Some(symbol) => vec![("symbol", symbol.to_string())],
            None => Vec::new(),
        }
    }
}

/// 24-hour rolling statistics for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24h {
    #[serde(with = "timestamp_ms")]
    pub time: DateTime<Utc>,
    pub symbol: String,
    pub best_bid_price: String,
    pub best_ask_price: String,
    pub last_price: String,
    pub open_price: String,
    pub high_price: String,
    pub low_price: String,
    pub volume: String,
    pub quote_volume: String,
}

/// Latest traded price for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceTicker {
    pub symbol: String,
    pub price: String,
}

/// Best bid/ask snapshot for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookTicker {
    pub symbol: String,
    pub bid_price: String,
    pub bid_qty: String,
    pub ask_price: String,
    pub ask_qty: String,
    #[serde(with = "timestamp_ms")]
    pub time: DateTime<Utc>,
}

/// Response for the 24-hour ticker endpoint.
pub type Ticker24hResponse = ApiResponse<Ticker24h>;

/// Response for the latest price endpoint.
pub type PriceTickerResponse = ApiResponse<PriceTicker>;

/// Response for the book ticker endpoint.
pub type BookTickerResponse = ApiResponse<BookTicker>;
