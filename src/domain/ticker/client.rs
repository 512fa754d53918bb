//! Tickers sub-client — 24h statistics, latest price, best bid/ask.

use crate::client::BybitClient;
use crate::domain::ticker::wire::{
    BookTickerResponse, PriceTickerResponse, Ticker24hResponse, TickerParams,
};
use crate::error::SdkError;

const TICKER_24H_PATH: &str = "/spot/quote/v1/ticker/24hr";
const TICKER_PRICE_PATH: &str = "/spot/quote/v1/ticker/price";
const TICKER_BOOK_PATH: &str = "/spot/quote/v1/ticker/book_ticker";

/// Sub-client for ticker snapshots.
pub struct Tickers<'a> {
    pub(crate) client: &'a BybitClient,
}

impl<'a> Tickers<'a> {
    /// Get 24-hour rolling statistics.
    pub async fn daily(&self, params: &TickerParams) -> Result<Ticker24hResponse, SdkError> {
        Ok(self
            .client
            .http
            .get_public(TICKER_24H_PATH, &params.to_query())
            .await?)
    }

    /// Get the latest traded price.
    pub async fn price(&self, params: &TickerParams) -> Result<PriceTickerResponse, SdkError> {
        Ok(self
            .client
            .http
            .get_public(TICKER_PRICE_PATH, &params.to_query())
            .await?)
    }

    /// Get the best bid/ask snapshot.
    pub async fn book(&self, params: &TickerParams) -> Result<BookTickerResponse, SdkError> {
        Ok(self
            .client
            .http
            .get_public(TICKER_BOOK_PATH, &params.to_query())
            .await?)
    }
}
