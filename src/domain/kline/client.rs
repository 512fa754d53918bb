//! Klines sub-client — candlestick queries.

use crate::client::BybitClient;
use crate::domain::kline::wire::{KlineParams, KlineResponse};
use crate::error::SdkError;

const KLINE_PATH: &str = "/spot/quote/v1/kline";

/// Sub-client for candlestick data.
pub struct Klines<'a> {
    pub(crate) client: &'a BybitClient,
}

impl<'a> Klines<'a> {
    /// Get candlesticks for a symbol and interval.
    pub async fn get(&self, params: &KlineParams) -> Result<KlineResponse, SdkError> {
        Ok(self
            .client
            .http
            .get_public(KLINE_PATH, &params.to_query())
            .await?)
    }
}
