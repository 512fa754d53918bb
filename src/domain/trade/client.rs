//! Trades sub-client — recent public trade history.

use crate::client::BybitClient;
use crate::domain::trade::wire::{RecentTradesParams, RecentTradesResponse};
use crate::error::SdkError;

const TRADES_PATH: &str = "/spot/quote/v1/trades";

/// Sub-client for trade history.
pub struct Trades<'a> {
    pub(crate) client: &'a BybitClient,
}

impl<'a> Trades<'a> {
    /// Get the most recent public trades for a symbol.
    pub async fn recent(
        &self,
        params: &RecentTradesParams,
    ) -> Result<RecentTradesResponse, SdkError> {
        Ok(self
            .client
            .http
            .get_public(TRADES_PATH, &params.to_query())
            .await?)
    }
}
