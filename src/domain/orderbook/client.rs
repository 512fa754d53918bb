//! Orderbooks sub-client — depth and merged depth.

use crate::client::BybitClient;
use crate::domain::orderbook::wire::{
    DepthParams, DepthResponse, MergedDepthParams, MergedDepthResponse,
};
use crate::error::SdkError;

const DEPTH_PATH: &str = "/spot/quote/v1/depth";
const DEPTH_MERGED_PATH: &str = "/spot/quote/v1/depth/merged";

/// Sub-client for orderbook operations.
pub struct Orderbooks<'a> {
    pub(crate) client: &'a BybitClient,
}

impl<'a> Orderbooks<'a> {
    /// Get an orderbook depth snapshot.
    pub async fn depth(&self, params: &DepthParams) -> Result<DepthResponse, SdkError> {
        Ok(self
            .client
            .http
            .get_public(DEPTH_PATH, &params.to_query())
            .await?)
    }

    /// Get a depth snapshot with price levels merged at the given scale.
    pub async fn merged_depth(
        &self,
        params: &MergedDepthParams,
    ) -> Result<MergedDepthResponse, SdkError> {
        Ok(self
            .client
            .http
            .get_public(DEPTH_MERGED_PATH, &params.to_query())
            .await?)
    }
}
