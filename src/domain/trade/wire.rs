//! Wire types for the recent trades endpoint.

use crate::http::envelope::ApiResponse;
use crate::shared::serde_util::timestamp_ms;
use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters for the recent trades endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentTradesParams {
    pub symbol: Symbol,
    /// Number of trades to return. Omitted → server default.
    pub limit: Option<u32>,
}

impl RecentTradesParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("symbol", self.symbol.to_string())];
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

/// One public trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub price: String,
    #[serde(with = "timestamp_ms")]
    pub time: DateTime<Utc>,
    pub qty: String,
    pub is_buyer_maker: bool,
}

/// Response for the recent trades endpoint.
pub type RecentTradesResponse = ApiResponse<Vec<TradeRecord>>;
