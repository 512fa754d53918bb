//! Wire types for the depth endpoints.

use crate::http::envelope::ApiResponse;
use crate::shared::serde_util::timestamp_ms;
use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

// ─── Params ──────────────────────────────────────────────────────────────────

/// Parameters for the depth endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthParams {
    pub symbol: Symbol,
    /// Number of levels per side. Omitted → server default.
    pub limit: Option<u32>,
}

impl DepthParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("symbol", self.symbol.to_string())];
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

/// Parameters for the merged depth endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedDepthParams {
    pub symbol: Symbol,
    /// Price-precision merge scale. Omitted → server default.
    pub scale: Option<u32>,
    pub limit: Option<u32>,
}

impl MergedDepthParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("symbol", self.symbol.to_string())];
        if let Some(scale) = self.scale {
            query.push(("scale", scale.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

// ─── Results ─────────────────────────────────────────────────────────────────

/// A depth snapshot: one timestamp plus bid and ask ladders.
///
/// Levels keep the server's ordering; this layer never re-sorts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Depth {
    #[serde(with = "timestamp_ms")]
    pub time: DateTime<Utc>,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
}

/// One price level, `[price, qty]` on the wire.
///
/// Both fields stay decimal text end to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    pub price: String,
    pub qty: String,
}

impl Serialize for PriceLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.price)?;
        tuple.serialize_element(&self.qty)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for PriceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        let [price, qty]: [String; 2] = raw
            .try_into()
            .map_err(|v: Vec<String>| de::Error::invalid_length(v.len(), &"a [price, qty] pair"))?;
        Ok(PriceLevel { price, qty })
    }
}

/// Response for the depth endpoint.
pub type DepthResponse = ApiResponse<Depth>;

/// Response for the merged depth endpoint.
pub type MergedDepthResponse = ApiResponse<Depth>;
