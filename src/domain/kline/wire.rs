//! Wire types for the kline endpoint.
//!
//! Klines arrive as positional 11-element JSON arrays, not objects, so the
//! record carries its own decoder. Position is the only field identifier on
//! the wire.

use crate::http::envelope::ApiResponse;
use crate::shared::{Interval, Symbol};
use serde::de::{self, Deserializer, Unexpected};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── Params ──────────────────────────────────────────────────────────────────

/// Parameters for the kline endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct KlineParams {
    pub symbol: Symbol,
    pub interval: Interval,
    /// Number of candles to return. Omitted → server default.
    pub limit: Option<u32>,
    /// Range start, epoch milliseconds.
    pub start_time: Option<i64>,
    /// Range end, epoch milliseconds.
    pub end_time: Option<i64>,
}

impl KlineParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("symbol", self.symbol.to_string()),
            ("interval", self.interval.to_string()),
        ];
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(start_time) = self.start_time {
            query.push(("startTime", start_time.to_string()));
        }
        if let Some(end_time) = self.end_time {
            query.push(("endTime", end_time.to_string()));
        }
        query
    }
}

// ─── Result ──────────────────────────────────────────────────────────────────

/// One candlestick.
///
/// Wire order: start time, open, high, low, close, volume, end time,
/// quote-asset volume, trade count, taker base volume, taker quote volume.
/// Times and the trade count are JSON numbers; everything else is decimal
/// text.
#[derive(Debug, Clone, PartialEq)]
pub struct Kline {
    pub start_time: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub end_time: i64,
    pub quote_asset_volume: String,
    pub trades: i64,
    pub taker_base_volume: String,
    pub taker_quote_volume: String,
}

const KLINE_FIELDS: usize = 11;

impl<'de> Deserialize<'de> for Kline {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut row = Vec::<Value>::deserialize(deserializer)?;
        if row.len() != KLINE_FIELDS {
            return Err(de::Error::invalid_length(
                row.len(),
                &"a kline row of 11 fields",
            ));
        }
        Ok(Kline {
            start_time: int_at(&mut row, 0)?,
            open: text_at(&mut row, 1)?,
            high: text_at(&mut row, 2)?,
            low: text_at(&mut row, 3)?,
            close: text_at(&mut row, 4)?,
            volume: text_at(&mut row, 5)?,
            end_time: int_at(&mut row, 6)?,
            quote_asset_volume: text_at(&mut row, 7)?,
            trades: int_at(&mut row, 8)?,
            taker_base_volume: text_at(&mut row, 9)?,
            taker_quote_volume: text_at(&mut row, 10)?,
        })
    }
}

impl Serialize for Kline {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(KLINE_FIELDS)?;
        tuple.serialize_element(&self.start_time)?;
        tuple.serialize_element(&self.open)?;
        tuple.serialize_element(&self.high)?;
        tuple.serialize_element(&self.low)?;
        tuple.serialize_element(&self.close)?;
        tuple.serialize_element(&self.volume)?;
        tuple.serialize_element(&self.end_time)?;
        tuple.serialize_element(&self.quote_asset_volume)?;
        tuple.serialize_element(&self.trades)?;
        tuple.serialize_element(&self.taker_base_volume)?;
        tuple.serialize_element(&self.taker_quote_volume)?;
        tuple.end()
    }
}

/// Take the number at `idx` as an integer; non-integral values truncate.
fn int_at<E: de::Error>(row: &mut [Value], idx: usize) -> Result<i64, E> {
    match row[idx].take() {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| E::custom(format!("kline field {idx}: number out of range"))),
        other => Err(E::invalid_type(
            unexpected(&other),
            &"an integer time or count",
        )),
    }
}

/// Take the string at `idx`; any other JSON type is a decode error.
fn text_at<E: de::Error>(row: &mut [Value], idx: usize) -> Result<String, E> {
    match row[idx].take() {
        Value::String(s) => Ok(s),
        other => Err(E::invalid_type(unexpected(&other), &"a decimal string")),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => n
            .as_f64()
            .map(Unexpected::Float)
            .unwrap_or(Unexpected::Other("number")),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Response for the kline endpoint.
pub type KlineResponse = ApiResponse<Vec<Kline>>;
