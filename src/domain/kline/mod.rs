//! Kline domain — candlestick data.

pub mod client;
pub mod wire;

pub use wire::{Kline, KlineParams, KlineResponse};
