//! Trade domain — recent public trades.

pub mod client;
pub mod wire;

pub use wire::{RecentTradesParams, RecentTradesResponse, TradeRecord};
