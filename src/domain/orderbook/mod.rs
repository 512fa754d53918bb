//! Orderbook domain — depth snapshots and merged depth.

pub mod client;
pub mod wire;

pub use wire::{
    Depth, DepthParams, DepthResponse, MergedDepthParams, MergedDepthResponse, PriceLevel,
};
