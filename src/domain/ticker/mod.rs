//! Ticker domain — 24-hour statistics, latest price, best bid/ask.

pub mod client;
pub mod wire;

pub use wire::{
    BookTicker, BookTickerResponse, PriceTicker, PriceTickerResponse, Ticker24h,
    Ticker24hResponse, TickerParams,
};
