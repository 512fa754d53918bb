//! Symbol domain — tradable spot pair metadata.

pub mod client;
pub mod wire;

pub use wire::{SymbolInfo, SymbolsResponse};
