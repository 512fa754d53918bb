//! Network URL constants for the Bybit spot SDK.

/// Default REST API base URL (mainnet).
pub const DEFAULT_API_URL: &str = "https://api.bybit.com";

/// Testnet REST API base URL.
pub const TESTNET_API_URL: &str = "https://api-testnet.bybit.com";
