//! Wire types for the spot symbols endpoint.

use crate::http::envelope::ApiResponse;
use serde::{Deserialize, Serialize};

/// Metadata for one tradable spot pair.
///
/// Precision and size bounds are decimal text, exactly as the exchange
/// sends them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub name: String,
    pub alias: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub base_precision: String,
    pub quote_precision: String,
    pub min_trade_quantity: String,
    pub min_trade_amount: String,
    pub min_price_precision: String,
    pub max_trade_quantity: String,
    pub max_trade_amount: String,
    pub category: i32,
}

/// Response for the symbols list endpoint.
pub type SymbolsResponse = ApiResponse<Vec<SymbolInfo>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_info_decode() {
        let json = r#"{
            "ret_code": 0,
            "ret_msg": "",
            "ext_code": "",
            "ext_info": null,
            "time_now": "1620000000.123",
            "result": [{
                "name": "BTCUSDT",
                "alias": "BTCUSDT",
                "baseCurrency": "BTC",
                "quoteCurrency": "USDT",
                "basePrecision": "0.000001",
                "quotePrecision": "0.00000001",
                "minTradeQuantity": "0.000158",
                "minTradeAmount": "10",
                "minPricePrecision": "0.01",
                "maxTradeQuantity": "4",
                "maxTradeAmount": "100000",
                "category": 1
            }]
        }"#;
        let resp: SymbolsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.result.len(), 1);
        let info = &resp.result[0];
        assert_eq!(info.name, "BTCUSDT");
        assert_eq!(info.base_currency, "BTC");
        assert_eq!(info.min_trade_amount, "10");
        assert_eq!(info.category, 1);
    }
}
