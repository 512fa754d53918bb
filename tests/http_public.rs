//! Integration tests for the public spot market-data endpoints.
//!
//! These tests hit the live mainnet API and exercise every binding end to
//! end: request assembly → transport → envelope + payload decode.
//!
//! All tests are `#[ignore]` because they require network access.
//!
//! Run with:
//! ```bash
//! cargo test --test http_public -- --ignored
//! ```

use bybit_spot_sdk::prelude::*;

/// Liquid pair that exists on mainnet.
const TEST_SYMBOL: &str = "BTCUSDT";

fn client() -> BybitClient {
    BybitClient::builder().build().expect("client should build")
}

#[tokio::test]
#[ignore]
async fn symbols_list_is_non_empty() {
    let resp = client().symbols().list().await.expect("symbols request");
    assert_eq!(resp.common.ret_code, 0);
    assert!(!resp.result.is_empty(), "mainnet should list spot pairs");
    assert!(resp.result.iter().any(|s| s.name == TEST_SYMBOL));
}

#[tokio::test]
#[ignore]
async fn depth_has_both_sides() {
    let resp = client()
        .orderbooks()
        .depth(&DepthParams {
            symbol: Symbol::from(TEST_SYMBOL),
            limit: Some(5),
        })
        .await
        .expect("depth request");
    assert!(!resp.result.bids.is_empty());
    assert!(!resp.result.asks.is_empty());
    assert!(resp.result.bids.len() <= 5);
}

#[tokio::test]
#[ignore]
async fn merged_depth_respects_limit() {
    let resp = client()
        .orderbooks()
        .merged_depth(&MergedDepthParams {
            symbol: Symbol::from(TEST_SYMBOL),
            scale: Some(1),
            limit: Some(10),
        })
        .await
        .expect("merged depth request");
    assert!(resp.result.bids.len() <= 10);
}

#[tokio::test]
#[ignore]
async fn recent_trades_decode() {
    let resp = client()
        .trades()
        .recent(&RecentTradesParams {
            symbol: Symbol::from(TEST_SYMBOL),
            limit: Some(20),
        })
        .await
        .expect("trades request");
    assert!(!resp.result.is_empty());
    assert!(resp.result.len() <= 20);
    assert!(!resp.result[0].price.is_empty());
}

#[tokio::test]
#[ignore]
async fn klines_decode_positionally() {
    let resp = client()
        .klines()
        .get(&KlineParams {
            symbol: Symbol::from(TEST_SYMBOL),
            interval: Interval::Hour1,
            limit: Some(3),
            start_time: None,
            end_time: None,
        })
        .await
        .expect("kline request");
    assert!(!resp.result.is_empty());
    let kline = &resp.result[0];
    assert!(kline.end_time > kline.start_time);
    assert!(!kline.open.is_empty());
}

#[tokio::test]
#[ignore]
async fn tickers_for_one_symbol() {
    let params = TickerParams::for_symbol(TEST_SYMBOL);
    let bybit = client();

    let daily = bybit.tickers().daily(&params).await.expect("24h ticker");
    assert_eq!(daily.result.symbol, TEST_SYMBOL);

    let price = bybit.tickers().price(&params).await.expect("price ticker");
    assert!(!price.result.price.is_empty());

    let book = bybit.tickers().book(&params).await.expect("book ticker");
    assert!(!book.result.bid_price.is_empty());
    assert!(!book.result.ask_price.is_empty());
}
