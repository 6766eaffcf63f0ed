//! A dead upstream must surface as a typed error from the client, never a
//! panic or a defaulted record.

use shared::models::Timeframe;
use shared::sources::{build_http_client, BinanceClient, CoindeskClient, SourceError};

// Nothing listens on port 9; connections are refused immediately.
const DEAD_UPSTREAM: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn coindesk_fetch_from_dead_upstream_is_an_http_error() {
    let http = build_http_client(1).unwrap();
    let client = CoindeskClient::new(http, DEAD_UPSTREAM);
    let err = client.current_price().await.unwrap_err();
    assert!(matches!(err, SourceError::Http(_)));
}

#[tokio::test]
async fn binance_fetch_from_dead_upstream_is_an_http_error() {
    let http = build_http_client(1).unwrap();
    let client = BinanceClient::new(http, DEAD_UPSTREAM);
    let err = client.klines("BTCUSDT", Timeframe::M1, 10).await.unwrap_err();
    assert!(matches!(err, SourceError::Http(_)));
}
