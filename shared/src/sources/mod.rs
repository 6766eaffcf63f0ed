//! Clients for the external price APIs.
//!
//! Decoding is tolerant of extra fields but never of missing ones: a payload
//! that lacks an expected numeric field is a typed error, not a
//! partially-populated record.

pub mod binance;
pub mod coindesk;

pub use binance::{BinanceClient, KlineBar};
pub use coindesk::{CoindeskClient, SpotQuote};

use std::time::Duration;

use thiserror::Error;

/// Source tag written with every live Coindesk observation.
pub const COINDESK_SOURCE: &str = "coindesk";
/// Source tag for candles collected from Binance.
pub const BINANCE_SOURCE: &str = "binance";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("missing field `{0}` in response")]
    MissingField(&'static str),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// One shared client for all sources; per-request timeout bounds every tick.
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, SourceError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs.max(1)))
        .build()?;
    Ok(client)
}
