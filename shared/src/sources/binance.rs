use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use super::SourceError;
use crate::models::Timeframe;

/// One bar from the klines endpoint:
/// `[openTime, open, high, low, close, volume, closeTime, ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct KlineBar {
    pub open_time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Clone)]
pub struct BinanceClient {
    http: reqwest::Client,
    base_url: String,
}

impl BinanceClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub async fn klines(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: u32,
    ) -> Result<Vec<KlineBar>, SourceError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", timeframe.as_str()),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::Status {
                status: response.status(),
                url,
            });
        }
        let body: Value = response
            .json()
            .await
            .map_err(|err| SourceError::Malformed(err.to_string()))?;
        parse_klines(&body)
    }
}

/// Decode the klines response array. Numeric fields arrive as JSON strings
/// and are parsed explicitly; a short or non-array row fails the whole batch.
pub fn parse_klines(value: &Value) -> Result<Vec<KlineBar>, SourceError> {
    let rows = value
        .as_array()
        .ok_or_else(|| SourceError::Malformed("klines response is not an array".to_string()))?;
    let mut bars = Vec::with_capacity(rows.len());
    for row in rows {
        let row = row
            .as_array()
            .ok_or_else(|| SourceError::Malformed("kline row is not an array".to_string()))?;
        if row.len() < 6 {
            return Err(SourceError::Malformed(format!(
                "kline row has {} fields, expected at least 6",
                row.len()
            )));
        }
        let open_time_ms = value_to_i64(&row[0])?;
        let open_time = Utc
            .timestamp_millis_opt(open_time_ms)
            .single()
            .ok_or_else(|| SourceError::Malformed(format!("invalid open time {open_time_ms}")))?;
        bars.push(KlineBar {
            open_time,
            open: value_to_f64(&row[1])?,
            high: value_to_f64(&row[2])?,
            low: value_to_f64(&row[3])?,
            close: value_to_f64(&row[4])?,
            volume: value_to_f64(&row[5])?,
        });
    }
    Ok(bars)
}

fn value_to_i64(value: &Value) -> Result<i64, SourceError> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| SourceError::Malformed("number is not i64".to_string())),
        Value::String(text) => text
            .parse::<i64>()
            .map_err(|err| SourceError::Malformed(format!("invalid i64: {err}"))),
        _ => Err(SourceError::Malformed("unexpected value type for i64".to_string())),
    }
}

fn value_to_f64(value: &Value) -> Result<f64, SourceError> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| SourceError::Malformed("number is not f64".to_string())),
        Value::String(text) => text
            .parse::<f64>()
            .map_err(|err| SourceError::Malformed(format!("invalid f64: {err}"))),
        _ => Err(SourceError::Malformed("unexpected value type for f64".to_string())),
    }
}
