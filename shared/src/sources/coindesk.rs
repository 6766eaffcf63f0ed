use serde::Deserialize;

use super::SourceError;

/// Decoded spot-price observation. `rate` and `updated_iso` stay optional
/// rather than defaulting; `price` is required.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotQuote {
    pub price: f64,
    pub rate: Option<String>,
    pub updated_iso: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrentPriceResponse {
    time: Option<TimeInfo>,
    bpi: Option<Bpi>,
}

#[derive(Debug, Deserialize)]
struct TimeInfo {
    #[serde(rename = "updatedISO")]
    updated_iso: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Bpi {
    #[serde(rename = "USD")]
    usd: Option<UsdQuote>,
}

#[derive(Debug, Deserialize)]
struct UsdQuote {
    rate: Option<String>,
    rate_float: Option<f64>,
}

/// Decode a Coindesk `currentprice.json` body into a [`SpotQuote`].
pub fn parse_current_price(body: &str) -> Result<SpotQuote, SourceError> {
    let response: CurrentPriceResponse =
        serde_json::from_str(body).map_err(|err| SourceError::Malformed(err.to_string()))?;
    let usd = response
        .bpi
        .ok_or(SourceError::MissingField("bpi"))?
        .usd
        .ok_or(SourceError::MissingField("bpi.USD"))?;
    let price = usd
        .rate_float
        .ok_or(SourceError::MissingField("bpi.USD.rate_float"))?;

    Ok(SpotQuote {
        price,
        rate: usd.rate,
        updated_iso: response.time.and_then(|time| time.updated_iso),
    })
}

#[derive(Clone)]
pub struct CoindeskClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoindeskClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub async fn current_price(&self) -> Result<SpotQuote, SourceError> {
        let url = format!("{}/v1/bpi/currentprice.json", self.base_url);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status {
                status: response.status(),
                url,
            });
        }
        let body = response.text().await?;
        parse_current_price(&body)
    }
}
