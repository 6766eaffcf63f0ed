use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("invalid period token: {0}")]
pub struct InvalidPeriod(pub String);

/// Lookback window selector for the read API. Invalid tokens are a client
/// error, never silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    pub fn lookback(&self) -> Duration {
        match self {
            Period::Day => Duration::hours(24),
            Period::Week => Duration::days(7),
            Period::Month => Duration::days(30),
            Period::Year => Duration::days(365),
        }
    }

    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.lookback()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl FromStr for Period {
    type Err = InvalidPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(InvalidPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("invalid timeframe token: {0}")]
pub struct InvalidTimeframe(pub String);

/// Candle bucket width, in the notation the Binance klines endpoint uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    M1,
    M5,
    M15,
    H1,
    H4,
    D1,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::M1 => "1m",
            Timeframe::M5 => "5m",
            Timeframe::M15 => "15m",
            Timeframe::H1 => "1h",
            Timeframe::H4 => "4h",
            Timeframe::D1 => "1d",
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Timeframe::M1 => Duration::minutes(1),
            Timeframe::M5 => Duration::minutes(5),
            Timeframe::M15 => Duration::minutes(15),
            Timeframe::H1 => Duration::hours(1),
            Timeframe::H4 => Duration::hours(4),
            Timeframe::D1 => Duration::days(1),
        }
    }
}

impl FromStr for Timeframe {
    type Err = InvalidTimeframe;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Timeframe::M1),
            "5m" => Ok(Timeframe::M5),
            "15m" => Ok(Timeframe::M15),
            "1h" => Ok(Timeframe::H1),
            "4h" => Ok(Timeframe::H4),
            "1d" => Ok(Timeframe::D1),
            other => Err(InvalidTimeframe(other.to_string())),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_tokens_round_trip() {
        for token in ["day", "week", "month", "year"] {
            let period: Period = token.parse().unwrap();
            assert_eq!(period.as_str(), token);
        }
    }

    #[test]
    fn period_rejects_unknown_token() {
        assert!("decade".parse::<Period>().is_err());
        assert!("".parse::<Period>().is_err());
        assert!("Day".parse::<Period>().is_err());
    }

    #[test]
    fn period_lookback_matches_window() {
        assert_eq!(Period::Day.lookback(), Duration::hours(24));
        assert_eq!(Period::Week.lookback(), Duration::days(7));
        assert_eq!(Period::Month.lookback(), Duration::days(30));
        assert_eq!(Period::Year.lookback(), Duration::days(365));
    }

    #[test]
    fn period_cutoff_is_lookback_before_now() {
        let now = Utc::now();
        assert_eq!(Period::Week.cutoff(now), now - Duration::days(7));
    }

    #[test]
    fn timeframe_tokens_round_trip() {
        for token in ["1m", "5m", "15m", "1h", "4h", "1d"] {
            let timeframe: Timeframe = token.parse().unwrap();
            assert_eq!(timeframe.as_str(), token);
        }
    }

    #[test]
    fn timeframe_rejects_unknown_token() {
        assert!("2w".parse::<Timeframe>().is_err());
        assert!("60".parse::<Timeframe>().is_err());
    }

    #[test]
    fn timeframe_duration() {
        assert_eq!(Timeframe::M1.duration(), Duration::minutes(1));
        assert_eq!(Timeframe::D1.duration(), Duration::days(1));
    }
}
