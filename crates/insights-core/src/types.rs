//! Core data types for the stock-insights engine.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Ticker`] - Trading symbol
//! - [`DetectedEntity`] - Dictionary match found in page text
//! - [`Quote`] - Normalized quote provider response
//! - [`Profile`] - Normalized company profile response
//! - [`Rating`] - Qualitative rating derived from price targets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trading symbol/ticker.
///
/// Tickers are automatically uppercased on creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    /// Creates a new ticker from a string, converting to uppercase.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().to_uppercase())
    }

    /// Returns the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Ticker {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A company reference detected in page text.
///
/// Produced fresh on every matcher invocation and joined to provider data
/// only through the `ticker` string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedEntity {
    /// The dictionary name that matched (company, alias, or executive).
    pub name: String,
    /// The ticker the dictionary maps that name to.
    pub ticker: Ticker,
    /// Match certainty in (0, 1]: 1.0 for an exact name hit, 0.7 for a
    /// context-assisted partial hit.
    pub confidence: f64,
}

impl DetectedEntity {
    /// Creates a new detected entity.
    #[must_use]
    pub fn new(name: impl Into<String>, ticker: impl Into<Ticker>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.into(),
            confidence,
        }
    }
}

/// Normalized stock quote.
///
/// Price fields are kept as the provider's decimal strings; no arithmetic is
/// performed on them downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The requested ticker.
    pub ticker: Ticker,
    /// Current price as a decimal string.
    pub price: String,
    /// Absolute change as a decimal string.
    pub change: String,
    /// Percentage change, including the provider's trailing `%`.
    pub change_percent: String,
    /// Trading volume, when reported.
    pub volume: Option<String>,
    /// Latest trading day (YYYY-MM-DD), when reported.
    pub latest_trading_day: Option<String>,
}

/// Normalized company profile.
///
/// Monetary fields are pre-formatted display strings; `"N/A"` marks values
/// the provider did not report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Company name.
    pub name: String,
    /// Business sector.
    pub sector: String,
    /// Industry within the sector.
    pub industry: String,
    /// Business description.
    pub description: String,
    /// Chief executive officer.
    pub ceo: String,
    /// Company website.
    pub website: String,
    /// Price-to-earnings ratio.
    pub pe: Option<f64>,
    /// Market capitalization, formatted (e.g. `"$1.50T"`).
    pub market_cap: String,
    /// Last dividend, formatted (e.g. `"0.96%"`).
    pub dividend: String,
    /// 52-week high, `$`-prefixed.
    pub high52: String,
    /// 52-week low, `$`-prefixed.
    pub low52: String,
    /// Qualitative rating derived from price targets.
    pub rating: Rating,
}

/// Qualitative rating derived from the gap between target and current price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Target is at least 15% above the current price.
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    /// Target is at least 5% above the current price.
    Buy,
    /// Target is within 5% of the current price.
    Hold,
    /// Target is at least 5% below the current price.
    Sell,
    /// Target is more than 15% below the current price.
    #[serde(rename = "Strong Sell")]
    StrongSell,
    /// Either price was missing from the provider response.
    #[default]
    #[serde(rename = "N/A")]
    NotRated,
}

impl Rating {
    /// Derives a rating from the current and target price.
    ///
    /// Returns [`Rating::NotRated`] when either price is absent.
    #[must_use]
    pub fn from_prices(current: Option<f64>, target: Option<f64>) -> Self {
        let (Some(current), Some(target)) = (current, target) else {
            return Self::NotRated;
        };
        if current == 0.0 {
            return Self::NotRated;
        }

        let upside = (target - current) / current * 100.0;
        if upside >= 15.0 {
            Self::StrongBuy
        } else if upside >= 5.0 {
            Self::Buy
        } else if upside >= -5.0 {
            Self::Hold
        } else if upside >= -15.0 {
            Self::Sell
        } else {
            Self::StrongSell
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::StrongBuy => "Strong Buy",
            Self::Buy => "Buy",
            Self::Hold => "Hold",
            Self::Sell => "Sell",
            Self::StrongSell => "Strong Sell",
            Self::NotRated => "N/A",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_uppercases() {
        assert_eq!(Ticker::new("aapl").as_str(), "AAPL");
        assert_eq!(Ticker::from("goog").to_string(), "GOOG");
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(
            Rating::from_prices(Some(100.0), Some(116.0)),
            Rating::StrongBuy
        );
        assert_eq!(Rating::from_prices(Some(100.0), Some(108.0)), Rating::Buy);
        assert_eq!(Rating::from_prices(Some(100.0), Some(102.0)), Rating::Hold);
        assert_eq!(Rating::from_prices(Some(100.0), Some(90.0)), Rating::Sell);
        assert_eq!(
            Rating::from_prices(Some(100.0), Some(80.0)),
            Rating::StrongSell
        );
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(
            Rating::from_prices(Some(100.0), Some(115.0)),
            Rating::StrongBuy
        );
        assert_eq!(Rating::from_prices(Some(100.0), Some(105.0)), Rating::Buy);
        assert_eq!(Rating::from_prices(Some(100.0), Some(95.0)), Rating::Hold);
        assert_eq!(Rating::from_prices(Some(100.0), Some(85.0)), Rating::Sell);
    }

    #[test]
    fn test_rating_missing_prices() {
        assert_eq!(Rating::from_prices(None, Some(100.0)), Rating::NotRated);
        assert_eq!(Rating::from_prices(Some(100.0), None), Rating::NotRated);
        assert_eq!(Rating::from_prices(None, None), Rating::NotRated);
        assert_eq!(Rating::from_prices(Some(0.0), Some(10.0)), Rating::NotRated);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::StrongBuy.to_string(), "Strong Buy");
        assert_eq!(Rating::NotRated.to_string(), "N/A");
    }
}
