#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockinsights/insights/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Financial Modeling Prep (FMP) profile provider.
//!
//! This crate implements [`ProfileDataProvider`] against the
//! [Financial Modeling Prep](https://financialmodelingprep.com/) profile
//! endpoint. Raw response bodies are cached through the injected
//! [`ResponseCache`]; normalization into [`Profile`] happens on every read.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use insights_fmp::FmpProvider;
//! use insights_cache::InMemoryCache;
//! use insights_core::{ProfileDataProvider, Ticker};
//!
//! #[tokio::main]
//! async fn main() -> insights_core::Result<()> {
//!     let cache = Arc::new(InMemoryCache::new());
//!     let provider = FmpProvider::from_env(cache);
//!
//!     let profile = provider.fetch_profile(&Ticker::new("AAPL")).await?;
//!     println!("{} ({}) {}", profile.name, profile.market_cap, profile.rating);
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use insights_core::{
    fingerprint, DataProvider, Profile, ProfileDataProvider, ProviderError, Rating, ResponseCache,
    Result, Ticker,
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Base URL for the FMP v3 API.
const PROFILE_ENDPOINT: &str = "https://financialmodelingprep.com/api/v3";

/// Environment variable holding the API key.
const API_KEY_ENV: &str = "FMP_API_KEY";

/// Literal fallback used when no key is configured.
///
/// Requests are still sent with this placeholder and rejected upstream;
/// [`DataProvider::is_configured`] lets callers surface the problem earlier.
const API_KEY_PLACEHOLDER: &str = "YOUR_FMP_API_KEY";

/// Financial Modeling Prep profile provider.
#[derive(Clone)]
pub struct FmpProvider {
    client: Client,
    api_key: String,
    cache: Arc<dyn ResponseCache>,
}

impl fmt::Debug for FmpProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpProvider")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl FmpProvider {
    /// Create a new FMP provider with the given API key and response cache.
    #[must_use]
    pub fn new(api_key: impl Into<String>, cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            cache,
        }
    }

    /// Create a new provider reading the API key from `FMP_API_KEY`, falling
    /// back to the literal placeholder when unset.
    #[must_use]
    pub fn from_env(cache: Arc<dyn ResponseCache>) -> Self {
        let api_key =
            std::env::var(API_KEY_ENV).unwrap_or_else(|_| API_KEY_PLACEHOLDER.to_string());
        Self::new(api_key, cache)
    }

    /// Create a new provider with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: Client, api_key: impl Into<String>, cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            cache,
        }
    }

    /// Build the profile URL for a ticker.
    fn profile_url(&self, ticker: &Ticker) -> String {
        format!(
            "{PROFILE_ENDPOINT}/profile/{}?apikey={}",
            ticker.as_str(),
            self.api_key
        )
    }

    /// Fetch the raw JSON payload for `url`, checking the cache first.
    ///
    /// This is the provider's only network access point. The raw body is
    /// cached on success; response-shape knowledge stays in [`parse_profile`].
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let key = fingerprint(url, &Value::Object(Default::default()));

        if let Some(payload) = self.cache.get(&key).await {
            debug!("Serving profile from cache");
            return Ok(payload);
        }

        debug!("FMP request: profile");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited {
                provider: "FMP".to_string(),
                retry_after: None,
            });
        }

        if !response.status().is_success() {
            return Err(ProviderError::Http {
                status: response.status().as_u16(),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        self.cache.put(&key, payload.clone()).await;
        Ok(payload)
    }
}

impl DataProvider for FmpProvider {
    fn name(&self) -> &str {
        "FMP"
    }

    fn description(&self) -> &str {
        "Financial Modeling Prep - company profiles and price targets"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != API_KEY_PLACEHOLDER
    }
}

#[async_trait]
impl ProfileDataProvider for FmpProvider {
    async fn fetch_profile(&self, ticker: &Ticker) -> Result<Profile> {
        let url = self.profile_url(ticker);
        let payload = self.fetch_json(&url).await?;
        parse_profile(ticker, &payload)
    }
}

/// Normalize a raw profile payload into a [`Profile`].
///
/// The endpoint returns an array with the profile as its first element. A
/// payload that isn't an array, or an empty array, means FMP knows nothing
/// about the ticker and fails with [`ProviderError::ProfileNotFound`]; a
/// record with unexpected field types fails with
/// [`ProviderError::Malformed`].
fn parse_profile(ticker: &Ticker, payload: &Value) -> Result<Profile> {
    let records = payload
        .as_array()
        .filter(|records| !records.is_empty())
        .ok_or_else(|| ProviderError::ProfileNotFound(ticker.to_string()))?;

    let record: FmpProfile = serde_json::from_value(records[0].clone())
        .map_err(|e| ProviderError::Malformed(e.to_string()))?;

    let (low52, high52) = parse_range(record.range.as_deref());

    Ok(Profile {
        name: record.company_name,
        sector: record.sector,
        industry: record.industry,
        description: record.description,
        ceo: record.ceo,
        website: record.website,
        pe: record.pe,
        market_cap: format_market_cap(record.mkt_cap),
        dividend: format_dividend(record.last_div),
        high52,
        low52,
        rating: Rating::from_prices(record.price, record.target_price),
    })
}

/// Format a market capitalization as a `$`-prefixed string with a T/B/M
/// suffix. Absent or zero values come back as `"N/A"`.
fn format_market_cap(market_cap: Option<f64>) -> String {
    let Some(value) = market_cap else {
        return "N/A".to_string();
    };
    if value == 0.0 {
        return "N/A".to_string();
    }

    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else {
        format!("${value:.2}")
    }
}

/// Format a last-dividend value as a percentage with two decimals, or
/// `"N/A"` when absent or zero.
fn format_dividend(last_div: Option<f64>) -> String {
    match last_div {
        Some(value) if value != 0.0 => format!("{value:.2}%"),
        _ => "N/A".to_string(),
    }
}

/// Split FMP's combined 52-week range (`"low-high"`) into `$`-prefixed
/// (low, high) strings. A missing or unsplittable range yields `"N/A"` for
/// both ends.
fn parse_range(range: Option<&str>) -> (String, String) {
    let Some((low, high)) = range.and_then(|r| r.split_once('-')) else {
        return ("N/A".to_string(), "N/A".to_string());
    };
    (format!("${}", low.trim()), format!("${}", high.trim()))
}

// ============================================================================
// FMP API Response Types
// ============================================================================

/// FMP company profile record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpProfile {
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    sector: String,
    #[serde(default)]
    industry: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    ceo: String,
    #[serde(default)]
    website: String,
    pe: Option<f64>,
    mkt_cap: Option<f64>,
    last_div: Option<f64>,
    range: Option<String>,
    price: Option<f64>,
    target_price: Option<f64>,
}
