#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockinsights/insights/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Alpha Vantage quote provider.
//!
//! This crate implements [`QuoteDataProvider`] against the
//! [Alpha Vantage](https://www.alphavantage.co/) `GLOBAL_QUOTE` endpoint.
//! Raw response bodies are cached through the injected [`ResponseCache`];
//! normalization into [`Quote`] happens on every read so cached and fresh
//! payloads take the same path.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use insights_alphavantage::AlphaVantageProvider;
//! use insights_cache::InMemoryCache;
//! use insights_core::{QuoteDataProvider, Ticker};
//!
//! #[tokio::main]
//! async fn main() -> insights_core::Result<()> {
//!     let cache = Arc::new(InMemoryCache::new());
//!     let provider = AlphaVantageProvider::from_env(cache);
//!
//!     let quote = provider.fetch_quote(&Ticker::new("AAPL")).await?;
//!     println!("{} @ {}", quote.ticker, quote.price);
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use insights_core::{
    fingerprint, DataProvider, ProviderError, Quote, QuoteDataProvider, ResponseCache, Result,
    Ticker,
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Base URL for the Alpha Vantage query API.
const QUOTE_ENDPOINT: &str = "https://www.alphavantage.co/query";

/// Environment variable holding the API key.
const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

/// Literal fallback used when no key is configured.
///
/// Requests are still sent with this placeholder and rejected upstream;
/// [`DataProvider::is_configured`] lets callers surface the problem earlier.
const API_KEY_PLACEHOLDER: &str = "YOUR_ALPHA_VANTAGE_API_KEY";

/// Alpha Vantage quote provider.
#[derive(Clone)]
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    cache: Arc<dyn ResponseCache>,
}

impl fmt::Debug for AlphaVantageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageProvider")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl AlphaVantageProvider {
    /// Create a new provider with the given API key and response cache.
    #[must_use]
    pub fn new(api_key: impl Into<String>, cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            cache,
        }
    }

    /// Create a new provider reading the API key from `ALPHA_VANTAGE_API_KEY`,
    /// falling back to the literal placeholder when unset.
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

    /// Build the GLOBAL_QUOTE URL for a ticker.
    fn quote_url(&self, ticker: &Ticker) -> String {
        format!(
            "{QUOTE_ENDPOINT}?function=GLOBAL_QUOTE&symbol={}&apikey={}",
            ticker.as_str(),
            self.api_key
        )
    }

    /// Fetch the raw JSON payload for `url`, checking the cache first.
    ///
    /// This is the provider's only network access point. The raw body is
    /// cached on success; response-shape knowledge stays in [`parse_quote`].
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let key = fingerprint(url, &Value::Object(Default::default()));

        if let Some(payload) = self.cache.get(&key).await {
            debug!("Serving quote from cache");
            return Ok(payload);
        }

        debug!("Alpha Vantage request: GLOBAL_QUOTE");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited {
                provider: "Alpha Vantage".to_string(),
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

impl DataProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        "Alpha Vantage"
    }

    fn description(&self) -> &str {
        "Alpha Vantage - live stock quotes via the GLOBAL_QUOTE endpoint"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != API_KEY_PLACEHOLDER
    }
}

#[async_trait]
impl QuoteDataProvider for AlphaVantageProvider {
    async fn fetch_quote(&self, ticker: &Ticker) -> Result<Quote> {
        let url = self.quote_url(ticker);
        let payload = self.fetch_json(&url).await?;
        parse_quote(ticker, &payload)
    }
}

/// Normalize a raw GLOBAL_QUOTE payload into a [`Quote`].
///
/// Fails with [`ProviderError::QuoteNotFound`] when the nested record is
/// missing or carries an empty price, and [`ProviderError::Malformed`] when
/// the payload doesn't have the endpoint's shape at all.
fn parse_quote(ticker: &Ticker, payload: &Value) -> Result<Quote> {
    let envelope: GlobalQuoteEnvelope = serde_json::from_value(payload.clone())
        .map_err(|e| ProviderError::Malformed(e.to_string()))?;

    let record = envelope
        .global_quote
        .ok_or_else(|| ProviderError::QuoteNotFound(ticker.to_string()))?;

    if record.price.is_empty() {
        return Err(ProviderError::QuoteNotFound(ticker.to_string()));
    }

    Ok(Quote {
        ticker: ticker.clone(),
        price: record.price,
        change: record.change,
        change_percent: record.change_percent,
        volume: record.volume,
        latest_trading_day: record.latest_trading_day,
    })
}

// ============================================================================
// Alpha Vantage API Response Types
// ============================================================================

/// Envelope around the GLOBAL_QUOTE record.
#[derive(Debug, Deserialize)]
struct GlobalQuoteEnvelope {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
}

/// The GLOBAL_QUOTE record, under Alpha Vantage's numbered key names.
#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price", default)]
    price: String,
    #[serde(rename = "09. change", default)]
    change: String,
    #[serde(rename = "10. change percent", default)]
    change_percent: String,
    #[serde(rename = "06. volume", default)]
    volume: Option<String>,
    #[serde(rename = "07. latest trading day", default)]
    latest_trading_day: Option<String>,
}
