//! Provider traits for fetching quote and profile data.
//!
//! This module defines the provider traits:
//!
//! - [`DataProvider`] - Base trait for all data providers
//! - [`QuoteDataProvider`] - Live stock quotes
//! - [`ProfileDataProvider`] - Company profiles

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    types::{Profile, Quote, Ticker},
};

/// Base trait for all data providers.
///
/// All data providers must implement this trait to provide basic metadata
/// about the provider and its configuration state.
pub trait DataProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "Alpha Vantage").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;

    /// Returns true if a real API key is configured.
    ///
    /// An unconfigured provider still issues requests with its placeholder
    /// key and lets the upstream reject them; this flag lets callers surface
    /// a configuration problem ahead of time instead.
    fn is_configured(&self) -> bool;
}

/// Provider for live stock quotes.
#[async_trait]
pub trait QuoteDataProvider: DataProvider {
    /// Fetches the current quote for a ticker.
    ///
    /// Fails with [`ProviderError::QuoteNotFound`](crate::ProviderError::QuoteNotFound)
    /// when the response carries no usable price.
    async fn fetch_quote(&self, ticker: &Ticker) -> Result<Quote>;
}

/// Provider for company profile data.
#[async_trait]
pub trait ProfileDataProvider: DataProvider {
    /// Fetches the company profile for a ticker.
    ///
    /// Fails with [`ProviderError::ProfileNotFound`](crate::ProviderError::ProfileNotFound)
    /// when the provider knows nothing about the ticker.
    async fn fetch_profile(&self, ticker: &Ticker) -> Result<Profile>;
}
