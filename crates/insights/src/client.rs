//! Market data client orchestrating the quote and profile providers.

use std::sync::Arc;

use insights_alphavantage::AlphaVantageProvider;
use insights_core::{
    Profile, ProfileDataProvider, Quote, QuoteDataProvider, ResponseCache, Result, Ticker,
};
use insights_fmp::FmpProvider;
use tracing::debug;

/// A quote and profile for the same ticker, fetched together.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanyOverview {
    /// The live quote.
    pub quote: Quote,
    /// The company profile.
    pub profile: Profile,
}

/// Client for fetching normalized market data through a shared cache.
///
/// The cache is passed in at construction and shared by both providers; any
/// caller may populate or evict any entry. Provider errors are surfaced to
/// the caller as-is; no retry policy lives here.
pub struct MarketDataClient {
    quotes: Arc<dyn QuoteDataProvider>,
    profiles: Arc<dyn ProfileDataProvider>,
}

impl std::fmt::Debug for MarketDataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketDataClient")
            .field("quotes", &self.quotes.name())
            .field("profiles", &self.profiles.name())
            .finish()
    }
}

impl MarketDataClient {
    /// Create a client with the default providers (Alpha Vantage quotes, FMP
    /// profiles), both configured from the environment and sharing `cache`.
    #[must_use]
    pub fn new(cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            quotes: Arc::new(AlphaVantageProvider::from_env(cache.clone())),
            profiles: Arc::new(FmpProvider::from_env(cache)),
        }
    }

    /// Create a client over explicit provider instances.
    #[must_use]
    pub fn with_providers(
        quotes: Arc<dyn QuoteDataProvider>,
        profiles: Arc<dyn ProfileDataProvider>,
    ) -> Self {
        Self { quotes, profiles }
    }

    /// Fetch the current quote for a ticker.
    pub async fn get_quote(&self, ticker: &Ticker) -> Result<Quote> {
        debug!(ticker = %ticker, provider = self.quotes.name(), "Fetching quote");
        self.quotes.fetch_quote(ticker).await
    }

    /// Fetch the company profile for a ticker.
    pub async fn get_profile(&self, ticker: &Ticker) -> Result<Profile> {
        debug!(ticker = %ticker, provider = self.profiles.name(), "Fetching profile");
        self.profiles.fetch_profile(ticker).await
    }

    /// Fetch the quote and profile for a ticker concurrently.
    ///
    /// The two requests populate disjoint cache entries and may resolve in
    /// either order; no ordering guarantee is provided or required.
    pub async fn get_overview(&self, ticker: &Ticker) -> Result<CompanyOverview> {
        let (quote, profile) = tokio::join!(self.get_quote(ticker), self.get_profile(ticker));

        Ok(CompanyOverview {
            quote: quote?,
            profile: profile?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use insights_core::{DataProvider, ProviderError, Rating};

    #[derive(Debug)]
    struct StubQuotes {
        fail: bool,
    }

    impl DataProvider for StubQuotes {
        fn name(&self) -> &str {
            "Stub Quotes"
        }
        fn description(&self) -> &str {
            "Canned quotes for tests"
        }
        fn is_configured(&self) -> bool {
            true
        }
    }

    #[async_trait]
    impl QuoteDataProvider for StubQuotes {
        async fn fetch_quote(&self, ticker: &Ticker) -> Result<Quote> {
            if self.fail {
                return Err(ProviderError::QuoteNotFound(ticker.to_string()));
            }
            Ok(Quote {
                ticker: ticker.clone(),
                price: "100.00".to_string(),
                change: "1.00".to_string(),
                change_percent: "1.00%".to_string(),
                volume: None,
                latest_trading_day: None,
            })
        }
    }

    #[derive(Debug)]
    struct StubProfiles;

    impl DataProvider for StubProfiles {
        fn name(&self) -> &str {
            "Stub Profiles"
        }
        fn description(&self) -> &str {
            "Canned profiles for tests"
        }
        fn is_configured(&self) -> bool {
            true
        }
    }

    #[async_trait]
    impl ProfileDataProvider for StubProfiles {
        async fn fetch_profile(&self, _ticker: &Ticker) -> Result<Profile> {
            Ok(Profile {
                name: "Test Corp".to_string(),
                sector: "Testing".to_string(),
                industry: "Fixtures".to_string(),
                description: String::new(),
                ceo: String::new(),
                website: String::new(),
                pe: None,
                market_cap: "N/A".to_string(),
                dividend: "N/A".to_string(),
                high52: "N/A".to_string(),
                low52: "N/A".to_string(),
                rating: Rating::NotRated,
            })
        }
    }

    #[tokio::test]
    async fn test_get_overview_joins_both_providers() {
        let client = MarketDataClient::with_providers(
            Arc::new(StubQuotes { fail: false }),
            Arc::new(StubProfiles),
        );

        let overview = client.get_overview(&Ticker::new("TEST")).await.unwrap();
        assert_eq!(overview.quote.price, "100.00");
        assert_eq!(overview.profile.name, "Test Corp");
    }

    #[tokio::test]
    async fn test_get_overview_surfaces_provider_errors() {
        let client = MarketDataClient::with_providers(
            Arc::new(StubQuotes { fail: true }),
            Arc::new(StubProfiles),
        );

        let err = client.get_overview(&Ticker::new("TEST")).await.unwrap_err();
        assert!(matches!(err, ProviderError::QuoteNotFound(_)));
    }

    #[test]
    fn test_debug_lists_provider_names() {
        let client = MarketDataClient::with_providers(
            Arc::new(StubQuotes { fail: false }),
            Arc::new(StubProfiles),
        );

        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("Stub Quotes"));
        assert!(debug_str.contains("Stub Profiles"));
    }
}
