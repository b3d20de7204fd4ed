#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockinsights/insights/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Company entity recognition and live market data.
//!
//! This crate re-exports the core types and component implementations, and
//! provides a [`MarketDataClient`] that orchestrates the quote and profile
//! providers over a shared response cache.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use insights::{EntityMatcher, InMemoryCache, MarketDataClient};
//!
//! #[tokio::main]
//! async fn main() -> insights::Result<()> {
//!     let matcher = EntityMatcher::with_builtin_dictionary();
//!     let client = MarketDataClient::new(Arc::new(InMemoryCache::new()));
//!
//!     let text = "Google has announced a new product today.";
//!     for entity in matcher.detect(text) {
//!         let overview = client.get_overview(&entity.ticker).await?;
//!         println!("{}: {} ({})", entity.ticker, overview.quote.price, overview.profile.rating);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use insights_core::*;

// Cache implementations
pub use insights_cache::{InMemoryCache, NoopCache};

// Entity matching
pub use insights_match::{DictionaryEntry, EntityDictionary, EntityMatcher, PRIVATE_TICKER};

// Providers
pub use insights_alphavantage::AlphaVantageProvider;
pub use insights_fmp::FmpProvider;

mod client;
pub use client::{CompanyOverview, MarketDataClient};
