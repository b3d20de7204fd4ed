#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockinsights/insights/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for the stock-insights engine.
//!
//! This crate provides the foundational abstractions shared by the matcher,
//! cache, and provider crates:
//!
//! - [`Ticker`](types::Ticker) - Trading symbol newtype
//! - [`DetectedEntity`](types::DetectedEntity) - Confidence-scored match from page text
//! - [`Quote`](types::Quote) / [`Profile`](types::Profile) - Normalized provider responses
//! - [`ProviderError`](error::ProviderError) - Error taxonomy for provider calls
//! - [`ResponseCache`](cache::ResponseCache) - TTL response cache abstraction
//! - [`QuoteDataProvider`](provider::QuoteDataProvider) /
//!   [`ProfileDataProvider`](provider::ProfileDataProvider) - Provider traits

/// Response cache trait and request fingerprinting.
pub mod cache;
/// Error types for provider operations.
pub mod error;
/// Provider traits for fetching quote and profile data.
pub mod provider;
/// Core data types (Ticker, DetectedEntity, Quote, Profile, Rating).
pub mod types;

// Re-export commonly used items at crate root
pub use cache::{fingerprint, ResponseCache};
pub use error::{ProviderError, Result};
pub use provider::{DataProvider, ProfileDataProvider, QuoteDataProvider};
pub use types::{DetectedEntity, Profile, Quote, Rating, Ticker};
