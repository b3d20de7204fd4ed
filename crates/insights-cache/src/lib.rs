#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockinsights/insights/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Caching implementations for the stock-insights providers.
//!
//! This crate provides implementations of the [`ResponseCache`] trait from
//! `insights-core`:
//!
//! - [`InMemoryCache`] - TTL-bounded in-memory cache with lazy expiry
//! - [`NoopCache`] - No-op cache that doesn't store anything

/// In-memory cache implementation.
pub mod memory;
/// No-op cache implementation.
pub mod noop;

// Re-export the trait for convenience
pub use insights_core::ResponseCache;

// Re-export implementations
pub use memory::InMemoryCache;
pub use noop::NoopCache;
