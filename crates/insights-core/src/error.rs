//! Error types for provider operations.
//!
//! This module defines [`ProviderError`] which covers all error cases that can
//! occur when fetching or normalizing data from an external provider. The
//! entity matcher is total and has no error type of its own.

use thiserror::Error;

/// Errors that can occur when fetching or normalizing provider data.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network-related errors (connection failures, timeouts, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The provider returned a non-success HTTP status.
    #[error("HTTP error: status {status}")]
    Http {
        /// The HTTP status code returned by the provider.
        status: u16,
    },

    /// Rate limit exceeded by a provider.
    #[error("Rate limited by {provider}: retry after {retry_after:?}")]
    RateLimited {
        /// The provider that rate limited the request.
        provider: String,
        /// Suggested time to wait before retrying.
        retry_after: Option<std::time::Duration>,
    },

    /// The provider response contained no quote for the requested ticker.
    #[error("No quote data for {0}")]
    QuoteNotFound(String),

    /// The provider response contained no profile for the requested ticker.
    #[error("No profile data for {0}")]
    ProfileNotFound(String),

    /// The provider response could not be parsed into its expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The provider has no usable API key configured.
    #[error("Provider not configured: {0}")]
    Unconfigured(String),
}

/// Result type alias using [`ProviderError`].
pub type Result<T> = std::result::Result<T, ProviderError>;
