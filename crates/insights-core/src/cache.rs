//! Response cache trait and request fingerprinting.
//!
//! Providers cache the raw JSON body of each upstream response, keyed by a
//! deterministic fingerprint of the request. Normalization always happens on
//! the way out of the cache, so a cached payload and a fresh one take the
//! same code path.

use async_trait::async_trait;
use serde_json::Value;

/// Computes the cache key for a request.
///
/// The key is the request URL joined with the serialized request options.
/// Two requests with the same URL and options always produce the same key.
#[must_use]
pub fn fingerprint(url: &str, options: &Value) -> String {
    format!("{url}-{options}")
}

/// Trait for caching raw provider responses with a bounded lifetime.
///
/// Implementations decide the TTL; [`get`](ResponseCache::get) must never
/// return a payload older than it. A failure inside the cache is reported as
/// a miss, never as an error: callers fall through to a fresh fetch.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Returns the cached payload for `key` if present and still fresh.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Stores `payload` under `key`, overwriting any prior entry.
    async fn put(&self, key: &str, payload: Value);

    /// Removes all cached entries.
    async fn clear(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fingerprint_is_deterministic() {
        let options = json!({});
        let a = fingerprint("https://example.com/query?symbol=AAPL", &options);
        let b = fingerprint("https://example.com/query?symbol=AAPL", &options);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_distinguishes_urls_and_options() {
        let empty = json!({});
        let a = fingerprint("https://example.com/a", &empty);
        let b = fingerprint("https://example.com/b", &empty);
        assert_ne!(a, b);

        let with_options = fingerprint("https://example.com/a", &json!({"method": "POST"}));
        assert_ne!(a, with_options);
    }
}
