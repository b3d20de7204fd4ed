//! In-memory cache implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use insights_core::ResponseCache;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Default time-to-live for cached responses: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Cache entry with timestamp for TTL-based invalidation.
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Value,
    stored_at: DateTime<Utc>,
}

impl CacheEntry {
    fn new(payload: Value) -> Self {
        Self {
            payload,
            stored_at: Utc::now(),
        }
    }

    fn is_stale(&self, ttl: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.stored_at);
        age > chrono::TimeDelta::from_std(ttl).unwrap_or(chrono::TimeDelta::MAX)
    }
}

/// In-memory response cache with lazy, TTL-based expiry.
///
/// Entries are stored in a `RwLock`-protected `HashMap` and evicted the first
/// time they are read past their TTL; there is no background sweep and no
/// size bound. Payloads are cloned on get/put.
///
/// The check-then-populate sequence around this cache is not atomic across
/// await points: two tasks racing on the same uncached key may both fetch,
/// and the second write overwrites with an equivalent value.
#[derive(Debug)]
pub struct InMemoryCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemoryCache {
    /// Creates an empty cache with the default 5-minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Creates an empty cache with a custom TTL.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the number of entries currently stored, including any that
    /// have expired but not yet been evicted.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseCache for InMemoryCache {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Option<Value> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_stale(self.ttl) => {
                    debug!("Cache hit");
                    return Some(entry.payload.clone());
                }
                Some(_) => {}
                None => {
                    debug!("Cache miss");
                    return None;
                }
            }
        }

        // Stale entry: evict under the write lock, re-checking since another
        // task may have refreshed it in between.
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if !entry.is_stale(self.ttl) => {
                debug!("Cache hit after refresh");
                Some(entry.payload.clone())
            }
            Some(_) => {
                entries.remove(key);
                debug!("Evicted stale entry");
                None
            }
            None => None,
        }
    }

    #[instrument(skip(self, payload))]
    async fn put(&self, key: &str, payload: Value) {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), CacheEntry::new(payload));
        debug!("Cached response");
    }

    #[instrument(skip(self))]
    async fn clear(&self) {
        self.entries.write().await.clear();
        debug!("Cleared all cache entries");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_returns_fresh_entry() {
        let cache = InMemoryCache::new();
        assert!(cache.get("key").await.is_none());

        cache.put("key", json!({"price": "123.45"})).await;

        let hit = cache.get("key").await;
        assert_eq!(hit, Some(json!({"price": "123.45"})));
    }

    #[tokio::test]
    async fn test_put_overwrites_prior_entry() {
        let cache = InMemoryCache::new();
        cache.put("key", json!(1)).await;
        cache.put("key", json!(2)).await;

        assert_eq!(cache.get("key").await, Some(json!(2)));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_evicted_on_read() {
        let cache = InMemoryCache::with_ttl(Duration::from_millis(20));
        cache.put("key", json!("payload")).await;

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(cache.get("key").await.is_none());
        // Lazy expiry removed the entry during the read
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_entry_survives_within_ttl() {
        let cache = InMemoryCache::with_ttl(Duration::from_secs(60));
        cache.put("key", json!("payload")).await;

        assert!(cache.get("key").await.is_some());
        assert!(cache.get("key").await.is_some());
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let cache = InMemoryCache::new();
        cache.put("a", json!(1)).await;
        cache.put("b", json!(2)).await;

        cache.clear().await;

        assert!(cache.is_empty().await);
        assert!(cache.get("a").await.is_none());
    }
}
