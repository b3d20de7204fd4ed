//! No-op cache implementation.

use async_trait::async_trait;
use insights_core::ResponseCache;
use serde_json::Value;
use tracing::trace;

/// A no-op cache that doesn't store anything.
///
/// [`get`](ResponseCache::get) always misses and [`put`](ResponseCache::put)
/// discards the payload. Useful for disabling caching or testing code paths
/// without cache hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl NoopCache {
    /// Create a new no-op cache.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResponseCache for NoopCache {
    async fn get(&self, _key: &str) -> Option<Value> {
        trace!("NoopCache: get called, returning None");
        None
    }

    async fn put(&self, _key: &str, _payload: Value) {
        trace!("NoopCache: put called, doing nothing");
    }

    async fn clear(&self) {
        trace!("NoopCache: clear called, doing nothing");
    }
}
