//! Shared Cache Module
//!
//! Thread-safe handle over a [`CacheManager`] for use across async tasks.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{CacheConfig, CacheManager, CacheStatistics};

/// Cloneable handle to one cache instance.
///
/// Every operation takes the single per-cache lock, so the purge, evict and
/// insert steps of `set` never interleave with other calls.
#[derive(Debug)]
pub struct SharedCache<T> {
    inner: Arc<Mutex<CacheManager<T>>>,
}

impl<T> Clone for SharedCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedCache<T> {
    /// Creates a handle over a new, empty cache.
    pub fn new(config: CacheConfig) -> Self {
        Self::from_manager(CacheManager::new(config))
    }

    /// Wraps an existing cache.
    pub fn from_manager(cache: CacheManager<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Stores a value. See [`CacheManager::set`].
    pub async fn set(&self, key: impl Into<String>, value: T) {
        self.inner.lock().await.set(key, value);
    }

    /// Returns a copy of a live value. See [`CacheManager::get`].
    pub async fn get(&self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().await.get_cloned(key)
    }

    pub async fn has(&self, key: &str) -> bool {
        self.inner.lock().await.has(key)
    }

    pub async fn delete(&self, key: &str) -> bool {
        self.inner.lock().await.delete(key)
    }

    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }

    pub async fn size(&self) -> usize {
        self.inner.lock().await.size()
    }

    pub async fn stats(&self) -> CacheStatistics {
        self.inner.lock().await.stats()
    }

    pub async fn purge_expired(&self) -> usize {
        self.inner.lock().await.purge_expired()
    }

    /// Returns the configuration of the underlying cache.
    pub async fn config(&self) -> CacheConfig {
        *self.inner.lock().await.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::EvictionStrategy;

    #[tokio::test]
    async fn test_shared_set_and_get() {
        let cache = SharedCache::new(CacheConfig::default());

        cache.set("key", "value".to_string()).await;

        assert_eq!(cache.get("key").await, Some("value".to_string()));
        assert!(cache.has("key").await);
        assert_eq!(cache.size().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let cache = SharedCache::new(CacheConfig::default());
        let other = cache.clone();

        cache.set("a", 1).await;

        assert_eq!(other.get("a").await, Some(1));
        assert!(other.delete("a").await);
        assert!(!cache.has("a").await);
    }

    #[tokio::test]
    async fn test_clear_and_stats() {
        let cache = SharedCache::new(CacheConfig::default());
        cache.set("a", 1).await;
        cache.set("b", 2).await;

        cache.clear().await;

        let stats = cache.stats().await;
        assert_eq!(stats.size, 0);
        assert_eq!(cache.purge_expired().await, 0);
    }

    #[tokio::test]
    async fn test_concurrent_sets_respect_capacity() {
        let cache = SharedCache::new(CacheConfig {
            max_size: 10,
            strategy: EvictionStrategy::Fifo,
            ..Default::default()
        });

        let mut handles = vec![];
        for i in 0..100 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                cache.set(format!("key{}", i), i).await;
                cache.get(&format!("key{}", i)).await
            }));
        }

        for handle in handles {
            handle.await.expect("Task should not panic");
        }

        assert_eq!(cache.size().await, 10);
        assert_eq!(cache.config().await.max_size, 10);
        assert_eq!(cache.stats().await.evictions, 90);
    }
}
