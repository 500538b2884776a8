//! Cached Fetch Module
//!
//! Wraps an async producer so that a cache hit skips it and a miss fills the
//! cache with the produced value.

use std::future::Future;

use tracing::debug;

use crate::cache::CacheManager;
use crate::shared::SharedCache;

/// Returns the cached value for `key`, or runs `producer` and caches its result.
///
/// The lookup and the fill are separate lock acquisitions and the lock is not
/// held while the producer runs. Concurrent callers missing on the same key
/// each run their producer and the last fill wins.
///
/// Producer errors are returned unchanged and nothing is cached.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// use doc_cache::{with_cache, CacheConfig, SharedCache};
///
/// let cache = SharedCache::new(CacheConfig::default());
/// let doc = with_cache(&cache, "readme", || async {
///     Ok::<_, std::io::Error>("# Hello".to_string())
/// })
/// .await
/// .unwrap();
///
/// assert_eq!(doc, "# Hello");
/// assert!(cache.has("readme").await);
/// # });
/// ```
pub async fn with_cache<T, E, F, Fut>(
    cache: &SharedCache<T>,
    key: &str,
    producer: F,
) -> Result<T, E>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Some(hit) = cache.get(key).await {
        return Ok(hit);
    }

    debug!(key, "cache miss, invoking producer");
    let value = producer().await?;
    cache.set(key, value.clone()).await;
    Ok(value)
}

/// Same as [`with_cache`] for a cache owned by the caller.
///
/// The exclusive borrow is held across the producer await.
pub async fn with_cache_local<T, E, F, Fut>(
    cache: &mut CacheManager<T>,
    key: &str,
    producer: F,
) -> Result<T, E>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Some(hit) = cache.get_cloned(key) {
        return Ok(hit);
    }

    debug!(key, "cache miss, invoking producer");
    let value = producer().await?;
    cache.set(key, value.clone());
    Ok(value)
}
