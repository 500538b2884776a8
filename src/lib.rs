//! Doc Cache - a generic in-memory cache manager
//!
//! Memoizes fetched documents and API responses with age-based expiration
//! and LRU, FIFO or TTL eviction.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod registry;
pub mod shared;

pub use cache::{CacheConfig, CacheManager, CacheStatistics, EvictionStrategy};
pub use config::Config;
pub use error::{CacheError, Result};
pub use fetch::{with_cache, with_cache_local};
pub use registry::CacheRegistry;
pub use shared::SharedCache;
