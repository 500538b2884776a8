//! Cache Module
//!
//! Provides in-memory caching with age-based expiration and LRU, FIFO or TTL
//! eviction.

mod entry;
mod key;
mod manager;
mod policy;
mod stats;


// Re-export public types
pub use entry::CacheEntry;
pub use key::{build_key, CacheKeyBuilder, KeyPart, KEY_DELIMITER};
pub use manager::CacheManager;
pub use policy::{CacheConfig, EvictionStrategy, DEFAULT_MAX_AGE, DEFAULT_MAX_SIZE};
pub use stats::CacheStatistics;
