//! Error types for the cache crate
//!
//! Cache operations are total; errors only arise when building configuration.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Strategy name did not match LRU, FIFO or TTL
    #[error("Unknown eviction strategy: {0}")]
    UnknownStrategy(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
