//! Configuration Module
//!
//! Loads the configuration of the per-concern caches from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::cache::{CacheConfig, EvictionStrategy};

/// Configuration of the application's shared caches.
///
/// Each cache reads `<PREFIX>_MAX_AGE_SECS`, `<PREFIX>_MAX_SIZE` and
/// `<PREFIX>_STRATEGY`, falling back to its preset when unset or invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fetched documents and datasets
    pub data: CacheConfig,
    /// Rendered visualizations
    pub visualization: CacheConfig,
    /// Raw API responses
    pub api: CacheConfig,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_CACHE_*` - data cache (default: 600s, 50, LRU)
    /// - `VISUALIZATION_CACHE_*` - visualization cache (default: 300s, 20, LRU)
    /// - `API_CACHE_*` - API response cache (default: 120s, 100, TTL)
    pub fn from_env() -> Self {
        Self {
            data: cache_config_from_env("DATA_CACHE", CacheConfig::data()),
            visualization: cache_config_from_env(
                "VISUALIZATION_CACHE",
                CacheConfig::visualization(),
            ),
            api: cache_config_from_env("API_CACHE", CacheConfig::api()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: CacheConfig::data(),
            visualization: CacheConfig::visualization(),
            api: CacheConfig::api(),
        }
    }
}

fn cache_config_from_env(prefix: &str, preset: CacheConfig) -> CacheConfig {
    let config = CacheConfig {
        max_age: env_var::<u64>(&format!("{}_MAX_AGE_SECS", prefix))
            .map(Duration::from_secs)
            .unwrap_or(preset.max_age),
        max_size: env_var(&format!("{}_MAX_SIZE", prefix)).unwrap_or(preset.max_size),
        strategy: env_var::<EvictionStrategy>(&format!("{}_STRATEGY", prefix))
            .unwrap_or(preset.strategy),
    };

    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            warn!("{} for {}; using defaults", err, prefix);
            preset
        }
    }
}

/// Parses an environment variable, warning when it is set but unparsable.
fn env_var<T>(name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Ignoring {}={:?}: {}", name, raw, err);
            None
        }
    }
}
