//! Cache Registry Module
//!
//! The application's per-concern caches, built once at startup and handed to
//! the components that need them.

use serde_json::Value;
use tracing::info;

use crate::cache::CacheStatistics;
use crate::config::Config;
use crate::shared::SharedCache;

/// Shared caches for fetched data, visualizations and API responses.
///
/// Cloning the registry clones the handles, not the caches.
#[derive(Debug, Clone)]
pub struct CacheRegistry {
    /// Fetched documents and datasets
    pub data: SharedCache<Value>,
    /// Rendered visualizations
    pub visualization: SharedCache<Value>,
    /// Raw API responses
    pub api: SharedCache<Value>,
}

impl CacheRegistry {
    /// Creates the caches from configuration.
    pub fn from_config(config: &Config) -> Self {
        info!(
            "Cache registry initialized: data={}/{}s/{}, visualization={}/{}s/{}, api={}/{}s/{}",
            config.data.max_size,
            config.data.max_age.as_secs(),
            config.data.strategy,
            config.visualization.max_size,
            config.visualization.max_age.as_secs(),
            config.visualization.strategy,
            config.api.max_size,
            config.api.max_age.as_secs(),
            config.api.strategy,
        );

        Self {
            data: SharedCache::new(config.data),
            visualization: SharedCache::new(config.visualization),
            api: SharedCache::new(config.api),
        }
    }

    /// Returns a named statistics snapshot for each cache.
    pub async fn stats(&self) -> Vec<(&'static str, CacheStatistics)> {
        vec![
            ("data", self.data.stats().await),
            ("visualization", self.visualization.stats().await),
            ("api", self.api.stats().await),
        ]
    }

    /// Empties every cache.
    pub async fn clear_all(&self) {
        self.data.clear().await;
        self.visualization.clear().await;
        self.api.clear().await;
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
