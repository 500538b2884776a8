//! Cache Policy Module
//!
//! Eviction strategies and the per-cache configuration they are selected by.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::cache::CacheEntry;
use crate::error::{CacheError, Result};

// == Defaults ==
/// Default maximum entry age (5 minutes)
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// Default maximum number of live entries
pub const DEFAULT_MAX_SIZE: usize = 100;

// == Eviction Strategy ==
/// Policy used to pick a victim when a full cache receives a new key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EvictionStrategy {
    /// Evict the entry with the oldest last access
    #[default]
    Lru,
    /// Evict the entry with the oldest creation time
    Fifo,
    /// Evict the entry closest to expiring
    Ttl,
}

impl EvictionStrategy {
    // == Select Victim ==
    /// Picks the key to evict from `entries`, or None when empty.
    ///
    /// Ties on timestamps are broken by the entries' sequence numbers, so the
    /// choice does not depend on map iteration order.
    pub fn select_victim<T>(
        self,
        entries: &HashMap<String, CacheEntry<T>>,
        max_age: Duration,
        now: Instant,
    ) -> Option<String> {
        let victim = match self {
            EvictionStrategy::Lru => entries
                .iter()
                .min_by_key(|(_, e)| (e.last_accessed_at, e.accessed_seq)),
            EvictionStrategy::Fifo => entries
                .iter()
                .min_by_key(|(_, e)| (e.created_at, e.inserted_seq)),
            // Already-expired entries have negative remaining time and go first.
            EvictionStrategy::Ttl => entries
                .iter()
                .min_by_key(|(_, e)| (e.time_to_expire(max_age, now), e.inserted_seq)),
        };

        victim.map(|(key, _)| key.clone())
    }
}

impl fmt::Display for EvictionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EvictionStrategy::Lru => "LRU",
            EvictionStrategy::Fifo => "FIFO",
            EvictionStrategy::Ttl => "TTL",
        };
        f.write_str(name)
    }
}

impl FromStr for EvictionStrategy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LRU" => Ok(EvictionStrategy::Lru),
            "FIFO" => Ok(EvictionStrategy::Fifo),
            "TTL" => Ok(EvictionStrategy::Ttl),
            _ => Err(CacheError::UnknownStrategy(s.to_string())),
        }
    }
}

// == Cache Config ==
/// Immutable configuration of a single cache instance.
///
/// Partial configs are written with struct update syntax:
/// `CacheConfig { max_size: 20, ..Default::default() }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Entries older than this (by creation time) are expired
    pub max_age: Duration,
    /// Maximum number of live entries
    pub max_size: usize,
    /// Victim selection when the cache is full
    pub strategy: EvictionStrategy,
}

impl CacheConfig {
    /// Preset for fetched documents: 10 minutes, 50 entries, LRU.
    pub fn data() -> Self {
        Self {
            max_age: Duration::from_secs(10 * 60),
            max_size: 50,
            strategy: EvictionStrategy::Lru,
        }
    }

    /// Preset for rendered visualizations: 5 minutes, 20 entries, LRU.
    pub fn visualization() -> Self {
        Self {
            max_age: Duration::from_secs(5 * 60),
            max_size: 20,
            strategy: EvictionStrategy::Lru,
        }
    }

    /// Preset for raw API responses: 2 minutes, 100 entries, TTL.
    pub fn api() -> Self {
        Self {
            max_age: Duration::from_secs(2 * 60),
            max_size: 100,
            strategy: EvictionStrategy::Ttl,
        }
    }

    // == Validate ==
    /// Rejects configurations that cannot satisfy the capacity invariant.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            max_size: DEFAULT_MAX_SIZE,
            strategy: EvictionStrategy::default(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entries_at(base: Instant, layout: &[(&str, u64, u64)]) -> HashMap<String, CacheEntry<u32>> {
        // (key, created offset ms, last access offset ms)
        layout
            .iter()
            .enumerate()
            .map(|(seq, (key, created, accessed))| {
                let mut entry = CacheEntry::new(0, base + Duration::from_millis(*created), seq as u64);
                entry.touch(base + Duration::from_millis(*accessed), 100 + *accessed);
                entry.access_count = 0;
                (key.to_string(), entry)
            })
            .collect()
    }

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.max_age, Duration::from_secs(300));
        assert_eq!(config.max_size, 100);
        assert_eq!(config.strategy, EvictionStrategy::Lru);
    }

    #[test]
    fn test_config_presets() {
        assert_eq!(CacheConfig::data().max_size, 50);
        assert_eq!(CacheConfig::data().max_age, Duration::from_secs(600));
        assert_eq!(CacheConfig::visualization().max_size, 20);
        assert_eq!(CacheConfig::api().strategy, EvictionStrategy::Ttl);
        assert_eq!(CacheConfig::api().max_age, Duration::from_secs(120));
    }

    #[test]
    fn test_config_partial_override() {
        let config = CacheConfig {
            max_size: 2,
            ..Default::default()
        };
        assert_eq!(config.max_size, 2);
        assert_eq!(config.max_age, DEFAULT_MAX_AGE);
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let config = CacheConfig {
            max_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CacheError::InvalidConfig(_))));
        assert!(CacheConfig::default().validate().is_ok());
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("lru".parse::<EvictionStrategy>(), Ok(EvictionStrategy::Lru));
        assert_eq!("FIFO".parse::<EvictionStrategy>(), Ok(EvictionStrategy::Fifo));
        assert_eq!(" Ttl ".parse::<EvictionStrategy>(), Ok(EvictionStrategy::Ttl));
        assert_eq!(
            "mru".parse::<EvictionStrategy>(),
            Err(CacheError::UnknownStrategy("mru".to_string()))
        );
    }

    #[test]
    fn test_strategy_display_and_serde() {
        assert_eq!(EvictionStrategy::Fifo.to_string(), "FIFO");
        let json = serde_json::to_string(&EvictionStrategy::Ttl).unwrap();
        assert_eq!(json, "\"TTL\"");
        let parsed: EvictionStrategy = serde_json::from_str("\"LRU\"").unwrap();
        assert_eq!(parsed, EvictionStrategy::Lru);
    }

    #[test]
    fn test_select_victim_empty() {
        let entries: HashMap<String, CacheEntry<u32>> = HashMap::new();
        let now = Instant::now();
        assert_eq!(
            EvictionStrategy::Lru.select_victim(&entries, DEFAULT_MAX_AGE, now),
            None
        );
    }

    #[test]
    fn test_select_victim_lru_uses_last_access() {
        let base = Instant::now();
        let entries = entries_at(base, &[("a", 0, 30), ("b", 10, 10), ("c", 20, 20)]);
        let victim = EvictionStrategy::Lru.select_victim(&entries, DEFAULT_MAX_AGE, base);
        assert_eq!(victim.as_deref(), Some("b"));
    }

    #[test]
    fn test_select_victim_fifo_uses_creation() {
        let base = Instant::now();
        let entries = entries_at(base, &[("a", 0, 30), ("b", 10, 10), ("c", 20, 20)]);
        let victim = EvictionStrategy::Fifo.select_victim(&entries, DEFAULT_MAX_AGE, base);
        assert_eq!(victim.as_deref(), Some("a"));
    }

    #[test]
    fn test_select_victim_ttl_prefers_expired() {
        let base = Instant::now();
        let entries = entries_at(base, &[("a", 50, 50), ("b", 0, 0), ("c", 20, 20)]);
        let now = base + Duration::from_millis(200);
        // max_age 100ms: "b" is 100ms past expiry, the most negative remaining time
        let victim = EvictionStrategy::Ttl.select_victim(&entries, Duration::from_millis(100), now);
        assert_eq!(victim.as_deref(), Some("b"));
    }
}
