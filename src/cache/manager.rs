//! Cache Manager Module
//!
//! Main cache engine: keyed storage bounded by size and age, with
//! strategy-driven eviction and lazy expiration.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::cache::stats::CacheCounters;
use crate::cache::{CacheConfig, CacheEntry, CacheStatistics};

// == Cache Manager ==
/// Size-bounded, time-aware store mapping string keys to values of type `T`.
///
/// Not synchronized; wrap it in a [`SharedCache`](crate::SharedCache) to share
/// across tasks.
#[derive(Debug)]
pub struct CacheManager<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Fixed for the lifetime of the cache
    config: CacheConfig,
    /// Hit, miss, eviction and expiration counters
    counters: CacheCounters,
    /// Monotonic operation counter used to order inserts and accesses
    seq: u64,
}

impl<T> CacheManager<T> {
    // == Constructor ==
    /// Creates an empty cache with the given configuration.
    ///
    /// A `max_size` of zero is raised to one.
    pub fn new(mut config: CacheConfig) -> Self {
        if let Err(err) = config.validate() {
            warn!("{}; using max_size=1", err);
            config.max_size = 1;
        }

        Self {
            entries: HashMap::new(),
            config,
            counters: CacheCounters::default(),
            seq: 0,
        }
    }

    // == Set ==
    /// Stores a value, replacing any previous value under the same key.
    ///
    /// Expired entries are purged first. If the key is new and the cache is
    /// still full, one entry is evicted according to the configured strategy.
    /// Overwriting a live key never evicts.
    pub fn set(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        let now = Instant::now();

        self.purge_expired_at(now);

        if !self.entries.contains_key(&key) && self.entries.len() >= self.config.max_size {
            self.evict_one(now);
        }

        let seq = self.next_seq();
        self.entries.insert(key, CacheEntry::new(value, now, seq));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Expired entries are removed and reported as absent. A hit bumps the
    /// entry's access count and last access time.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        let now = Instant::now();
        let max_age = self.config.max_age;

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(max_age, now),
            None => {
                self.counters.misses += 1;
                trace!(key, "cache miss");
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.counters.misses += 1;
            self.counters.expirations += 1;
            trace!(key, "cache miss (expired)");
            return None;
        }

        let seq = self.next_seq();
        self.counters.hits += 1;
        trace!(key, "cache hit");

        let entry = self.entries.get_mut(key)?;
        entry.touch(now, seq);
        Some(&entry.value)
    }

    /// Like [`get`](Self::get), returning an owned copy of the value.
    pub fn get_cloned(&mut self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        self.get(key).cloned()
    }

    // == Has ==
    /// Returns whether `get(key)` would hit. Has the same side effects as `get`.
    pub fn has(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }

    // == Peek ==
    /// Reads a live value without touching access metadata or counters.
    pub fn peek(&self, key: &str) -> Option<&T> {
        let now = Instant::now();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(self.config.max_age, now))
            .map(|entry| &entry.value)
    }

    // == Delete ==
    /// Removes an entry by key, returning whether one was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes all entries. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Size ==
    /// Returns the number of stored entries, including expired ones not yet purged.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over stored keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the cache configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Stats ==
    /// Returns a statistics snapshot.
    pub fn stats(&self) -> CacheStatistics {
        let now = Instant::now();
        let total_accesses: u64 = self.entries.values().map(|e| e.access_count).sum();
        let total_age_ms: f64 = self
            .entries
            .values()
            .map(|e| e.age(now).as_secs_f64() * 1000.0)
            .sum();

        CacheStatistics::new(self.entries.len(), total_accesses, total_age_ms, self.counters)
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    fn purge_expired_at(&mut self, now: Instant) -> usize {
        let max_age = self.config.max_age;
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired(max_age, now));

        let removed = before - self.entries.len();
        if removed > 0 {
            self.counters.expirations += removed as u64;
            debug!("Purged {} expired entries", removed);
        }
        removed
    }

    // == Evict ==
    /// Removes exactly one entry chosen by the strategy. No-op when empty.
    fn evict_one(&mut self, now: Instant) -> Option<String> {
        let strategy = self.config.strategy;
        let victim = strategy.select_victim(&self.entries, self.config.max_age, now)?;

        self.entries.remove(&victim);
        self.counters.evictions += 1;
        debug!(key = %victim, %strategy, "Evicted cache entry");
        Some(victim)
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

impl<T> Default for CacheManager<T> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
