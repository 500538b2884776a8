//! Cache Statistics Module
//!
//! Point-in-time snapshot of cache size, access and lifetime metrics.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Counters ==
/// Running counters kept by a cache between snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CacheCounters {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
}

// == Cache Statistics ==
/// Snapshot returned by `CacheManager::stats`.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatistics {
    /// Entries currently stored, expired-but-unpurged included
    pub size: usize,
    /// Sum of access counts over all stored entries
    pub total_accesses: u64,
    /// Mean entry age in milliseconds, 0 when empty
    pub avg_age_ms: f64,
    /// `total_accesses / (total_accesses + size)`, 0 when both are 0.
    ///
    /// Not a true hit ratio since misses do not enter it; see
    /// [`CacheStatistics::observed_hit_rate`] for that.
    pub hit_rate: f64,
    /// Successful lookups
    pub hits: u64,
    /// Lookups for absent or expired keys
    pub misses: u64,
    /// Entries removed to make room
    pub evictions: u64,
    /// Entries removed for exceeding max age
    pub expirations: u64,
    /// When the snapshot was taken
    pub captured_at: DateTime<Utc>,
}

impl CacheStatistics {
    // == Constructor ==
    /// Builds a snapshot from entry aggregates and running counters.
    pub(crate) fn new(
        size: usize,
        total_accesses: u64,
        total_age_ms: f64,
        counters: CacheCounters,
    ) -> Self {
        let avg_age_ms = if size == 0 {
            0.0
        } else {
            total_age_ms / size as f64
        };

        Self {
            size,
            total_accesses,
            avg_age_ms,
            hit_rate: ratio(total_accesses, total_accesses + size as u64),
            hits: counters.hits,
            misses: counters.misses,
            evictions: counters.evictions,
            expirations: counters.expirations,
            captured_at: Utc::now(),
        }
    }

    // == Observed Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn observed_hit_rate(&self) -> f64 {
        ratio(self.hits, self.hits + self.misses)
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let stats = CacheStatistics::new(0, 0, 0.0, CacheCounters::default());
        assert_eq!(stats.size, 0);
        assert_eq!(stats.avg_age_ms, 0.0);
        assert_eq!(stats.hit_rate, 0.0);
        assert!(!stats.hit_rate.is_nan());
        assert_eq!(stats.observed_hit_rate(), 0.0);
    }

    #[test]
    fn test_legacy_hit_rate() {
        // 3 accesses over 1 entry: 3 / (3 + 1)
        let stats = CacheStatistics::new(1, 3, 10.0, CacheCounters::default());
        assert_eq!(stats.hit_rate, 0.75);
        assert_eq!(stats.avg_age_ms, 10.0);
    }

    #[test]
    fn test_average_age() {
        let stats = CacheStatistics::new(4, 0, 100.0, CacheCounters::default());
        assert_eq!(stats.avg_age_ms, 25.0);
        assert_eq!(stats.hit_rate, 0.0);
    }

    #[test]
    fn test_observed_hit_rate_mixed() {
        let counters = CacheCounters {
            hits: 1,
            misses: 3,
            ..Default::default()
        };
        let stats = CacheStatistics::new(1, 1, 0.0, counters);
        assert_eq!(stats.observed_hit_rate(), 0.25);
    }

    #[test]
    fn test_snapshot_serializes() {
        let counters = CacheCounters {
            evictions: 2,
            ..Default::default()
        };
        let stats = CacheStatistics::new(2, 0, 0.0, counters);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["size"], 2);
        assert_eq!(json["evictions"], 2);
        assert!(json.get("captured_at").is_some());
    }
}
