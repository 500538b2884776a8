//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with access metadata.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with its value and access metadata.
///
/// `last_accessed_at >= created_at` holds for the lifetime of the entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Insertion time, set once
    pub created_at: Instant,
    /// Time of the most recent successful read (or insertion)
    pub last_accessed_at: Instant,
    /// Number of successful reads
    pub access_count: u64,
    /// Insertion order within the owning cache
    pub(crate) inserted_seq: u64,
    /// Access order within the owning cache
    pub(crate) accessed_seq: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a fresh entry stamped at `now`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `now` - Creation and initial access time
    /// * `seq` - Sequence number from the owning cache's operation counter
    pub fn new(value: T, now: Instant, seq: u64) -> Self {
        Self {
            value,
            created_at: now,
            last_accessed_at: now,
            access_count: 0,
            inserted_seq: seq,
            accessed_seq: seq,
        }
    }

    // == Age ==
    /// Time elapsed since creation.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `max_age`.
    ///
    /// An entry whose age equals `max_age` exactly is still live.
    pub fn is_expired(&self, max_age: Duration, now: Instant) -> bool {
        self.age(now) > max_age
    }

    // == Time To Expire ==
    /// Remaining lifetime in nanoseconds; negative once expired.
    pub fn time_to_expire(&self, max_age: Duration, now: Instant) -> i128 {
        max_age.as_nanos() as i128 - self.age(now).as_nanos() as i128
    }

    // == Touch ==
    /// Records a successful read.
    pub fn touch(&mut self, now: Instant, seq: u64) {
        self.access_count += 1;
        self.last_accessed_at = now.max(self.created_at);
        self.accessed_seq = seq;
    }
}
