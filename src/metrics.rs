//! Cache Metrics System
//!
//! Provides count-based metrics for the cache using BTreeMap-based reporting.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap is used instead of HashMap for several reasons:
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Essential for testing and comparisons
//! - **Stable serialization**: Exports have predictable key ordering
//!
//! The performance difference (O(log n) vs O(1)) is negligible with this few
//! metric keys, but the deterministic behavior is invaluable.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters tracked by the LRU cache.
///
/// All counters are entry counts; the cache bounds its contents by entry
/// count, not bytes. Misses are derived as `requests - cache_hits`.
#[derive(Debug, Default, Clone)]
pub struct LruCacheMetrics {
    /// Total number of lookups (`get`/`get_mut`) made against the cache.
    pub requests: u64,

    /// Number of lookups that found their key.
    pub cache_hits: u64,

    /// Number of entries inserted for a previously untracked key.
    pub insertions: u64,

    /// Number of entries evicted to enforce the capacity bound.
    pub evictions: u64,

    /// Number of entries explicitly removed by the caller.
    pub removals: u64,
}

impl LruCacheMetrics {
    /// Records a cache hit.
    pub(crate) fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a cache miss.
    ///
    /// Misses are calculated as (requests - cache_hits), so only the request
    /// counter advances here.
    pub(crate) fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records an insertion of a new key.
    pub(crate) fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an eviction forced by the capacity bound.
    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an explicit removal.
    pub(crate) fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Cache misses, derived as requests minus hits.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Calculates the cache hit rate.
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if no requests have been made
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Calculates the cache miss rate.
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if no requests have been made
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the metrics to a BTreeMap for reporting.
    ///
    /// Uses BTreeMap to ensure deterministic, consistent ordering of metrics.
    ///
    /// # Returns
    /// A BTreeMap containing all metrics with consistent key ordering
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}

/// Trait that cache implementations expose for metrics reporting.
///
/// Uses BTreeMap to ensure deterministic ordering of metrics, which is
/// essential for reproducible benchmarks and consistent test results.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    ///
    /// # Returns
    /// A BTreeMap where keys are metric names and values are metric values as f64
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification.
    ///
    /// # Returns
    /// A static string identifying the cache algorithm (e.g., "LRU")
    fn algorithm_name(&self) -> &'static str;
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
