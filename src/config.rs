//! Configuration for the Least Recently Used (LRU) cache.
//!
//! The cache is bounded by an entry count fixed at construction. A capacity
//! of zero is legal and yields a degenerate cache that retains nothing: every
//! `put` is immediately evicted.
//!
//! Capacities arriving from external, signed sources are validated through
//! `TryFrom<i64>`, which rejects negative values at the boundary where they
//! are representable.
//!
//! # Examples
//!
//! ```
//! use lru_rs::config::LruCacheConfig;
//! use lru_rs::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.cap(), 1000);
//!
//! // The default capacity matches conventional hash-table sizing.
//! assert_eq!(LruCacheConfig::default().capacity, 16);
//! ```

use crate::error::CacheError;
use core::fmt;

/// Capacity used when none is specified, matching the conventional default
/// hash-table sizing.
pub const DEFAULT_CAPACITY: usize = 16;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Examples
///
/// ```
/// use lru_rs::config::LruCacheConfig;
/// use lru_rs::CacheError;
///
/// let config = LruCacheConfig { capacity: 100 };
/// assert_eq!(config.capacity, 100);
///
/// // Signed capacities are validated at the conversion boundary.
/// assert_eq!(LruCacheConfig::try_from(100), Ok(config));
/// assert_eq!(
///     LruCacheConfig::try_from(-1),
///     Err(CacheError::NegativeCapacity(-1))
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold. Zero is legal
    /// and yields a cache that retains nothing.
    pub capacity: usize,
}

impl Default for LruCacheConfig {
    fn default() -> Self {
        LruCacheConfig {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl TryFrom<i64> for LruCacheConfig {
    type Error = CacheError;

    fn try_from(capacity: i64) -> Result<Self, Self::Error> {
        let capacity =
            usize::try_from(capacity).map_err(|_| CacheError::NegativeCapacity(capacity))?;
        Ok(LruCacheConfig { capacity })
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
