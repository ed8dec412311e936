//! Cache Entry Type
//!
//! Provides the `CacheEntry<K, V>` structure carried by the recency list.
//! Each entry pairs a key, immutable once stored, with a value that may be
//! replaced in place when the same key is put again.

use core::fmt;

/// A key-value association stored by the cache.
///
/// Entries are created on the first `put` of a key, have their value replaced
/// in place on subsequent `put`s of the same key, and are destroyed on
/// `remove`, capacity eviction, or `clear`.
///
/// # Examples
///
/// ```
/// use lru_rs::entry::CacheEntry;
///
/// let entry = CacheEntry::new("key", 42);
/// assert_eq!(entry.key, "key");
/// assert_eq!(entry.value, 42);
/// ```
#[derive(Clone)]
pub struct CacheEntry<K, V> {
    /// The cached key.
    pub key: K,

    /// The cached value.
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a new cache entry.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
