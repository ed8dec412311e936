//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a memory-efficient LRU cache implementation with O(1) operations
//! for all common cache operations. LRU is one of the most widely used cache eviction
//! algorithms due to its simplicity and good performance for workloads with temporal locality.
//!
//! # Algorithm
//!
//! The cache maintains items in order of recency of use, evicting the least recently
//! used item when capacity is reached. Two cooperating structures are kept mutually
//! consistent at all times: a hash index mapping each key to its list node, and a
//! doubly linked recency list ordered from most to least recently used. Reads are
//! mutations here: a successful `get` relinks the touched entry at the front of the
//! list, which is observable in subsequent eviction order.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe; index and list mutations are not atomic
//! with respect to each other. For concurrent access, wrap the whole cache with a
//! synchronization primitive such as `Mutex`, or confine it to a single owning task.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::error::{CacheError, CacheResult};
use crate::list::{Entry, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
extern crate std;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and removing entries. When a `put` of a new key
/// pushes the cache past capacity, the least recently used entry is evicted
/// to make room.
///
/// Failed lookups report [`CacheError::KeyNotFound`] and leave the cache
/// unchanged apart from the miss counter.
///
/// # Safety
///
/// The index holds raw pointers into the recency list. These pointers are
/// always valid as long as:
/// - The pointer was obtained from a `list` entry's `add()` call
/// - The node has not been removed from the list
/// - The cache has not been dropped
///
/// # Examples
///
/// ```
/// use lru_rs::LruCache;
///
/// let mut cache = LruCache::new(2);
///
/// // Add items to the cache
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Ok(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert!(cache.get(&"banana").is_err());
/// assert_eq!(cache.get(&"apple"), Ok(&1));
/// assert_eq!(cache.get(&"cherry"), Ok(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, *mut Entry<CacheEntry<K, V>>, S>,
    metrics: LruCacheMetrics,
}

// SAFETY: LruCache owns all data and raw pointers point only to nodes owned by `list`.
// Concurrent access is safe when wrapped in proper synchronization primitives.
unsafe impl<K: Send, V: Send, S: Send> Send for LruCache<K, V, S> {}

// SAFETY: All mutation requires &mut self; shared references cannot cause data races.
unsafe impl<K: Send, V: Send, S: Sync> Sync for LruCache<K, V, S> {}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a new LRU cache from the given configuration.
    ///
    /// Pass `None` to use the default hash builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use lru_rs::config::LruCacheConfig;
    /// use lru_rs::LruCache;
    ///
    /// let config = LruCacheConfig { capacity: 100 };
    /// let mut cache: LruCache<String, i32> = LruCache::init(config, None);
    /// cache.put("answer".to_string(), 42);
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }

    /// Creates a new LRU cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is legal and yields a cache that retains nothing.
    pub fn new(capacity: usize) -> Self {
        Self::init(LruCacheConfig { capacity }, None)
    }
}

impl<K: Hash + Eq, V> Default for LruCache<K, V> {
    /// Creates a cache with the default capacity of
    /// [`DEFAULT_CAPACITY`](crate::config::DEFAULT_CAPACITY) entries.
    fn default() -> Self {
        Self::init(LruCacheConfig::default(), None)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified configuration and hash builder.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        let map_capacity = config.capacity.next_power_of_two();
        LruCache {
            config,
            list: List::new(),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            metrics: LruCacheMetrics::default(),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> usize {
        self.config.capacity
    }

    /// Returns the current number of entries in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    // The index and the recency list must always track the same entries.
    #[inline]
    fn debug_assert_in_sync(&self) {
        debug_assert_eq!(self.map.len(), self.list.len());
    }

    /// Returns a reference to the value of the given key and marks the entry
    /// as most recently used.
    ///
    /// # Errors
    ///
    /// Fails with [`CacheError::KeyNotFound`] if the key is not tracked; the
    /// failed lookup does not mutate the cache beyond the miss counter.
    pub fn get<Q>(&mut self, key: &Q) -> CacheResult<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if let Some(node) = self.map.get(key).copied() {
            // SAFETY: node comes from our map and is linked in `list`
            unsafe {
                self.list.move_to_front(node);
                self.metrics.record_hit();
                Ok(&(*node).get_value().value)
            }
        } else {
            self.metrics.record_miss();
            Err(CacheError::KeyNotFound)
        }
    }

    /// Returns a mutable reference to the value of the given key and marks
    /// the entry as most recently used.
    ///
    /// # Errors
    ///
    /// Fails with [`CacheError::KeyNotFound`] if the key is not tracked; the
    /// failed lookup does not mutate the cache beyond the miss counter.
    pub fn get_mut<Q>(&mut self, key: &Q) -> CacheResult<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if let Some(node) = self.map.get(key).copied() {
            // SAFETY: node comes from our map and is linked in `list`
            unsafe {
                self.list.move_to_front(node);
                self.metrics.record_hit();
                Ok(&mut (*node).get_value_mut().value)
            }
        } else {
            self.metrics.record_miss();
            Err(CacheError::KeyNotFound)
        }
    }

    /// Returns true if the cache tracks the given key.
    ///
    /// Unlike [`get`](Self::get), membership queries do not alter recency order.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns true if any entry currently stores the given value.
    ///
    /// This walks the recency list (O(n)) without reordering it.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.list.iter().any(|entry| entry.value == *value)
    }

    /// Removes the given key from the cache and returns its value.
    ///
    /// Head, tail, and interior entries are all unlinked correctly; removing
    /// the sole remaining entry returns the cache to its empty state.
    ///
    /// # Errors
    ///
    /// Fails with [`CacheError::KeyNotFound`] if the key is not tracked; a
    /// failed removal leaves the cache unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> CacheResult<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key).ok_or(CacheError::KeyNotFound)?;
        // SAFETY: node comes from our map and is linked in `list`
        let entry = unsafe { self.list.remove(node) }.ok_or(CacheError::KeyNotFound)?;
        self.metrics.record_removal();
        self.debug_assert_in_sync();
        // SAFETY: entries produced by `add` always hold an initialized value
        Ok(unsafe { entry.into_value() }.value)
    }

    /// Clears the cache, removing all entries from both index and list.
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
        self.debug_assert_in_sync();
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the key is already tracked, its value is replaced in place, the
    /// entry is marked most recently used, and the previous value is
    /// returned. If the key is new, the entry is inserted at the front of the
    /// recency list and `None` is returned; if that insertion pushes the
    /// cache past capacity, the least recently used entry is evicted.
    ///
    /// With a capacity of zero the inserted entry is itself the least
    /// recently used and is evicted immediately.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&node) = self.map.get(&key) {
            // SAFETY: node comes from our map and is linked in `list`
            unsafe {
                self.list.move_to_front(node);
                let old = mem::replace(&mut (*node).get_value_mut().value, value);
                self.debug_assert_in_sync();
                return Some(old);
            }
        }

        let node = self.list.add(CacheEntry::new(key.clone(), value));
        self.map.insert(key, node);
        self.metrics.record_insertion();

        if self.list.len() > self.config.capacity {
            if let Some(entry) = self.list.remove_last() {
                // SAFETY: entries produced by `add` always hold an initialized value
                let evicted = unsafe { entry.into_value() };
                self.map.remove(&evicted.key);
                self.metrics.record_eviction();
            }
        }

        self.debug_assert_in_sync();
        None
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}
