#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! The cache is built from two cooperating structures that are kept mutually
//! consistent after every operation:
//!
//! - an **index** mapping each key to the node holding its entry, giving O(1)
//!   lookup, and
//! - a **recency list**, a doubly linked sequence of entries ordered from
//!   most recently used (front) to least recently used (back).
//!
//! `get` and `get_mut` move the touched entry to the front of the list, so a
//! read is observable in subsequent eviction order. `put` on an existing key
//! replaces the value in place, moves the entry to the front, and returns the
//! previous value; `put` on a new key inserts at the front and evicts the
//! entry at the back once the capacity is exceeded.
//!
//! ```rust
//! use lru_rs::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.put(1, "one");
//! cache.put(2, "two");
//! cache.get(&1).unwrap();   // 1 becomes most recently used
//! cache.put(3, "three");    // 2 evicted (least recently used)
//! assert!(cache.get(&2).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the cache itself
//! - [`entry`]: the key-value pair stored per cached key
//! - [`config`]: capacity configuration and validation
//! - [`error`]: the error type for construction and lookup failures
//! - [`metrics`]: hit/miss/eviction counters for cache observability

#![no_std]

/// Cache entry type.
///
/// Provides the `CacheEntry<K, V>` pair carried by the recency list: an
/// immutable key alongside its replaceable value.
pub mod entry;

/// Doubly linked list implementation with in-place editing capabilities.
///
/// This module provides a memory-efficient doubly linked list that allows for
/// efficient insertion, removal, and reordering operations.
///
/// **Note**: This module is internal infrastructure and should not be used directly
/// by library consumers. It exposes unsafe raw pointer operations that require
/// careful invariant maintenance. Use the high-level cache implementation instead.
pub(crate) mod list;

/// Cache configuration.
///
/// Provides the capacity configuration for the cache, including validated
/// construction from signed capacities.
pub mod config;

/// Error types.
///
/// Provides the `CacheError` enum covering construction with a negative
/// capacity and lookups of untracked keys.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Cache metrics system.
///
/// Provides hit, miss, insertion, eviction, and removal counters together
/// with a reporting interface for cache performance monitoring.
pub mod metrics;

// Re-export the cache type
pub use lru::LruCache;

// Re-export entry type
pub use entry::CacheEntry;

// Re-export error types
pub use error::{CacheError, CacheResult};
