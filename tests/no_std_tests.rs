#![no_std]
#![allow(missing_docs)]
extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::hash::Hash;
use lru_rs::config::LruCacheConfig;
use lru_rs::{CacheError, LruCache};

// Helper function to create a cache with the init pattern
fn make_lru<K: Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig { capacity: cap };
    LruCache::init(config, None)
}

#[test]
fn test_lru_in_no_std() {
    let mut cache = make_lru(2);

    // Using String as it requires the alloc crate
    let key1 = String::from("key1");
    let key2 = String::from("key2");
    let key3 = String::from("key3");

    cache.put(key1.clone(), 1);
    cache.put(key2.clone(), 2);

    // Check if keys are present
    assert_eq!(*cache.get(&key1).unwrap(), 1);
    assert_eq!(*cache.get(&key2).unwrap(), 2);

    // This should evict key1
    cache.put(key3.clone(), 3);

    assert!(cache.get(&key1).is_err());
    assert_eq!(*cache.get(&key2).unwrap(), 2);
    assert_eq!(*cache.get(&key3).unwrap(), 3);
}

#[test]
fn test_remove_and_clear_in_no_std() {
    let mut cache = make_lru(4);

    cache.put(String::from("a"), 1);
    cache.put(String::from("b"), 2);

    assert_eq!(cache.remove("a"), Ok(1));
    assert_eq!(cache.remove("a"), Err(CacheError::KeyNotFound));
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_error_formatting_in_no_std() {
    // Display only needs core + alloc
    assert_eq!(
        CacheError::KeyNotFound.to_string(),
        "No such element in cache"
    );
    assert_eq!(
        CacheError::NegativeCapacity(-5).to_string(),
        "Capacity should not be negative: -5"
    );
}

#[test]
fn test_complex_types_in_no_std() {
    // Test with more complex types that require alloc
    let mut cache = make_lru(2);

    let key1 = Vec::<u8>::from([1, 2, 3]);
    let value1 = Vec::<i32>::from([10, 20, 30]);

    let key2 = Vec::<u8>::from([4, 5, 6]);
    let value2 = Vec::<i32>::from([40, 50, 60]);

    cache.put(key1.clone(), value1.clone());
    cache.put(key2.clone(), value2.clone());

    assert_eq!(*cache.get(&key1).unwrap(), value1);
    assert_eq!(*cache.get(&key2).unwrap(), value2);
}
