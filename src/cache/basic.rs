//! Basic Cache Module
//!
//! Unbounded cache with the same null-tolerant contract as [`BoundedCache`],
//! but no capacity and therefore no eviction.
//!
//! [`BoundedCache`]: crate::cache::BoundedCache

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::CacheStats;

// == Basic Cache ==
/// Plain key-value store that never discards anything.
#[derive(Debug)]
pub struct BasicCache<K, V> {
    entries: HashMap<K, V>,
    stats: CacheStats,
}

impl<K: Eq + Hash, V: Clone> BasicCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    /// Stores a key-value pair, replacing any previous value.
    pub fn put(&mut self, key: K, value: V) {
        if self.entries.insert(key, value).is_some() {
            self.stats.record_update();
        } else {
            self.stats.record_insertion();
        }
    }

    /// Like [`put`](Self::put), but a missing key or value is a silent no-op.
    pub fn put_optional(&mut self, key: Option<K>, value: Option<V>) {
        if let (Some(key), Some(value)) = (key, value) {
            self.put(key, value);
        }
    }

    /// Returns a copy of the value stored under `key`.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let value = self.entries.get(key).cloned();
        if value.is_some() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        value
    }

    /// Like [`get`](Self::get), but a missing key is a miss.
    pub fn get_optional(&mut self, key: Option<&K>) -> Option<V> {
        match key {
            Some(key) => self.get(key),
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for BasicCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_cache_grows_without_limit() {
        let mut cache = BasicCache::new();
        for i in 0..100 {
            cache.put(i, i * 2);
        }

        assert_eq!(cache.len(), 100);
        assert_eq!(cache.get(&0), Some(0));
        assert_eq!(cache.get(&99), Some(198));
    }

    #[test]
    fn test_basic_cache_overwrite() {
        let mut cache = BasicCache::new();
        cache.put("a", "hello");
        cache.put("a", "world");

        assert_eq!(cache.get(&"a"), Some("world"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().updates, 1);
    }

    #[test]
    fn test_basic_cache_optional_inputs() {
        let mut cache: BasicCache<&str, &str> = BasicCache::new();
        cache.put_optional(None, Some("value"));
        cache.put_optional(Some("key"), None);

        assert!(cache.is_empty());
        assert_eq!(cache.get_optional(None), None);
        assert_eq!(cache.get(&"key"), None);
        assert_eq!(cache.stats().misses, 2);
    }
}
