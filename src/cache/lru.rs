//! LRU Policy Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::fmt;
use std::hash::Hash;

use crate::cache::order::KeyList;
use crate::cache::policy::{EvictionPolicy, PolicyKind};

// == LRU Policy ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are stored in a [`KeyList`] where:
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
pub struct LruPolicy<K> {
    /// Order of keys by access time
    order: KeyList<K>,
}

impl<K: Eq + Hash + Clone> LruPolicy<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: KeyList::new(),
        }
    }

    // == Touch ==
    /// Marks a key as recently used (moves to front).
    ///
    /// If key is new, just adds to front.
    pub fn touch(&mut self, key: &K) {
        self.order.push_front(key.clone());
    }
}

impl<K: Eq + Hash + Clone> Default for LruPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug> EvictionPolicy<K> for LruPolicy<K> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn on_insert(&mut self, key: &K) {
        self.touch(key);
    }

    fn on_access(&mut self, key: &K) {
        self.order.move_to_front(key);
    }

    fn select_victim(&self) -> Option<&K> {
        self.order.back()
    }

    fn remove(&mut self, key: &K) {
        self.order.remove(key);
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn eviction_order(&self) -> Vec<K> {
        let mut keys: Vec<K> = self.order.iter().cloned().collect();
        keys.reverse();
        keys
    }
}
