//! LIFO Policy Module
//!
//! Evicts the key inserted most recently before the incoming one.

use std::fmt;
use std::hash::Hash;

use crate::cache::order::KeyList;
use crate::cache::policy::{EvictionPolicy, PolicyKind};

// == LIFO Policy ==
/// Tracks insertion order as a stack.
///
/// - Front = oldest insert
/// - Back = newest insert (next victim)
#[derive(Debug)]
pub struct LifoPolicy<K> {
    order: KeyList<K>,
}

impl<K: Eq + Hash + Clone> LifoPolicy<K> {
    pub fn new() -> Self {
        Self {
            order: KeyList::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Default for LifoPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug> EvictionPolicy<K> for LifoPolicy<K> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lifo
    }

    fn on_insert(&mut self, key: &K) {
        self.order.push_back(key.clone());
    }

    fn on_access(&mut self, _key: &K) {}

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
