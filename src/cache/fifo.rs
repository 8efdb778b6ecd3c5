//! FIFO Policy Module
//!
//! Evicts the key that was inserted first. Accesses never reorder.

use std::fmt;
use std::hash::Hash;

use crate::cache::order::KeyList;
use crate::cache::policy::{EvictionPolicy, PolicyKind};

// == FIFO Policy ==
/// Tracks insertion order.
///
/// - Front = oldest insert (next victim)
/// - Back = newest insert
#[derive(Debug)]
pub struct FifoPolicy<K> {
    order: KeyList<K>,
}

impl<K: Eq + Hash + Clone> FifoPolicy<K> {
    pub fn new() -> Self {
        Self {
            order: KeyList::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Default for FifoPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug> EvictionPolicy<K> for FifoPolicy<K> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn on_insert(&mut self, key: &K) {
        self.order.push_back(key.clone());
    }

    fn on_access(&mut self, _key: &K) {}

    fn select_victim(&self) -> Option<&K> {
        self.order.front()
    }

    fn remove(&mut self, key: &K) {
        self.order.remove(key);
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn eviction_order(&self) -> Vec<K> {
        self.order.iter().cloned().collect()
    }
}
