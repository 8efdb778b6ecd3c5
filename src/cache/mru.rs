//! MRU Policy Module
//!
//! Evicts the key used most recently. Useful for cyclic scans where the
//! entry just touched is the one least likely to be needed again soon.

use std::fmt;
use std::hash::Hash;

use crate::cache::order::KeyList;
use crate::cache::policy::{EvictionPolicy, PolicyKind};

// == MRU Policy ==
/// Tracks access order, evicting from the recent end.
///
/// - Front = Most recently used (next victim)
/// - Back = Least recently used
#[derive(Debug)]
pub struct MruPolicy<K> {
    order: KeyList<K>,
}

impl<K: Eq + Hash + Clone> MruPolicy<K> {
    pub fn new() -> Self {
        Self {
            order: KeyList::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Default for MruPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug> EvictionPolicy<K> for MruPolicy<K> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Mru
    }

    fn on_insert(&mut self, key: &K) {
        self.order.push_front(key.clone());
    }

    fn on_access(&mut self, key: &K) {
        self.order.move_to_front(key);
    }

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
