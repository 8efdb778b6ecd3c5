//! Bounded Cache Module
//!
//! Main cache engine combining HashMap storage with a pluggable eviction policy.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{CacheStats, EvictionPolicy, PolicyKind, DEFAULT_MAX_ITEMS};

/// Callback invoked with the key of every evicted entry.
pub type EvictionListener<K> = Box<dyn FnMut(&K) + Send>;

// == Bounded Cache ==
/// Fixed-capacity key-value cache.
///
/// The store never holds more than `max_items` entries. When a new key
/// arrives at a full cache, the policy picks exactly one victim, which is
/// removed and handed to every registered listener before the new entry
/// goes in.
pub struct BoundedCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Eviction bookkeeping, tracks exactly the keys in `entries`
    policy: Box<dyn EvictionPolicy<K> + Send>,
    /// Discard notification sinks
    listeners: Vec<EvictionListener<K>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_items: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty cache using the given policy kind.
    ///
    /// # Arguments
    /// * `kind` - Eviction discipline
    /// * `max_items` - Capacity, clamped to at least 1
    pub fn new(kind: PolicyKind, max_items: usize) -> Self {
        Self::with_policy(kind.build(), max_items)
    }

    /// Creates an empty cache around an existing policy instance.
    pub fn with_policy(policy: Box<dyn EvictionPolicy<K> + Send>, max_items: usize) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
            listeners: Vec::new(),
            stats: CacheStats::new(),
            max_items: max_items.max(1),
        }
    }

    // == Eviction Listener ==
    /// Registers a callback fired synchronously from `put` on every eviction.
    pub fn on_evict<F>(&mut self, listener: F)
    where
        F: FnMut(&K) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// An existing key has its value replaced and counts as an access.
    /// A new key arriving at a full cache evicts one entry first.
    ///
    /// Returns the evicted key, if any.
    pub fn put(&mut self, key: K, value: V) -> Option<K> {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            self.policy.on_access(&key);
            self.stats.record_update();
            debug!(key = ?key, "updated entry");
            return None;
        }

        let evicted = if self.entries.len() >= self.max_items {
            self.evict()
        } else {
            None
        };

        self.policy.on_insert(&key);
        debug!(key = ?key, "inserted entry");
        self.entries.insert(key, value);
        self.stats.record_insertion();
        self.stats.set_total_entries(self.entries.len());

        evicted
    }

    /// Like [`put`](Self::put), but a missing key or value is a silent no-op.
    pub fn put_optional(&mut self, key: Option<K>, value: Option<V>) -> Option<K> {
        match (key, value) {
            (Some(key), Some(value)) => self.put(key, value),
            _ => None,
        }
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// A hit counts as an access for the policy; a miss changes nothing
    /// but the miss counter.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.get(key).cloned() {
            Some(value) => {
                self.stats.record_hit();
                self.policy.on_access(key);
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
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

    fn evict(&mut self) -> Option<K> {
        let victim = self.policy.select_victim().cloned();
        let Some(victim) = victim else {
            debug_assert!(self.entries.is_empty(), "full cache without a victim");
            return None;
        };

        self.policy.remove(&victim);
        self.entries.remove(&victim);
        self.stats.record_eviction();

        debug!(key = ?victim, policy = %self.policy.kind(), "evicted entry");
        for listener in &mut self.listeners {
            listener(&victim);
        }

        Some(victim)
    }

    // == Inspection ==
    /// Returns true if `key` is stored. Does not count as an access.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Snapshot of all entries, next victim first.
    pub fn entries(&self) -> Vec<(K, V)> {
        self.policy
            .eviction_order()
            .into_iter()
            .filter_map(|key| {
                let value = self.entries.get(&key)?.clone();
                Some((key, value))
            })
            .collect()
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    pub fn capacity(&self) -> usize {
        self.max_items
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for BoundedCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
    V: Clone,
{
    fn default() -> Self {
        Self::new(PolicyKind::default(), DEFAULT_MAX_ITEMS)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BoundedCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedCache")
            .field("entries", &self.entries)
            .field("policy", &self.policy)
            .field("listeners", &self.listeners.len())
            .field("stats", &self.stats)
            .field("max_items", &self.max_items)
            .finish()
    }
}
