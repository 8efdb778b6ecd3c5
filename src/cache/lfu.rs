//! LFU Policy Module
//!
//! Evicts the key with the lowest access count. Keys sharing a count sit in
//! the same frequency bucket, and the one that has held that count longest
//! is evicted first.
//!
//! ```text
//! freq=1: [d] ◄──► [e]          ◄── min_freq, victim = d
//! freq=3: [a] ◄──► [c]
//! freq=4: [b]
//! ```
//!
//! An access moves the key from bucket `n` to the back of bucket `n + 1`.
//! Buckets that become empty are dropped immediately.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::cache::order::KeyList;
use crate::cache::policy::{EvictionPolicy, PolicyKind};

// == LFU Policy ==
/// Frequency-bucketed LFU tracker with oldest-in-bucket tie-break.
#[derive(Debug)]
pub struct LfuPolicy<K> {
    /// Frequency to keys holding it, oldest first
    buckets: HashMap<u64, KeyList<K>>,
    /// Current frequency of every tracked key
    frequencies: HashMap<K, u64>,
    /// Lowest non-empty bucket, `None` when it has to be recomputed
    min_freq: Option<u64>,
}

impl<K: Eq + Hash + Clone> LfuPolicy<K> {
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            frequencies: HashMap::new(),
            min_freq: None,
        }
    }

    // == Frequency ==
    /// Returns the access count of `key`, if tracked.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.frequencies.get(key).copied()
    }

    fn lowest_bucket(&self) -> Option<u64> {
        self.min_freq.or_else(|| self.buckets.keys().min().copied())
    }

    /// Removes `key` from the bucket for `freq`, dropping the bucket if empty.
    /// Returns true if the bucket was dropped.
    fn unlink(&mut self, key: &K, freq: u64) -> bool {
        let Some(bucket) = self.buckets.get_mut(&freq) else {
            return false;
        };
        bucket.remove(key);
        if bucket.is_empty() {
            self.buckets.remove(&freq);
            return true;
        }
        false
    }
}

impl<K: Eq + Hash + Clone> Default for LfuPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug> EvictionPolicy<K> for LfuPolicy<K> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }

    fn on_insert(&mut self, key: &K) {
        if self.frequencies.contains_key(key) {
            self.on_access(key);
            return;
        }
        self.frequencies.insert(key.clone(), 1);
        self.buckets.entry(1).or_default().push_back(key.clone());
        self.min_freq = Some(1);
    }

    fn on_access(&mut self, key: &K) {
        let Some(freq) = self.frequencies.get_mut(key) else {
            return;
        };
        let old = *freq;
        let new = old + 1;
        *freq = new;

        let dropped = self.unlink(key, old);
        self.buckets.entry(new).or_default().push_back(key.clone());

        if dropped && self.min_freq == Some(old) {
            self.min_freq = Some(new);
        }
    }

    fn select_victim(&self) -> Option<&K> {
        let freq = self.lowest_bucket()?;
        let bucket = self.buckets.get(&freq);
        debug_assert!(
            bucket.map_or(false, |b| !b.is_empty()),
            "lowest frequency bucket {} must be non-empty",
            freq
        );
        bucket?.front()
    }

    fn remove(&mut self, key: &K) {
        let Some(freq) = self.frequencies.remove(key) else {
            return;
        };
        if self.unlink(key, freq) && self.min_freq == Some(freq) {
            self.min_freq = None;
        }
    }

    fn len(&self) -> usize {
        self.frequencies.len()
    }

    fn eviction_order(&self) -> Vec<K> {
        let mut freqs: Vec<u64> = self.buckets.keys().copied().collect();
        freqs.sort_unstable();
        freqs
            .into_iter()
            .filter_map(|freq| self.buckets.get(&freq))
            .flat_map(|bucket| bucket.iter().cloned())
            .collect()
    }
}
