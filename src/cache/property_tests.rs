//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check every policy against a brute-force reference model.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{BasicCache, BoundedCache, PolicyKind};

// == Strategies ==
/// Small key space so that sequences revisit keys and trigger evictions
fn key_strategy() -> impl Strategy<Value = u8> {
    0u8..8
}

fn value_strategy() -> impl Strategy<Value = u32> {
    any::<u32>()
}

fn policy_strategy() -> impl Strategy<Value = PolicyKind> {
    prop::sample::select(PolicyKind::ALL.to_vec())
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: u8, value: u32 },
    Get { key: u8 },
    PutNone { key: Option<u8>, value: Option<u32> },
    GetNone,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => prop_oneof![
            value_strategy().prop_map(|v| CacheOp::PutNone { key: None, value: Some(v) }),
            key_strategy().prop_map(|k| CacheOp::PutNone { key: Some(k), value: None }),
        ],
        1 => Just(CacheOp::GetNone),
    ]
}

// == Reference Model ==
/// Linear-scan cache that recomputes the victim from per-key timestamps.
#[derive(Debug)]
struct ModelEntry {
    key: u8,
    value: u32,
    inserted_at: u64,
    touched_at: u64,
    freq: u64,
    freq_since: u64,
}

struct ModelCache {
    kind: PolicyKind,
    capacity: usize,
    entries: Vec<ModelEntry>,
    clock: u64,
}

impl ModelCache {
    fn new(kind: PolicyKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            entries: Vec::new(),
            clock: 0,
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn access(&mut self, idx: usize) {
        let now = self.tick();
        let entry = &mut self.entries[idx];
        entry.touched_at = now;
        entry.freq += 1;
        entry.freq_since = now;
    }

    fn victim(&self) -> usize {
        let scored = self.entries.iter().enumerate();
        let idx = match self.kind {
            PolicyKind::Fifo => scored.min_by_key(|(_, e)| e.inserted_at),
            PolicyKind::Lifo => scored.max_by_key(|(_, e)| e.inserted_at),
            PolicyKind::Lru => scored.min_by_key(|(_, e)| e.touched_at),
            PolicyKind::Mru => scored.max_by_key(|(_, e)| e.touched_at),
            PolicyKind::Lfu => scored.min_by_key(|(_, e)| (e.freq, e.freq_since)),
        };
        idx.map(|(i, _)| i).unwrap()
    }

    fn put(&mut self, key: u8, value: u32) -> Option<u8> {
        if let Some(idx) = self.entries.iter().position(|e| e.key == key) {
            self.entries[idx].value = value;
            self.access(idx);
            return None;
        }
        let evicted = if self.entries.len() >= self.capacity {
            let idx = self.victim();
            Some(self.entries.remove(idx).key)
        } else {
            None
        };
        let now = self.tick();
        self.entries.push(ModelEntry {
            key,
            value,
            inserted_at: now,
            touched_at: now,
            freq: 1,
            freq_since: now,
        });
        evicted
    }

    fn get(&mut self, key: u8) -> Option<u32> {
        let idx = self.entries.iter().position(|e| e.key == key)?;
        self.access(idx);
        Some(self.entries[idx].value)
    }

    fn keys(&self) -> HashSet<u8> {
        self.entries.iter().map(|e| e.key).collect()
    }
}

fn cache_keys(cache: &BoundedCache<u8, u32>) -> HashSet<u8> {
    cache.entries().into_iter().map(|(k, _)| k).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Property: every policy picks the same victims as the reference model,
    // including the LFU oldest-in-bucket tie-break.
    #[test]
    fn prop_policy_matches_model(
        kind in policy_strategy(),
        capacity in 1usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let mut cache = BoundedCache::new(kind, capacity);
        let mut model = ModelCache::new(kind, capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    prop_assert_eq!(cache.put(key, value), model.put(key, value), "victim mismatch for {}", kind);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key), model.get(key));
                }
                CacheOp::PutNone { key, value } => {
                    prop_assert_eq!(cache.put_optional(key, value), None);
                }
                CacheOp::GetNone => {
                    prop_assert_eq!(cache.get_optional(None), None);
                }
            }
            prop_assert_eq!(cache_keys(&cache), model.keys());
        }
    }

    // Property: the cache never holds more than its capacity.
    #[test]
    fn prop_capacity_enforcement(
        kind in policy_strategy(),
        capacity in 1usize..6,
        entries in prop::collection::vec((any::<u16>(), value_strategy()), 1..200)
    ) {
        let mut cache = BoundedCache::new(kind, capacity);

        for (key, value) in entries {
            cache.put(key, value);
            prop_assert!(
                cache.len() <= capacity,
                "Cache size {} exceeds max {}",
                cache.len(),
                capacity
            );
        }
    }

    // Property: a value just stored is returned by the next lookup.
    #[test]
    fn prop_roundtrip_storage(
        kind in policy_strategy(),
        prefix in prop::collection::vec((key_strategy(), value_strategy()), 0..20),
        key in key_strategy(),
        value in value_strategy()
    ) {
        let mut cache = BoundedCache::new(kind, 4);
        for (k, v) in prefix {
            cache.put(k, v);
        }

        cache.put(key, value);
        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // Property: inputs without a key or value never change the size.
    #[test]
    fn prop_optional_inputs_never_change_size(
        kind in policy_strategy(),
        prefix in prop::collection::vec((key_strategy(), value_strategy()), 0..10),
        value in value_strategy(),
        key in key_strategy()
    ) {
        let mut cache = BoundedCache::new(kind, 4);
        for (k, v) in prefix {
            cache.put(k, v);
        }
        let before = cache.len();

        cache.put_optional(None, Some(value));
        cache.put_optional(Some(key), None);
        cache.get_optional(None);

        prop_assert_eq!(cache.len(), before);
    }

    // Property: repeated lookups of a present key never evict or resize.
    #[test]
    fn prop_repeated_get_is_idempotent_on_size(
        kind in policy_strategy(),
        keys in prop::collection::hash_set(key_strategy(), 1..5),
        repeats in 1usize..20
    ) {
        let mut cache = BoundedCache::new(kind, 4);
        let keys: Vec<u8> = keys.into_iter().collect();
        for key in &keys {
            cache.put(*key, u32::from(*key));
        }
        let before = cache_keys(&cache);

        for _ in 0..repeats {
            prop_assert!(cache.get(&keys[0]).is_some());
        }

        prop_assert_eq!(cache_keys(&cache), before);
        prop_assert_eq!(cache.stats().evictions, 0);
    }

    // Property: FIFO always evicts the first of capacity + 1 distinct inserts,
    // whatever lookups happened in between.
    #[test]
    fn prop_fifo_evicts_first_insert(
        capacity in 1usize..6,
        lookups in prop::collection::vec(0usize..6, 0..20)
    ) {
        let mut cache = BoundedCache::new(PolicyKind::Fifo, capacity);
        for key in 0..capacity {
            cache.put(key, key);
        }
        for idx in lookups {
            cache.get(&(idx % capacity));
        }

        prop_assert_eq!(cache.put(capacity, capacity), Some(0));
    }

    // Property: LIFO evicts the insert made just before the triggering one.
    #[test]
    fn prop_lifo_evicts_previous_insert(capacity in 1usize..6) {
        let mut cache = BoundedCache::new(PolicyKind::Lifo, capacity);
        for key in 0..capacity {
            cache.put(key, key);
        }

        prop_assert_eq!(cache.put(capacity, capacity), Some(capacity - 1));
    }

    // Property: the unbounded cache keeps every distinct key.
    #[test]
    fn prop_basic_cache_keeps_everything(
        entries in prop::collection::vec((any::<u16>(), value_strategy()), 1..100)
    ) {
        let mut cache = BasicCache::new();
        let distinct: HashSet<u16> = entries.iter().map(|(k, _)| *k).collect();

        for (key, value) in entries {
            cache.put(key, value);
        }

        prop_assert_eq!(cache.len(), distinct.len());
    }
}
