//! Cache Module
//!
//! Provides a bounded in-memory cache with pluggable eviction policies.

mod basic;
mod fifo;
mod lfu;
mod lifo;
mod lru;
mod mru;
mod order;
mod policy;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use basic::BasicCache;
pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lifo::LifoPolicy;
pub use lru::LruPolicy;
pub use mru::MruPolicy;
pub use order::KeyList;
pub use policy::{EvictionPolicy, PolicyKind};
pub use stats::CacheStats;
pub use store::{BoundedCache, EvictionListener};

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_MAX_ITEMS: usize = 4;
