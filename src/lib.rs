//! Policy Cache - A bounded in-memory cache with pluggable eviction
//!
//! Provides FIFO, LIFO, LRU, MRU and LFU eviction behind one cache type,
//! plus an HTTP service and a pagination helper around it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod tasks;

pub use api::AppState;
pub use cache::{BasicCache, BoundedCache, EvictionPolicy, PolicyKind};
pub use config::Config;
pub use tasks::{forward_discards, spawn_discard_logger};
