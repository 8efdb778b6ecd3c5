//! Background Tasks Module
//!
//! Contains background tasks that run during server operation.
//!
//! # Tasks
//! - Discard logger: Reports every key the cache evicts

mod discard;

pub use discard::{forward_discards, spawn_discard_logger};
