//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::{PolicyKind, DEFAULT_MAX_ITEMS};

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_items: usize,
    /// Eviction discipline of the shared cache
    pub policy: PolicyKind,
    /// HTTP server port
    pub server_port: u16,
    /// CSV file served by the pagination endpoint
    pub data_file: PathBuf,
    /// Page size used when a request does not give one
    pub page_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ITEMS` - Maximum cache entries (default: 4)
    /// - `CACHE_POLICY` - fifo, lifo, lru, mru or lfu (default: lru)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DATA_FILE` - CSV dataset path (default: Popular_Baby_Names.csv)
    /// - `PAGE_SIZE` - Default page size (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_items: parse_var("MAX_ITEMS").unwrap_or(defaults.max_items),
            policy: parse_var("CACHE_POLICY").unwrap_or(defaults.policy),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            data_file: env::var("DATA_FILE")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            page_size: parse_var("PAGE_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            policy: PolicyKind::Lru,
            server_port: 3000,
            data_file: PathBuf::from("Popular_Baby_Names.csv"),
            page_size: 10,
        }
    }
}
