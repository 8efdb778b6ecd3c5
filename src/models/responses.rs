//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, PolicyKind};
use crate::pagination::Row;

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the PUT operation (PUT /put)
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// Outcome message
    pub message: String,
    /// The key that was stored, absent when the request was ignored
    pub key: Option<String>,
    /// Key discarded to make room, if any
    pub evicted: Option<String>,
}

impl PutResponse {
    /// The key was stored, possibly evicting another one.
    pub fn stored(key: impl Into<String>, evicted: Option<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' stored successfully", key),
            key: Some(key),
            evicted,
        }
    }

    /// The request carried no key or no value.
    pub fn ignored() -> Self {
        Self {
            message: "Missing key or value, nothing stored".to_string(),
            key: None,
            evicted: None,
        }
    }
}

/// One entry of the GET /cache listing
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub key: String,
    pub value: String,
}

/// Response body for GET /cache
#[derive(Debug, Clone, Serialize)]
pub struct CacheResponse {
    pub policy: PolicyKind,
    pub capacity: usize,
    /// Entries ordered from next victim to last victim
    pub entries: Vec<EntryView>,
}

impl CacheResponse {
    pub fn new(policy: PolicyKind, capacity: usize, entries: Vec<(String, String)>) -> Self {
        Self {
            policy,
            capacity,
            entries: entries
                .into_iter()
                .map(|(key, value)| EntryView { key, value })
                .collect(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Eviction discipline in use
    pub policy: PolicyKind,
    /// Counters reported by the cache
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(policy: PolicyKind, stats: CacheStats) -> Self {
        Self {
            policy,
            hit_rate: stats.hit_rate(),
            stats,
        }
    }
}

/// Response body for the pagination endpoint (GET /pages)
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub page: i64,
    pub page_size: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub data: Vec<Row>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
