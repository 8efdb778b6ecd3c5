//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Request body for the PUT operation (PUT /put)
///
/// Both fields may be `null` or missing, in which case the request is
/// accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PutRequest {
    /// The cache key
    #[serde(default)]
    pub key: Option<String>,
    /// The value to store
    #[serde(default)]
    pub value: Option<String>,
}

/// Query string for GET /pages
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// 1-indexed page number, defaults to 1
    pub page: Option<i64>,
    /// Rows per page, defaults to the configured page size
    pub page_size: Option<usize>,
}
