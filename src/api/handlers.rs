//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::cache::BoundedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    CacheResponse, GetResponse, HealthResponse, PageQuery, PageResponse, PutRequest,
    PutResponse, StatsResponse,
};
use crate::pagination::{index_range, Dataset};

/// Cache instance shared by all handlers.
pub type SharedCache = Arc<Mutex<BoundedCache<String, String>>>;

/// Application state shared across all handlers.
///
/// The cache is a single-owner structure, so every handler holds the mutex
/// for the whole of its `put` or `get`.
#[derive(Clone)]
pub struct AppState {
    /// Mutex-guarded cache
    pub cache: SharedCache,
    /// Rows served by the pagination endpoint
    pub dataset: Arc<Dataset>,
    /// Page size used when a request does not give one
    pub page_size: usize,
}

impl AppState {
    /// Creates a new AppState with the given cache and dataset.
    pub fn new(cache: BoundedCache<String, String>, dataset: Dataset, page_size: usize) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
            dataset: Arc::new(dataset),
            page_size: page_size.max(1),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = BoundedCache::new(config.policy, config.max_items);
        let dataset = Dataset::from_path(&config.data_file);
        Self::new(cache, dataset, config.page_size)
    }
}

/// Handler for PUT /put
///
/// Stores a key-value pair. A request without key or value is a no-op.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    let (Some(key), Some(value)) = (req.key, req.value) else {
        debug!("put without key or value ignored");
        return Ok(Json(PutResponse::ignored()));
    };

    let evicted = {
        let mut cache = state.cache.lock().await;
        cache.put(key.clone(), value)
    };

    Ok(Json(PutResponse::stored(key, evicted)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state.cache.lock().await.get(&key);

    match value {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for GET /cache
///
/// Lists current entries, next victim first. Not an access.
pub async fn cache_handler(State(state): State<AppState>) -> Json<CacheResponse> {
    let cache = state.cache.lock().await;

    Json(CacheResponse::new(
        cache.policy_kind(),
        cache.capacity(),
        cache.entries(),
    ))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.lock().await;

    Json(StatsResponse::new(cache.policy_kind(), cache.stats()))
}

/// Handler for GET /pages
///
/// Returns one page of the dataset.
pub async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse>> {
    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(state.page_size);

    let data = state.dataset.get_page(page, page_size).await?;
    let (start_index, end_index) = index_range(page, page_size);

    Ok(Json(PageResponse {
        page,
        page_size,
        start_index,
        end_index,
        data,
    }))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
