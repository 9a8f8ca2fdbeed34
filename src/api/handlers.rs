//! API Handlers
//!
//! HTTP request handlers, one per simulator command.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};

use crate::cache::{AccessResult, CacheEngine, CacheSummary};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::loader::FsLoader;
use crate::models::{
    AccessRequest, ClearResponse, EntriesResponse, EvictionsResponse, HealthResponse,
    ResizeRequest, ResizeResponse,
};
use crate::store::MemoryStore;

/// Engine type served over HTTP.
pub type FileCache = CacheEngine<MemoryStore, FsLoader>;

/// Application state shared across all handlers.
///
/// Mutating commands take the write lock for their whole duration, so an
/// eviction pass never interleaves with another operation.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache engine
    pub cache: Arc<RwLock<FileCache>>,
}

impl AppState {
    /// Creates a new AppState with the given engine.
    pub fn new(cache: FileCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration over the given store.
    pub fn from_config(config: &Config, store: MemoryStore) -> Result<Self> {
        let loader = FsLoader::new(config.resource_root.clone());
        let cache =
            CacheEngine::with_capacity(store, loader, config.capacity_bytes, config.default_ttl)?;
        Ok(Self::new(cache))
    }
}

/// Handler for POST /access
///
/// Serves a file through the cache, reporting HIT or MISS. The access reads
/// from disk, so it runs on the blocking pool while holding an owned write guard.
pub async fn access_handler(
    State(state): State<AppState>,
    Json(req): Json<AccessRequest>,
) -> Result<Json<AccessResult>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidArgument(error_msg));
    }

    let mut cache = state.cache.clone().write_owned().await;
    let result = tokio::task::spawn_blocking(move || cache.access(&req.path, req.ttl))
        .await
        .map_err(|e| CacheError::Store(format!("access task failed: {}", e)))??;

    Ok(Json(result))
}

/// Handler for GET /entries
///
/// Lists cached files without touching their recency.
pub async fn entries_handler(State(state): State<AppState>) -> Result<Json<EntriesResponse>> {
    let cache = state.cache.read().await;
    let entries = cache.list_entries()?;

    Ok(Json(EntriesResponse {
        entries,
        space: cache.space(),
    }))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheSummary> {
    let cache = state.cache.read().await;
    Json(cache.summary())
}

/// Handler for GET /evictions
pub async fn evictions_handler(State(state): State<AppState>) -> Json<EvictionsResponse> {
    let cache = state.cache.read().await;
    Json(EvictionsResponse {
        evictions: cache.evictions(),
    })
}

/// Handler for PUT /capacity
pub async fn resize_handler(
    State(state): State<AppState>,
    Json(req): Json<ResizeRequest>,
) -> Result<Json<ResizeResponse>> {
    let mut cache = state.cache.write().await;
    let outcome = cache.resize(&req.value.as_text(), req.unit)?;

    Ok(Json(ResizeResponse::new(outcome, req.unit)))
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Result<Json<ClearResponse>> {
    let mut cache = state.cache.write().await;
    let removed = cache.clear()?;

    Ok(Json(ClearResponse::new(removed)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
