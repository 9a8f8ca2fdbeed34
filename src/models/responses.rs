//! Response DTOs for the cache simulator API
//!
//! Defines the structure of outgoing HTTP response bodies. Access results,
//! summaries and eviction records serialize directly from the cache types.

use serde::Serialize;

use crate::cache::{EntryInfo, EvictionRecord, ResizeOutcome, SizeUnit, SpaceInfo};

/// Response body for GET /entries
#[derive(Debug, Clone, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<EntryInfo>,
    pub space: SpaceInfo,
}

/// Response body for GET /evictions
#[derive(Debug, Clone, Serialize)]
pub struct EvictionsResponse {
    pub evictions: Vec<EvictionRecord>,
}

/// Response body for PUT /capacity
#[derive(Debug, Clone, Serialize)]
pub struct ResizeResponse {
    pub message: String,
    #[serde(flatten)]
    pub outcome: ResizeOutcome,
}

impl ResizeResponse {
    pub fn new(outcome: ResizeOutcome, unit: SizeUnit) -> Self {
        Self {
            message: format!(
                "Cache size adjusted to {}",
                unit.format(outcome.capacity_bytes)
            ),
            outcome,
        }
    }
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub removed: usize,
}

impl ClearResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Cache emptied, {} entries removed", removed),
            removed,
        }
    }
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
