//! Error types for the cache simulator
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache simulator.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing store could not be reached at startup
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    /// Resource does not exist or cannot be read
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or out-of-bounds input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Backend failure reported by the store adapter
    #[error("Store error: {0}")]
    Store(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::ConnectionFailure(_) => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CacheError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache simulator.
pub type Result<T> = std::result::Result<T, CacheError>;
