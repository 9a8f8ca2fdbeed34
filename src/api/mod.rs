//! API Module
//!
//! HTTP handlers and routing for the cache simulator.
//!
//! # Endpoints
//! - `POST /access` - Access a file through the cache
//! - `GET /entries` - List cached files
//! - `GET /stats` - Statistics and space usage
//! - `GET /evictions` - Recent eviction history
//! - `PUT /capacity` - Adjust cache size
//! - `DELETE /cache` - Clear the cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
