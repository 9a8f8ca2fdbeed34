//! File Cache Simulator - A bounded content cache with sliding TTL and LRU eviction
//!
//! Models how a disk-file cache behaves under a memory budget: capacity
//! enforcement, LRU eviction, sliding expiration and hit/miss accounting.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod store;

pub use api::AppState;
pub use cache::CacheEngine;
pub use config::Config;
pub use error::CacheError;
