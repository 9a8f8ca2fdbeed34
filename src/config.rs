//! Configuration Module
//!
//! Handles loading and managing simulator configuration from environment variables.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::cache::{DEFAULT_TTL, MAX_CAPACITY, MIN_CAPACITY};

const DEFAULT_PORT: u16 = 3000;

/// Simulator configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial cache capacity in bytes
    pub capacity_bytes: u64,
    /// Default TTL in seconds for accesses without explicit TTL
    pub default_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Directory resource paths are resolved against
    pub resource_root: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Initial capacity in bytes (default: 40 MiB)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `RESOURCE_ROOT` - Directory files are read from (default: `.`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity_bytes: capacity_from(env::var("CACHE_CAPACITY").ok()),
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.default_ttl),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            resource_root: env::var("RESOURCE_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.resource_root),
        }
    }
}

/// Parses a capacity, falling back to the maximum when absent or out of range.
fn capacity_from(raw: Option<String>) -> u64 {
    let Some(raw) = raw else {
        return MAX_CAPACITY;
    };
    match raw.trim().parse::<u64>() {
        Ok(bytes) if (MIN_CAPACITY..=MAX_CAPACITY).contains(&bytes) => bytes,
        _ => {
            warn!(
                value = %raw,
                min = MIN_CAPACITY,
                max = MAX_CAPACITY,
                "CACHE_CAPACITY is invalid or out of range, using the maximum"
            );
            MAX_CAPACITY
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity_bytes: MAX_CAPACITY,
            default_ttl: DEFAULT_TTL,
            server_port: DEFAULT_PORT,
            resource_root: PathBuf::from("."),
        }
    }
}
