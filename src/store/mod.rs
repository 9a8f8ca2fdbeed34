//! Store Adapter Module
//!
//! Keyed byte storage with per-key passive expiry and size introspection.
//! The cache engine only talks to storage through [`StoreAdapter`].

mod entry;
mod memory;

pub use entry::{current_timestamp_ms, StoredValue};
pub use memory::MemoryStore;

use tracing::info;

use crate::error::{CacheError, Result};

// == Store Adapter ==
/// Primitive operations the cache engine consumes from its backing store.
///
/// Expired keys must be invisible to every read. Implementations own expiry;
/// callers never scan for stale keys themselves.
pub trait StoreAdapter {
    /// Verifies the backend is reachable.
    fn ping(&self) -> Result<()>;

    /// Returns the stored bytes, or `None` if the key is absent or expired.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any previous value, expiring after `ttl_secs`.
    fn set(&mut self, key: &str, value: Vec<u8>, ttl_secs: u64) -> Result<()>;

    /// Removes a key. Returns whether it was present.
    fn delete(&mut self, key: &str) -> Result<bool>;

    /// Removes several keys as one unit: either every key is gone afterwards
    /// or none was touched. Returns how many were live.
    fn delete_many(&mut self, keys: &[&str]) -> Result<usize>;

    /// Lists live keys starting with `prefix`, in a stable order.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    /// Memory footprint of the stored value in bytes.
    fn size_of(&self, key: &str) -> Result<Option<u64>>;

    /// Whole seconds left before `key` expires. `None` if absent or persistent.
    fn ttl_remaining(&self, key: &str) -> Result<Option<u64>>;

    /// Resets the countdown of an existing key. Returns whether the key was live.
    fn expire(&mut self, key: &str, ttl_secs: u64) -> Result<bool>;
}

// == Connect ==
/// Checks that `store` answers before the cache is built on top of it.
///
/// Any ping failure surfaces as [`CacheError::ConnectionFailure`], which is
/// fatal at startup.
pub fn connect<S: StoreAdapter>(store: &S) -> Result<()> {
    store
        .ping()
        .map_err(|e| CacheError::ConnectionFailure(e.to_string()))?;
    info!("Cache store reachable");
    Ok(())
}
