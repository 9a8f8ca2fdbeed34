//! Metadata Ledger Module
//!
//! Per-entry bookkeeping (size, last access) stored next to each cached blob.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cache::{CACHE_PREFIX, METADATA_PREFIX};
use crate::error::{CacheError, Result};
use crate::store::StoreAdapter;

// == Keys ==
/// Store key holding the content of `name`.
pub fn content_key(name: &str) -> String {
    format!("{}{}", CACHE_PREFIX, name)
}

/// Store key holding the metadata of `name`.
pub fn metadata_key(name: &str) -> String {
    format!("{}{}", METADATA_PREFIX, name)
}

// == Entry Metadata ==
/// Bookkeeping record persisted as JSON under `meta:<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMetadata {
    /// Last time the entry was inserted or hit
    pub last_access: DateTime<Utc>,
    /// Content size in bytes
    pub size: u64,
}

impl EntryMetadata {
    /// Metadata for an entry accessed right now.
    pub fn touched(size: u64) -> Self {
        Self {
            last_access: Utc::now(),
            size,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| CacheError::Store(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| CacheError::Store(e.to_string()))
    }
}

// == Read / Write ==
/// Loads the metadata of `name`, if present.
pub fn read_metadata<S: StoreAdapter>(store: &S, name: &str) -> Result<Option<EntryMetadata>> {
    store
        .get(&metadata_key(name))?
        .map(|bytes| EntryMetadata::decode(&bytes))
        .transpose()
}

/// Persists the metadata of `name` with the same TTL as its content.
pub fn write_metadata<S: StoreAdapter>(
    store: &mut S,
    name: &str,
    metadata: &EntryMetadata,
    ttl_secs: u64,
) -> Result<()> {
    store.set(&metadata_key(name), metadata.encode()?, ttl_secs)
}

// == Live Entries ==
/// A cached entry as seen through the ledger.
///
/// `metadata` is `None` when the record expired ahead of its content or
/// could not be read.
#[derive(Debug, Clone)]
pub struct LiveEntry {
    pub name: String,
    pub metadata: Option<EntryMetadata>,
}

impl LiveEntry {
    /// Size charged against capacity for this entry.
    ///
    /// Falls back to the store's own measurement when metadata is missing;
    /// a failing measurement counts as zero.
    pub fn size<S: StoreAdapter>(&self, store: &S) -> u64 {
        if let Some(metadata) = self.metadata {
            return metadata.size;
        }
        match store.size_of(&content_key(&self.name)) {
            Ok(size) => size.unwrap_or(0),
            Err(e) => {
                warn!(key = %self.name, error = %e, "Could not measure entry size, counting it as zero");
                0
            }
        }
    }
}

/// Enumerates every live entry in store key order.
pub fn live_entries<S: StoreAdapter>(store: &S) -> Result<Vec<LiveEntry>> {
    let keys = store.keys_with_prefix(CACHE_PREFIX)?;
    let entries = keys
        .into_iter()
        .filter_map(|key| key.strip_prefix(CACHE_PREFIX).map(str::to_string))
        .map(|name| {
            let metadata = match read_metadata(store, &name) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(key = %name, error = %e, "Unreadable entry metadata");
                    None
                }
            };
            LiveEntry { name, metadata }
        })
        .collect();
    Ok(entries)
}
