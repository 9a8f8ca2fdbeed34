//! In-Memory Store Module
//!
//! Ordered map storage with passive TTL expiration.

use std::collections::BTreeMap;

use tracing::debug;

use super::{StoreAdapter, StoredValue};
use crate::error::Result;

// == Memory Store ==
/// In-process [`StoreAdapter`] backed by a sorted map.
///
/// Expired values stay in the map until the next write but are never
/// returned by a read.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage, sorted so enumeration order is deterministic
    entries: BTreeMap<String, StoredValue>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn live(&self, key: &str) -> Option<&StoredValue> {
        self.entries.get(key).filter(|value| !value.is_expired())
    }

    // == Purge Expired ==
    /// Drops every expired value. Returns the number removed.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, value| !value.is_expired());
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(removed, "Purged expired store values");
        }
        removed
    }

    // == Length ==
    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.entries.values().filter(|v| !v.is_expired()).count()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StoreAdapter for MemoryStore {
    fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.live(key).map(|value| value.data.clone()))
    }

    fn set(&mut self, key: &str, value: Vec<u8>, ttl_secs: u64) -> Result<()> {
        self.purge_expired();
        self.entries
            .insert(key.to_string(), StoredValue::new(value, Some(ttl_secs)));
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        let was_live = self.live(key).is_some();
        self.entries.remove(key);
        Ok(was_live)
    }

    fn delete_many(&mut self, keys: &[&str]) -> Result<usize> {
        let removed = keys
            .iter()
            .filter(|key| self.live(key).is_some())
            .count();
        for key in keys {
            self.entries.remove(*key);
        }
        Ok(removed)
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .filter(|(_, value)| !value.is_expired())
            .map(|(key, _)| key.clone())
            .collect())
    }

    fn size_of(&self, key: &str) -> Result<Option<u64>> {
        Ok(self.live(key).map(StoredValue::size))
    }

    fn ttl_remaining(&self, key: &str) -> Result<Option<u64>> {
        Ok(self.live(key).and_then(StoredValue::ttl_remaining))
    }

    fn expire(&mut self, key: &str, ttl_secs: u64) -> Result<bool> {
        match self.entries.get_mut(key) {
            Some(value) if !value.is_expired() => {
                value.rearm(ttl_secs);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
