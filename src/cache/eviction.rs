//! Eviction Policy Module
//!
//! Strict LRU eviction over the metadata ledger, with a bounded history.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::cache::ledger::{content_key, live_entries, metadata_key, LiveEntry};
use crate::cache::{CapacityManager, EVICTION_LOG_LIMIT};
use crate::error::Result;
use crate::store::StoreAdapter;

/// Reason attached to every LRU eviction.
pub const EVICTION_REASON: &str = "capacity exceeded";

// == Eviction Record ==
/// One removed entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvictionRecord {
    pub key: String,
    pub freed_bytes: u64,
    pub evicted_at: DateTime<Utc>,
    pub reason: String,
}

// == Eviction Log ==
/// Most recent evictions, newest first.
///
/// Holds at most [`EVICTION_LOG_LIMIT`] records; older ones are dropped.
#[derive(Debug, Clone, Default)]
pub struct EvictionLog {
    records: VecDeque<EvictionRecord>,
}

impl EvictionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a record and drops anything past the limit.
    pub fn push(&mut self, record: EvictionRecord) {
        self.records.push_front(record);
        self.records.truncate(EVICTION_LOG_LIMIT);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvictionRecord> {
        self.records.iter()
    }

    pub fn to_vec(&self) -> Vec<EvictionRecord> {
        self.records.iter().cloned().collect()
    }
}

// == LRU Selection ==
/// Index of the least recently used entry.
///
/// Entries without metadata rank oldest. Ties go to the first entry.
pub fn select_lru(entries: &[LiveEntry]) -> Option<usize> {
    entries
        .iter()
        .enumerate()
        .min_by_key(|(_, entry)| entry.metadata.map(|m| m.last_access))
        .map(|(index, _)| index)
}

// == Eviction Policy ==
/// Removes least recently used entries until a capacity condition holds.
#[derive(Debug, Clone, Default)]
pub struct EvictionPolicy {
    log: EvictionLog,
    /// Lifetime eviction count, unaffected by log truncation
    evictions: u64,
}

impl EvictionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &EvictionLog {
        &self.log
    }

    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    // == Make Room ==
    /// Evicts until `required` more bytes fit under the current capacity,
    /// or the cache is empty.
    ///
    /// Returns the records produced by this pass, oldest eviction first.
    pub fn make_room<S: StoreAdapter>(
        &mut self,
        store: &mut S,
        capacity: &mut CapacityManager,
        required: u64,
    ) -> Result<Vec<EvictionRecord>> {
        self.evict_while(store, capacity, |c| c.would_overflow(required))
    }

    // == Shrink To ==
    /// Evicts until usage is at or below `target` bytes, or the cache is empty.
    pub fn shrink_to<S: StoreAdapter>(
        &mut self,
        store: &mut S,
        capacity: &mut CapacityManager,
        target: u64,
    ) -> Result<Vec<EvictionRecord>> {
        self.evict_while(store, capacity, |c| c.used_bytes() > target)
    }

    fn evict_while<S, F>(
        &mut self,
        store: &mut S,
        capacity: &mut CapacityManager,
        over_limit: F,
    ) -> Result<Vec<EvictionRecord>>
    where
        S: StoreAdapter,
        F: Fn(&CapacityManager) -> bool,
    {
        let mut evicted = Vec::new();
        while over_limit(capacity) {
            match self.evict_lru(store, capacity)? {
                Some(record) => evicted.push(record),
                None => {
                    debug!(
                        used = capacity.used_bytes(),
                        capacity = capacity.capacity_bytes(),
                        "Nothing left to evict"
                    );
                    break;
                }
            }
        }
        Ok(evicted)
    }

    /// Removes the single least recently used entry, if any.
    fn evict_lru<S: StoreAdapter>(
        &mut self,
        store: &mut S,
        capacity: &mut CapacityManager,
    ) -> Result<Option<EvictionRecord>> {
        let entries = live_entries(&*store)?;
        let Some(index) = select_lru(&entries) else {
            return Ok(None);
        };
        let victim = &entries[index];
        let freed_bytes = victim.size(&*store);

        let content = content_key(&victim.name);
        let metadata = metadata_key(&victim.name);
        store.delete_many(&[content.as_str(), metadata.as_str()])?;
        capacity.release(freed_bytes);

        let record = EvictionRecord {
            key: victim.name.clone(),
            freed_bytes,
            evicted_at: Utc::now(),
            reason: EVICTION_REASON.to_string(),
        };
        info!(
            key = %record.key,
            freed_bytes,
            used = capacity.used_bytes(),
            "Evicted least recently used entry"
        );

        self.log.push(record.clone());
        self.evictions += 1;
        Ok(Some(record))
    }
}
