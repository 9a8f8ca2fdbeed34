//! Cache Engine Module
//!
//! Composes the store, metadata ledger, capacity manager, eviction policy and
//! stats tracker into the `access` operation and its inspection companions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cache::ledger::{content_key, live_entries, write_metadata, EntryMetadata};
use crate::cache::{
    CacheStats, CapacityManager, EvictionPolicy, EvictionRecord, SizeUnit, StatsSnapshot,
    CACHE_PREFIX, DEFAULT_TTL, MAX_CAPACITY, METADATA_PREFIX, MIN_CAPACITY, PREVIEW_CHARS,
};
use crate::error::{CacheError, Result};
use crate::loader::ResourceLoader;
use crate::store::StoreAdapter;

// == Access Result ==
/// Outcome of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessStatus {
    Hit,
    Miss,
}

/// What `access` reports back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct AccessResult {
    pub key: String,
    pub status: AccessStatus,
    pub size: u64,
    pub content_preview: String,
    pub stats: StatsSnapshot,
    /// TTL applied by this access, in seconds
    pub ttl: u64,
    pub ttl_remaining: Option<u64>,
    pub accessed_at: DateTime<Utc>,
    /// Entries evicted to make room on a miss
    pub evicted: Vec<EvictionRecord>,
}

// == Inspection Types ==
/// One row of `list_entries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryInfo {
    pub key: String,
    pub size: u64,
    pub last_access: Option<DateTime<Utc>>,
    pub ttl_remaining: Option<u64>,
}

/// Space usage of the cache.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpaceInfo {
    pub used: u64,
    pub available: u64,
    pub total: u64,
    pub utilization: f64,
    pub min_capacity: u64,
    pub max_capacity: u64,
}

/// Stats, space usage and recent evictions in one view.
#[derive(Debug, Clone, Serialize)]
pub struct CacheSummary {
    pub stats: StatsSnapshot,
    pub space: SpaceInfo,
    pub evictions_total: u64,
    pub recent_evictions: Vec<EvictionRecord>,
}

/// Result of a successful resize.
#[derive(Debug, Clone, Serialize)]
pub struct ResizeOutcome {
    pub previous_capacity_bytes: u64,
    pub capacity_bytes: u64,
    pub evicted: Vec<EvictionRecord>,
}

// == Cache Engine ==
/// Bounded content cache over a [`StoreAdapter`], filled from a [`ResourceLoader`].
///
/// Every operation takes `&mut self` or `&self`; share an engine between tasks
/// behind a lock so each operation runs as one critical section.
#[derive(Debug)]
pub struct CacheEngine<S, L> {
    store: S,
    loader: L,
    capacity: CapacityManager,
    eviction: EvictionPolicy,
    stats: CacheStats,
    /// TTL in seconds used when `access` is called without one
    default_ttl: u64,
}

impl<S: StoreAdapter, L: ResourceLoader> CacheEngine<S, L> {
    // == Constructor ==
    /// Creates an engine with the maximum capacity and the default TTL.
    pub fn new(store: S, loader: L) -> Self {
        Self {
            store,
            loader,
            capacity: CapacityManager::default(),
            eviction: EvictionPolicy::new(),
            stats: CacheStats::new(),
            default_ttl: DEFAULT_TTL,
        }
    }

    /// Creates an engine with an explicit capacity and default TTL.
    ///
    /// Usage is measured from whatever the store already holds.
    pub fn with_capacity(
        store: S,
        loader: L,
        capacity_bytes: u64,
        default_ttl: u64,
    ) -> Result<Self> {
        validate_ttl(default_ttl)?;
        let mut engine = Self {
            capacity: CapacityManager::new(capacity_bytes)?,
            default_ttl,
            ..Self::new(store, loader)
        };
        engine.refresh_usage()?;
        Ok(engine)
    }

    // == Access ==
    /// Serves `identifier` from the cache, loading it on a miss.
    ///
    /// A hit re-arms the entry's TTL to `ttl` (or the default), replacing the
    /// previous deadline. A miss evicts least recently used entries until the
    /// resource fits, then stores it.
    pub fn access(&mut self, identifier: &str, ttl: Option<u64>) -> Result<AccessResult> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        validate_ttl(ttl)?;
        let name = resource_name(identifier)?;
        // Nothing is mutated until the resource is known to exist.
        self.loader.size(identifier)?;
        self.refresh_usage()?;

        match self.store.get(&content_key(&name))? {
            Some(content) => self.hit(name, content, ttl),
            None => self.miss(identifier, name, ttl),
        }
    }

    fn hit(&mut self, name: String, content: Vec<u8>, ttl: u64) -> Result<AccessResult> {
        self.stats.record(true);

        let size = content.len() as u64;
        let metadata = EntryMetadata::touched(size);
        let key = content_key(&name);
        write_metadata(&mut self.store, &name, &metadata, ttl)?;
        self.store.expire(&key, ttl)?;
        let ttl_remaining = self.store.ttl_remaining(&key)?;

        info!(key = %name, size, ttl, "Cache hit");
        Ok(AccessResult {
            key: name,
            status: AccessStatus::Hit,
            size,
            content_preview: preview(&content),
            stats: self.stats.snapshot(),
            ttl,
            ttl_remaining,
            accessed_at: metadata.last_access,
            evicted: Vec::new(),
        })
    }

    fn miss(&mut self, identifier: &str, name: String, ttl: u64) -> Result<AccessResult> {
        let resource = self.loader.load(identifier)?;
        self.stats.record(false);

        let evicted = self
            .eviction
            .make_room(&mut self.store, &mut self.capacity, resource.size)?;
        if self.capacity.would_overflow(resource.size) {
            warn!(
                key = %name,
                size = resource.size,
                capacity = self.capacity.capacity_bytes(),
                "Entry does not fit even in an empty cache"
            );
        }

        let content_preview = preview(&resource.bytes);
        let key = content_key(&name);
        self.store.set(&key, resource.bytes, ttl)?;
        let metadata = EntryMetadata::touched(resource.size);
        write_metadata(&mut self.store, &name, &metadata, ttl)?;
        self.capacity.add_usage(resource.size);
        let ttl_remaining = self.store.ttl_remaining(&key)?;

        info!(
            key = %name,
            size = resource.size,
            ttl,
            used = self.capacity.used_bytes(),
            "Cache miss, entry stored"
        );
        Ok(AccessResult {
            key: name,
            status: AccessStatus::Miss,
            size: resource.size,
            content_preview,
            stats: self.stats.snapshot(),
            ttl,
            ttl_remaining,
            accessed_at: metadata.last_access,
            evicted,
        })
    }

    // == Resize ==
    /// Changes the capacity bound.
    ///
    /// Invalid input is rejected before anything changes. When the new bound
    /// is below current usage, LRU entries are evicted first.
    pub fn resize(&mut self, value: &str, unit: SizeUnit) -> Result<ResizeOutcome> {
        let requested = self.capacity.validate_resize(value, unit)?;
        self.refresh_usage()?;

        let previous = self.capacity.capacity_bytes();
        let evicted = if requested < self.capacity.used_bytes() {
            info!(
                requested,
                used = self.capacity.used_bytes(),
                "New capacity is below current usage, evicting"
            );
            self.eviction
                .shrink_to(&mut self.store, &mut self.capacity, requested)?
        } else {
            Vec::new()
        };
        self.capacity.commit(requested);

        info!(
            previous,
            capacity = requested,
            display = %unit.format(requested),
            "Cache capacity adjusted"
        );
        Ok(ResizeOutcome {
            previous_capacity_bytes: previous,
            capacity_bytes: requested,
            evicted,
        })
    }

    // == List Entries ==
    /// Snapshot of every live entry. Does not count as an access.
    pub fn list_entries(&self) -> Result<Vec<EntryInfo>> {
        live_entries(&self.store)?
            .into_iter()
            .map(|entry| -> Result<EntryInfo> {
                Ok(EntryInfo {
                    size: entry.size(&self.store),
                    last_access: entry.metadata.map(|m| m.last_access),
                    ttl_remaining: self.store.ttl_remaining(&content_key(&entry.name))?,
                    key: entry.name,
                })
            })
            .collect()
    }

    // == Clear ==
    /// Deletes every entry and its metadata. Stats and eviction history are kept.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&mut self) -> Result<usize> {
        let content_keys = self.store.keys_with_prefix(CACHE_PREFIX)?;
        let metadata_keys = self.store.keys_with_prefix(METADATA_PREFIX)?;
        let keys: Vec<&str> = content_keys
            .iter()
            .chain(metadata_keys.iter())
            .map(String::as_str)
            .collect();
        self.store.delete_many(&keys)?;
        self.capacity.set_usage(0);

        info!(removed = content_keys.len(), "Cache cleared");
        Ok(content_keys.len())
    }

    // == Accessors ==
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Recent evictions, newest first.
    pub fn evictions(&self) -> Vec<EvictionRecord> {
        self.eviction.log().to_vec()
    }

    pub fn space(&self) -> SpaceInfo {
        SpaceInfo {
            used: self.capacity.used_bytes(),
            available: self.capacity.available_bytes(),
            total: self.capacity.capacity_bytes(),
            utilization: self.capacity.utilization(),
            min_capacity: MIN_CAPACITY,
            max_capacity: MAX_CAPACITY,
        }
    }

    pub fn summary(&self) -> CacheSummary {
        CacheSummary {
            stats: self.stats.snapshot(),
            space: self.space(),
            evictions_total: self.eviction.evictions(),
            recent_evictions: self.evictions(),
        }
    }

    pub fn used_bytes(&self) -> u64 {
        self.capacity.used_bytes()
    }

    pub fn capacity_bytes(&self) -> u64 {
        self.capacity.capacity_bytes()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-measures usage from the entries the store still holds, so entries
    /// that expired passively stop counting against capacity.
    fn refresh_usage(&mut self) -> Result<u64> {
        let used: u64 = live_entries(&self.store)?
            .iter()
            .map(|entry| entry.size(&self.store))
            .sum();
        if used != self.capacity.used_bytes() {
            debug!(previous = self.capacity.used_bytes(), used, "Usage re-measured");
        }
        self.capacity.set_usage(used);
        Ok(used)
    }
}

// == Helpers ==
/// Cache key name for a resource: its final path component.
fn resource_name(identifier: &str) -> Result<String> {
    Path::new(identifier)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            CacheError::InvalidArgument(format!("'{}' does not name a file", identifier))
        })
}

fn validate_ttl(ttl: u64) -> Result<()> {
    if ttl == 0 {
        return Err(CacheError::InvalidArgument(
            "TTL must be at least one second".to_string(),
        ));
    }
    Ok(())
}

/// First [`PREVIEW_CHARS`] characters of the content, with `...` when cut.
fn preview(content: &[u8]) -> String {
    let text = String::from_utf8_lossy(content);
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{metadata_key, EVICTION_LOG_LIMIT, EVICTION_REASON};
    use crate::loader::MemoryLoader;
    use crate::store::MemoryStore;
    use std::thread::sleep;
    use std::time::Duration;

    const KB: u64 = 1024;

    fn engine(capacity: u64, loader: MemoryLoader) -> CacheEngine<MemoryStore, MemoryLoader> {
        CacheEngine::with_capacity(MemoryStore::new(), loader, capacity, DEFAULT_TTL).unwrap()
    }

    fn file(size: u64) -> Vec<u8> {
        vec![b'a'; size as usize]
    }

    fn live_total(engine: &CacheEngine<MemoryStore, MemoryLoader>) -> u64 {
        engine.list_entries().unwrap().iter().map(|e| e.size).sum()
    }

    #[test]
    fn test_first_access_misses_then_hits() {
        let loader = MemoryLoader::new().with("a", file(10 * KB));
        let mut cache = engine(20 * KB, loader);

        let first = cache.access("a", None).unwrap();
        assert_eq!(first.status, AccessStatus::Miss);
        assert_eq!(first.size, 10 * KB);
        assert_eq!(first.ttl, DEFAULT_TTL);

        let second = cache.access("a", None).unwrap();
        assert_eq!(second.status, AccessStatus::Hit);
        assert_eq!(second.stats.hits, 1);
        assert_eq!(second.stats.misses, 1);
        assert_eq!(second.stats.hit_ratio, 50.0);
        assert_eq!(format!("{:.2}%", second.stats.hit_ratio), "50.00%");
        assert_eq!(cache.used_bytes(), 10 * KB);
    }

    #[test]
    fn test_miss_evicts_lru_entry() {
        let loader = MemoryLoader::new()
            .with("a", file(12 * KB))
            .with("b", file(12 * KB));
        let mut cache = engine(20 * KB, loader);

        cache.access("a", None).unwrap();
        assert_eq!(cache.used_bytes(), 12288);

        let result = cache.access("b", None).unwrap();
        assert_eq!(result.status, AccessStatus::Miss);
        assert_eq!(cache.used_bytes(), 12288);
        assert_eq!(result.evicted.len(), 1);

        let log = cache.evictions();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].key, "a");
        assert_eq!(log[0].freed_bytes, 12288);
        assert_eq!(log[0].reason, EVICTION_REASON);
        assert!(cache.store().get(&content_key("a")).unwrap().is_none());
        assert!(cache.store().get(&metadata_key("a")).unwrap().is_none());
    }

    #[test]
    fn test_hit_refreshes_recency() {
        let loader = MemoryLoader::new()
            .with("a", file(8 * KB))
            .with("b", file(8 * KB))
            .with("c", file(8 * KB));
        let mut cache = engine(20 * KB, loader);

        cache.access("a", None).unwrap();
        sleep(Duration::from_millis(5));
        cache.access("b", None).unwrap();
        sleep(Duration::from_millis(5));
        cache.access("a", None).unwrap();
        sleep(Duration::from_millis(5));
        cache.access("c", None).unwrap();

        let keys: Vec<String> = cache.list_entries().unwrap().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(cache.evictions()[0].key, "b");
    }

    #[test]
    fn test_ttl_expiry_turns_hit_into_miss() {
        let loader = MemoryLoader::new().with("x", file(KB));
        let mut cache = engine(20 * KB, loader);

        let first = cache.access("x", Some(2)).unwrap();
        assert_eq!(first.status, AccessStatus::Miss);

        sleep(Duration::from_millis(2100));

        let second = cache.access("x", Some(2)).unwrap();
        assert_eq!(second.status, AccessStatus::Miss);
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.used_bytes(), KB);
    }

    #[test]
    fn test_hit_slides_expiration() {
        let loader = MemoryLoader::new().with("x", file(KB));
        let mut cache = engine(20 * KB, loader);

        cache.access("x", Some(2)).unwrap();
        sleep(Duration::from_millis(1200));
        let hit = cache.access("x", Some(2)).unwrap();
        assert_eq!(hit.status, AccessStatus::Hit);
        sleep(Duration::from_millis(1200));

        // 2.4s after insertion, but only 1.2s after the hit.
        let again = cache.access("x", Some(2)).unwrap();
        assert_eq!(again.status, AccessStatus::Hit);
    }

    #[test]
    fn test_hit_replaces_ttl_rather_than_extending() {
        let loader = MemoryLoader::new().with("x", file(KB));
        let mut cache = engine(20 * KB, loader);

        cache.access("x", Some(100)).unwrap();
        let hit = cache.access("x", Some(10)).unwrap();

        let remaining = hit.ttl_remaining.unwrap();
        assert!(remaining <= 10, "remaining {} should not exceed new TTL", remaining);
        let listed = cache.list_entries().unwrap();
        assert!(listed[0].ttl_remaining.unwrap() <= 10);
    }

    #[test]
    fn test_missing_resource_mutates_nothing() {
        let mut cache = engine(20 * KB, MemoryLoader::new());

        let result = cache.access("ghost.txt", None);

        assert!(matches!(result, Err(CacheError::NotFound(_))));
        assert_eq!(cache.stats().total, 0);
        assert_eq!(cache.used_bytes(), 0);
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let loader = MemoryLoader::new().with("a", file(KB));
        let mut cache = engine(20 * KB, loader);

        assert!(matches!(
            cache.access("a", Some(0)),
            Err(CacheError::InvalidArgument(_))
        ));
        assert_eq!(cache.stats().total, 0);
    }

    #[test]
    fn test_key_is_final_path_component() {
        let loader = MemoryLoader::new().with("docs/report.txt", file(KB));
        let mut cache = engine(20 * KB, loader);

        let result = cache.access("docs/report.txt", None).unwrap();
        assert_eq!(result.key, "report.txt");
        assert!(cache.store().get("cache:report.txt").unwrap().is_some());
    }

    #[test]
    fn test_oversized_entry_drains_cache() {
        let loader = MemoryLoader::new()
            .with("small", file(4 * KB))
            .with("huge", file(30 * KB));
        let mut cache = engine(20 * KB, loader);

        cache.access("small", None).unwrap();
        let result = cache.access("huge", None).unwrap();

        assert_eq!(result.status, AccessStatus::Miss);
        assert_eq!(result.evicted.len(), 1);
        assert_eq!(cache.used_bytes(), 30 * KB);
        assert!(cache.used_bytes() > cache.capacity_bytes());
        assert_eq!(live_total(&cache), cache.used_bytes());
    }

    #[test]
    fn test_preview_truncates() {
        let long = "x".repeat(80);
        let loader = MemoryLoader::new()
            .with("long", long.clone().into_bytes())
            .with("short", b"hello".to_vec());
        let mut cache = engine(20 * KB, loader);

        let result = cache.access("long", None).unwrap();
        assert_eq!(result.content_preview, format!("{}...", &long[..50]));

        let result = cache.access("short", None).unwrap();
        assert_eq!(result.content_preview, "hello");

        let exact = "y".repeat(50);
        assert_eq!(preview(exact.as_bytes()), exact);
    }

    #[test]
    fn test_list_entries_is_not_an_access() {
        let loader = MemoryLoader::new().with("a", file(KB)).with("b", file(2 * KB));
        let mut cache = engine(20 * KB, loader);
        cache.access("a", None).unwrap();
        cache.access("b", None).unwrap();

        let first = cache.list_entries().unwrap();
        let second = cache.list_entries().unwrap();

        assert_eq!(
            first.iter().map(|e| e.last_access).collect::<Vec<_>>(),
            second.iter().map(|e| e.last_access).collect::<Vec<_>>()
        );
        assert_eq!(cache.stats().total, 2);
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].size, 2 * KB);
        assert!(first[0].last_access.is_some());
    }

    #[test]
    fn test_resize_rejects_below_minimum() {
        let mut cache = engine(20 * KB, MemoryLoader::new());

        let result = cache.resize("5", SizeUnit::KB);

        assert!(matches!(result, Err(CacheError::InvalidArgument(_))));
        assert_eq!(cache.capacity_bytes(), 20 * KB);
    }

    #[test]
    fn test_resize_below_usage_evicts_first() {
        let loader = MemoryLoader::new()
            .with("a", file(12 * KB))
            .with("b", file(12 * KB))
            .with("c", file(12 * KB));
        let mut cache = engine(40 * KB, loader);
        cache.access("a", None).unwrap();
        cache.access("b", None).unwrap();
        cache.access("c", None).unwrap();
        assert_eq!(cache.used_bytes(), 36 * KB);

        let outcome = cache.resize("20", SizeUnit::KB).unwrap();

        assert_eq!(outcome.previous_capacity_bytes, 40 * KB);
        assert_eq!(outcome.capacity_bytes, 20 * KB);
        assert_eq!(outcome.evicted.len(), 2);
        assert!(cache.used_bytes() <= 20 * KB);
        assert_eq!(cache.capacity_bytes(), 20 * KB);
        assert_eq!(live_total(&cache), cache.used_bytes());
    }

    #[test]
    fn test_resize_growth_keeps_entries() {
        let loader = MemoryLoader::new().with("a", file(12 * KB));
        let mut cache = engine(20 * KB, loader);
        cache.access("a", None).unwrap();

        let outcome = cache.resize("1", SizeUnit::MB).unwrap();

        assert!(outcome.evicted.is_empty());
        assert_eq!(cache.capacity_bytes(), 1024 * KB);
        assert_eq!(cache.used_bytes(), 12 * KB);
    }

    #[test]
    fn test_clear_keeps_history() {
        let loader = MemoryLoader::new()
            .with("a", file(12 * KB))
            .with("b", file(12 * KB));
        let mut cache = engine(20 * KB, loader);
        cache.access("a", None).unwrap();
        cache.access("b", None).unwrap();

        let removed = cache.clear().unwrap();

        assert_eq!(removed, 1);
        assert_eq!(cache.used_bytes(), 0);
        assert!(cache.list_entries().unwrap().is_empty());
        assert!(cache.store().is_empty());
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.evictions().len(), 1);
    }

    #[test]
    fn test_eviction_log_is_bounded() {
        let mut loader = MemoryLoader::new();
        for i in 0..8 {
            loader.insert(format!("f{}", i), file(8 * KB));
        }
        let mut cache = engine(10 * KB, loader);

        for i in 0..8 {
            cache.access(&format!("f{}", i), None).unwrap();
        }

        let log = cache.evictions();
        assert_eq!(log.len(), EVICTION_LOG_LIMIT);
        assert_eq!(log[0].key, "f6");
        assert_eq!(log[4].key, "f2");
        assert_eq!(cache.summary().evictions_total, 7);
    }

    #[test]
    fn test_summary_space() {
        let loader = MemoryLoader::new().with("a", file(5 * KB));
        let mut cache = engine(20 * KB, loader);
        cache.access("a", None).unwrap();

        let space = cache.summary().space;
        assert_eq!(space.used, 5 * KB);
        assert_eq!(space.available, 15 * KB);
        assert_eq!(space.total, 20 * KB);
        assert_eq!(space.utilization, 25.0);
        assert_eq!(space.min_capacity, MIN_CAPACITY);
        assert_eq!(space.max_capacity, MAX_CAPACITY);
    }

    #[test]
    fn test_with_capacity_validates() {
        assert!(CacheEngine::with_capacity(MemoryStore::new(), MemoryLoader::new(), 1, 60).is_err());
        assert!(CacheEngine::with_capacity(MemoryStore::new(), MemoryLoader::new(), 20 * KB, 0).is_err());
    }

    // == Degraded Store ==
    /// Store whose size measurements always fail.
    struct UnmeasurableStore(MemoryStore);

    impl StoreAdapter for UnmeasurableStore {
        fn ping(&self) -> Result<()> {
            self.0.ping()
        }
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            if key.starts_with(METADATA_PREFIX) {
                return Err(CacheError::Store("metadata unavailable".into()));
            }
            self.0.get(key)
        }
        fn set(&mut self, key: &str, value: Vec<u8>, ttl_secs: u64) -> Result<()> {
            self.0.set(key, value, ttl_secs)
        }
        fn delete(&mut self, key: &str) -> Result<bool> {
            self.0.delete(key)
        }
        fn delete_many(&mut self, keys: &[&str]) -> Result<usize> {
            self.0.delete_many(keys)
        }
        fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
            self.0.keys_with_prefix(prefix)
        }
        fn size_of(&self, _key: &str) -> Result<Option<u64>> {
            Err(CacheError::Store("size unavailable".into()))
        }
        fn ttl_remaining(&self, key: &str) -> Result<Option<u64>> {
            self.0.ttl_remaining(key)
        }
        fn expire(&mut self, key: &str, ttl_secs: u64) -> Result<bool> {
            self.0.expire(key, ttl_secs)
        }
    }

    #[test]
    fn test_unmeasurable_sizes_count_as_zero() {
        let loader = MemoryLoader::new().with("a", file(4 * KB)).with("b", file(4 * KB));
        let mut cache =
            CacheEngine::with_capacity(UnmeasurableStore(MemoryStore::new()), loader, 20 * KB, 60)
                .unwrap();

        let first = cache.access("a", None).unwrap();
        assert_eq!(first.status, AccessStatus::Miss);

        // The next access re-measures usage and cannot size "a".
        cache.access("b", None).unwrap();
        assert_eq!(cache.used_bytes(), 4 * KB);

        let listed = cache.list_entries().unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|e| e.size == 0 && e.last_access.is_none()));
    }
}
