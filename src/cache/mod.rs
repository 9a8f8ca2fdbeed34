//! Cache Module
//!
//! Bounded content cache with sliding TTL, LRU eviction and usage accounting.

mod capacity;
mod engine;
mod eviction;
mod ledger;
mod stats;


// Re-export public types
pub use capacity::{CapacityManager, SizeUnit};
pub use engine::{
    AccessResult, AccessStatus, CacheEngine, CacheSummary, EntryInfo, ResizeOutcome, SpaceInfo,
};
pub use eviction::{EvictionLog, EvictionPolicy, EvictionRecord, EVICTION_REASON};
pub use ledger::{content_key, metadata_key, EntryMetadata, LiveEntry};
pub use stats::{CacheStats, StatsSnapshot};

// == Public Constants ==
/// Smallest capacity a cache may be resized to (10 KiB)
pub const MIN_CAPACITY: u64 = 10 * 1024;

/// Largest capacity a cache may be resized to, and the default (40 MiB)
pub const MAX_CAPACITY: u64 = 40 * 1024 * 1024;

/// TTL in seconds applied when a caller does not supply one
pub const DEFAULT_TTL: u64 = 60;

/// Key namespace for cached content
pub const CACHE_PREFIX: &str = "cache:";

/// Key namespace for entry metadata
pub const METADATA_PREFIX: &str = "meta:";

/// Number of characters kept in a content preview
pub const PREVIEW_CHARS: usize = 50;

/// Number of eviction records retained
pub const EVICTION_LOG_LIMIT: usize = 5;
