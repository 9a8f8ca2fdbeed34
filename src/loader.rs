//! Resource Loader Module
//!
//! Resolves resource identifiers to content bytes for cache misses.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{CacheError, Result};

// == Resource ==
/// Content read from a resource.
#[derive(Debug, Clone)]
pub struct Resource {
    pub bytes: Vec<u8>,
    pub size: u64,
}

impl Resource {
    pub fn new(bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self { bytes, size }
    }
}

// == Resource Loader ==
/// Source of cacheable content.
pub trait ResourceLoader {
    /// Returns the resource size without reading its content.
    fn size(&self, identifier: &str) -> Result<u64>;

    /// Reads the full resource.
    fn load(&self, identifier: &str) -> Result<Resource>;
}

// == Filesystem Loader ==
/// Reads files relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Joins `identifier` onto the root, refusing paths that could escape it.
    fn resolve(&self, identifier: &str) -> Result<PathBuf> {
        let relative = Path::new(identifier);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if identifier.is_empty() || escapes {
            return Err(CacheError::InvalidArgument(format!(
                "Path must be relative to the resource root: {}",
                identifier
            )));
        }
        Ok(self.root.join(relative))
    }
}

fn not_found(identifier: &str, err: io::Error) -> CacheError {
    CacheError::NotFound(format!("{} ({})", identifier, err))
}

impl ResourceLoader for FsLoader {
    fn size(&self, identifier: &str) -> Result<u64> {
        let path = self.resolve(identifier)?;
        let meta = fs::metadata(&path).map_err(|e| not_found(identifier, e))?;
        if !meta.is_file() {
            return Err(CacheError::NotFound(format!("{} is not a file", identifier)));
        }
        Ok(meta.len())
    }

    fn load(&self, identifier: &str) -> Result<Resource> {
        let path = self.resolve(identifier)?;
        if path.is_dir() {
            return Err(CacheError::NotFound(format!("{} is not a file", identifier)));
        }
        let bytes = fs::read(&path).map_err(|e| not_found(identifier, e))?;
        Ok(Resource::new(bytes))
    }
}

// == Memory Loader ==
/// Serves resources from an in-memory map of identifier to bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a resource.
    pub fn insert(&mut self, identifier: impl Into<String>, bytes: Vec<u8>) {
        self.resources.insert(identifier.into(), bytes);
    }

    /// Builder-style variant of [`MemoryLoader::insert`].
    pub fn with(mut self, identifier: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(identifier, bytes);
        self
    }

    pub fn remove(&mut self, identifier: &str) -> Option<Vec<u8>> {
        self.resources.remove(identifier)
    }
}

impl ResourceLoader for MemoryLoader {
    fn size(&self, identifier: &str) -> Result<u64> {
        self.resources
            .get(identifier)
            .map(|bytes| bytes.len() as u64)
            .ok_or_else(|| CacheError::NotFound(identifier.to_string()))
    }

    fn load(&self, identifier: &str) -> Result<Resource> {
        self.resources
            .get(identifier)
            .map(|bytes| Resource::new(bytes.clone()))
            .ok_or_else(|| CacheError::NotFound(identifier.to_string()))
    }
}
