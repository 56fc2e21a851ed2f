//! Pluggable tile caches.
//!
//! The tile fetcher consults a [`TileCache`] before the network and
//! writes fetched bytes back afterwards. Caching is optional: without a
//! cache every fetch goes to the remote endpoint. [`FileCache`] matches
//! the original on-disk layout (one file per tile, no eviction);
//! [`MemoryCache`] bounds its footprint with LRU eviction and is the
//! extension point for bounded caching policies.

use super::types::TileKey;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::debug;

/// Errors from cache operations.
///
/// Cache errors never fail a tile fetch; the fetcher logs them and
/// returns the tile anyway.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Store for raw (encoded) tile bytes keyed by [`TileKey`].
///
/// Implementations must be safe for concurrent use: the grid fetcher
/// reads and writes from parallel tile fetches. Writes for the same key
/// carry identical content, so last-write-wins replacement is always
/// safe and no cross-key locking is required.
pub trait TileCache: Send + Sync {
    /// Returns the cached bytes for the key, if present.
    fn get(&self, key: &TileKey) -> Option<Vec<u8>>;

    /// Stores bytes for the key, replacing any previous entry.
    fn put(&self, key: &TileKey, data: &[u8]) -> Result<(), CacheError>;
}

/// File-backed tile cache.
///
/// One file per tile at a deterministic path, so repeated lookups are
/// pure filesystem reads:
///
/// ```text
/// <root>/<map_id>/<zoom>/<x>/<y>[@2x].<ext>
/// ```
///
/// Entries are never evicted; callers that need a bounded footprint
/// should layer a bounded policy behind the [`TileCache`] trait or
/// prune the directory externally.
pub struct FileCache {
    root: PathBuf,
}

impl FileCache {
    /// Creates a file cache rooted at the given directory, creating it
    /// if absent.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The path this cache stores the given key at.
    pub fn tile_path(&self, key: &TileKey) -> PathBuf {
        self.root
            .join(key.map_id.as_str())
            .join(key.zoom.to_string())
            .join(key.x.to_string())
            .join(format!(
                "{}{}.{}",
                key.y,
                key.density_suffix(),
                key.format.extension()
            ))
    }

    /// The cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TileCache for FileCache {
    fn get(&self, key: &TileKey) -> Option<Vec<u8>> {
        fs::read(self.tile_path(key)).ok()
    }

    fn put(&self, key: &TileKey, data: &[u8]) -> Result<(), CacheError> {
        let path = self.tile_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, data)?;
        Ok(())
    }
}

struct MemoryEntry {
    data: Vec<u8>,
    /// Logical access time from a monotonic counter; `Instant` ties at
    /// coarse clock resolution would make eviction order ambiguous.
    last_accessed: u64,
}

struct MemoryCacheInner {
    entries: HashMap<TileKey, MemoryEntry>,
    current_bytes: usize,
    clock: u64,
}

/// In-memory tile cache with LRU eviction under a byte cap.
///
/// Usable standalone or as a read-through layer in front of a
/// [`FileCache`].
pub struct MemoryCache {
    inner: Mutex<MemoryCacheInner>,
    max_bytes: usize,
}

impl MemoryCache {
    /// Creates a memory cache holding at most `max_bytes` of tile data.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            inner: Mutex::new(MemoryCacheInner {
                entries: HashMap::new(),
                current_bytes: 0,
                clock: 0,
            }),
            max_bytes,
        }
    }

    /// Number of cached entries.
    pub fn entry_count(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    /// Total bytes currently cached.
    pub fn size_bytes(&self) -> usize {
        self.inner.lock().unwrap().current_bytes
    }

    /// Evict least-recently-used entries until `needed` bytes fit under
    /// the cap.
    fn evict_for(inner: &mut MemoryCacheInner, max_bytes: usize, needed: usize) {
        while inner.current_bytes + needed > max_bytes && !inner.entries.is_empty() {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_accessed)
                .map(|(key, _)| key.clone());

            if let Some(key) = oldest {
                if let Some(entry) = inner.entries.remove(&key) {
                    inner.current_bytes -= entry.data.len();
                }
            }
        }
    }
}

impl TileCache for MemoryCache {
    fn get(&self, key: &TileKey) -> Option<Vec<u8>> {
        let mut inner = self.inner.lock().unwrap();
        inner.clock += 1;
        let now = inner.clock;
        let entry = inner.entries.get_mut(key)?;
        entry.last_accessed = now;
        Some(entry.data.clone())
    }

    fn put(&self, key: &TileKey, data: &[u8]) -> Result<(), CacheError> {
        if data.len() > self.max_bytes {
            // A single oversized tile would evict everything and still
            // not fit.
            debug!(bytes = data.len(), "tile larger than memory cache cap, skipping");
            return Ok(());
        }

        let mut inner = self.inner.lock().unwrap();

        if let Some(previous) = inner.entries.remove(key) {
            inner.current_bytes -= previous.data.len();
        }
        Self::evict_for(&mut inner, self.max_bytes, data.len());

        inner.clock += 1;
        let now = inner.clock;
        inner.current_bytes += data.len();
        inner.entries.insert(
            key.clone(),
            MemoryEntry {
                data: data.to_vec(),
                last_accessed: now,
            },
        );
        Ok(())
    }
}
