//! Page cache for incremental site rebuilds.
//!
//! Keeps the rendered HTML of each page keyed by its URL/path, along with
//! a hash of the source it was rendered from. A page is only re-parsed
//! when its source changes.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::document::markdown_to_html;
use crate::error::MdResult;
use crate::hash::source_hash;

// =============================================================================
// Cache Key
// =============================================================================

/// Cache key for path-based lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(Arc<str>);

impl CacheKey {
    /// Create a new cache key from a page path.
    pub fn new(path: &str) -> Self {
        Self(Arc::from(path))
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Cache Entry
// =============================================================================

/// A rendered page with version tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Rendered HTML.
    pub html: Arc<str>,
    /// Hash of the source the HTML was rendered from.
    pub source_hash: u64,
    /// Bumped on every re-render.
    pub version: u64,
}

impl CacheEntry {
    /// Create a new cache entry with version 0.
    pub fn new(html: impl Into<Arc<str>>, source_hash: u64) -> Self {
        Self {
            html: html.into(),
            source_hash,
            version: 0,
        }
    }

    /// Replace the rendered HTML and bump the version.
    pub fn update(&mut self, html: impl Into<Arc<str>>, source_hash: u64) {
        self.html = html.into();
        self.source_hash = source_hash;
        self.version += 1;
    }
}

// =============================================================================
// Page Cache
// =============================================================================

/// Non-thread-safe page cache.
pub type PageCache = FxHashMap<CacheKey, CacheEntry>;

/// Thread-safe shared page cache.
///
/// Uses `parking_lot::RwLock`; clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct SharedPageCache {
    inner: Arc<RwLock<PageCache>>,
}

impl SharedPageCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a closure with read access to the cache.
    pub fn with_read<R>(&self, f: impl FnOnce(&PageCache) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with write access to the cache.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut PageCache) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Return cached HTML for `key`, rendering `source` if it changed.
    ///
    /// Parsing happens outside the lock; a failed render leaves the old
    /// entry in place and returns the error.
    pub fn get_or_render(&self, key: &CacheKey, source: &str) -> MdResult<Arc<str>> {
        let hash = source_hash(source);

        let cached = self.with_read(|c| {
            c.get(key)
                .filter(|entry| entry.source_hash == hash)
                .map(|entry| Arc::clone(&entry.html))
        });
        if let Some(html) = cached {
            log::debug!("page cache hit: {key}");
            return Ok(html);
        }

        log::debug!("page cache miss: {key}");
        let html: Arc<str> = markdown_to_html(source)?.into();
        self.with_write(|c| {
            c.entry(key.clone())
                .and_modify(|entry| entry.update(Arc::clone(&html), hash))
                .or_insert_with(|| CacheEntry::new(Arc::clone(&html), hash));
        });
        Ok(html)
    }

    /// Get a clone of a cached entry.
    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.with_read(|c| c.get(key).cloned())
    }

    /// Remove an entry from the cache.
    pub fn remove(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.with_write(|c| c.remove(key))
    }

    /// Check if the cache contains a key.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.with_read(|c| c.contains_key(key))
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.with_read(|c| c.len())
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all entries from the cache.
    pub fn clear(&self) {
        self.with_write(|c| c.clear());
    }
}

// =============================================================================
// Tests
// =============================================================================
