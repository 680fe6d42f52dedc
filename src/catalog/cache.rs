use std::sync::atomic::{AtomicU64, Ordering};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::books::dto::BookDto;
use crate::core::domain::Configuration;

// upper bound keeps the chrono duration in range
const MAX_TTL_SECS: i64 = 365 * 24 * 60 * 60;

struct CachedEntry<T> {
    value: T,
    cached_at: DateTime<Utc>,
}

impl<T> CachedEntry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            cached_at: Utc::now(),
        }
    }
}

// CacheStats is a point-in-time view of the cache counters
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub enabled: bool,
    pub hits: u64,
    pub misses: u64,
    pub books: usize,
    pub authors: usize,
}

/// Read-through cache for single book and author lookups.
///
/// Only found results are memoized, a missing book or an author without books always goes
/// back to the repository. Author keys are lower-cased since authors match ignoring case.
///
/// Each map carries an invalidation epoch. Evictions bump the epoch before removing entries,
/// and a read-through fill is inserted only if the epoch it observed before loading is still
/// current, checked under the entry's shard lock. A fill that raced with a write is therefore
/// either dropped or removed by that write's eviction.
pub(crate) struct CatalogCache {
    enabled: bool,
    ttl: Option<Duration>,
    books: DashMap<String, CachedEntry<BookDto>>,
    authors: DashMap<String, CachedEntry<Vec<BookDto>>>,
    books_epoch: AtomicU64,
    authors_epoch: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CatalogCache {
    pub(crate) fn new(config: &Configuration) -> Self {
        Self {
            enabled: config.cache_enabled,
            ttl: config.cache_ttl_secs.map(|secs| Duration::seconds(secs.clamp(0, MAX_TTL_SECS))),
            books: DashMap::new(),
            authors: DashMap::new(),
            books_epoch: AtomicU64::new(0),
            authors_epoch: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub(crate) fn get_book<F>(&self, isbn: &str, load: F) -> Option<BookDto>
        where F: FnOnce() -> Option<BookDto> {
        self.read_through(&self.books, &self.books_epoch, isbn.to_string(), load)
    }

    pub(crate) fn get_books_by_author<F>(&self, author: &str, load: F) -> Vec<BookDto>
        where F: FnOnce() -> Vec<BookDto> {
        let loader = || Some(load()).filter(|books| !books.is_empty());
        self.read_through(&self.authors, &self.authors_epoch, author.to_lowercase(), loader)
            .unwrap_or_default()
    }

    pub(crate) fn evict_book(&self, isbn: &str) {
        self.books_epoch.fetch_add(1, Ordering::SeqCst);
        self.books.remove(isbn);
    }

    pub(crate) fn evict_authors(&self) {
        self.authors_epoch.fetch_add(1, Ordering::SeqCst);
        self.authors.clear();
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            enabled: self.enabled,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            books: self.books.len(),
            authors: self.authors.len(),
        }
    }

    fn read_through<T, F>(&self, map: &DashMap<String, CachedEntry<T>>, epoch: &AtomicU64,
                          key: String, load: F) -> Option<T>
        where T: Clone, F: FnOnce() -> Option<T> {
        if !self.enabled {
            return load();
        }
        // the read guard must be released before the entry lock below
        let cached = map.get(&key)
            .filter(|entry| self.is_fresh(entry.value()))
            .map(|entry| entry.value().value.clone());
        if cached.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("cache hit for {}", key);
            return cached;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("cache miss for {}", key);

        let observed = epoch.load(Ordering::SeqCst);
        let value = load()?;
        let entry = map.entry(key);
        if epoch.load(Ordering::SeqCst) == observed {
            entry.insert(CachedEntry::new(value.clone()));
        }
        Some(value)
    }

    fn is_fresh<T>(&self, entry: &CachedEntry<T>) -> bool {
        match self.ttl {
            Some(ttl) => Utc::now() - entry.cached_at < ttl,
            None => true,
        }
    }
}
