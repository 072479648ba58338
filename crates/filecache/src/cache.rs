use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use filecache_fs::FileFS;

/// Source of the current time in whole seconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> i64 {
        self.as_ref().now()
    }
}

/// A cached value and the second it was stored at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<T> {
    pub cache_time: i64,
    pub data: T,
}

impl<T> CacheEntry<T> {
    /// A negative `max_age` never expires. Otherwise an entry is fresh while
    /// its age is at most `max_age`, inclusive.
    pub fn is_fresh(&self, now: i64, max_age: i64) -> bool {
        max_age < 0 || now.saturating_sub(self.cache_time) <= max_age
    }
}

/// In-memory cache keyed by resolved absolute path, with age-based expiry.
///
/// Stale entries are only removed when they are looked up. Entries that are
/// never looked up again stay in memory for the lifetime of the cache.
pub struct FileCache<T, C = SystemClock> {
    entries: Mutex<HashMap<PathBuf, CacheEntry<T>>>,
    clock: C,
}

impl<T> FileCache<T> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<T> Default for FileCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clock> FileCache<T, C> {
    pub fn with_clock(clock: C) -> Self {
        Self { entries: Mutex::new(HashMap::new()), clock }
    }

    /// Stores `data` for `path`, replacing any previous entry.
    pub fn set(&self, path: impl AsRef<Path>, data: T) {
        let key = FileFS::resolve(path);
        let entry = CacheEntry { cache_time: self.clock.now(), data };
        self.entries().insert(key, entry);
    }

    /// Returns the entry for `path` if it is fresh according to `max_age`.
    /// `None` skips the age check entirely. A stale entry is evicted.
    pub fn get(&self, path: impl AsRef<Path>, max_age: Option<i64>) -> Option<CacheEntry<T>>
    where
        T: Clone,
    {
        self.lookup(path, max_age, CacheEntry::clone)
    }

    /// Same freshness rules and eviction as [`FileCache::get`], without
    /// cloning the value.
    pub fn has(&self, path: impl AsRef<Path>, max_age: Option<i64>) -> bool {
        self.lookup(path, max_age, |_| ()).is_some()
    }

    fn lookup<R>(
        &self,
        path: impl AsRef<Path>,
        max_age: Option<i64>,
        f: impl FnOnce(&CacheEntry<T>) -> R,
    ) -> Option<R> {
        let key = FileFS::resolve(path);
        let mut entries = self.entries();
        let entry = entries.get(&key)?;

        let Some(max_age) = max_age else {
            return Some(f(entry));
        };

        if entry.is_fresh(self.clock.now(), max_age) {
            return Some(f(entry));
        }

        entries.remove(&key);
        tracing::debug!(path = %key.display(), max_age, "Evicted stale cache entry");
        None
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<PathBuf, CacheEntry<T>>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("File cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
