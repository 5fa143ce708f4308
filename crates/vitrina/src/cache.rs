//! TTL-bounded memoization store backing the metadata generator.
//!
//! Not an LRU: the only eviction is TTL expiry, applied lazily on access and
//! in bulk by [`TtlCache::sweep_expired`]. Unbounded growth between sweeps is
//! accepted because the key space (names × regions × currencies) is small for
//! this application.
//!
//! Time is passed in by the caller as epoch milliseconds rather than read from
//! the system clock, so expiry is deterministically testable. [`Clock`] is the
//! injectable time source callers use to produce those timestamps.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use const_fnv1a_hash::fnv1a_hash_str_64;

/// Default entry lifetime: one hour of acceptable staleness.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// How often the background sweeper removes expired entries.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Injectable time source, in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Wall-clock time source used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Cache key holding the full composite generation-input string.
///
/// Equality is exact on the composite, so two distinct inputs never alias an
/// entry even if their hashes collide. FNV-1a only supplies the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for a composite input string (e.g. `"product|Ворота|50000|yalta|..."`).
    pub fn new(composite: &str) -> Self {
        Self(composite.to_string())
    }

    /// FNV-1a hash of the composite.
    pub fn hash64(&self) -> u64 {
        fnv1a_hash_str_64(&self.0)
    }
}

impl Hash for CacheKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash64());
    }
}

struct Entry<V> {
    data: V,
    /// Epoch milliseconds at insertion.
    timestamp: u64,
    ttl: Duration,
}

impl<V> Entry<V> {
    fn is_expired(&self, now_millis: u64) -> bool {
        now_millis.saturating_sub(self.timestamp) > self.ttl.as_millis() as u64
    }
}

/// Mutex-protected map from [`CacheKey`] to a value with insertion time and TTL.
///
/// `get` and `contains` treat expired entries as absent and delete them on the
/// way out. The get-check-then-insert sequence callers perform is not atomic;
/// the worst case is duplicate generation with last-write-wins, which is
/// harmless for deterministic values.
pub struct TtlCache<V> {
    entries: Mutex<HashMap<CacheKey, Entry<V>>>,
    default_ttl: Duration,
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<V> TtlCache<V> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Entry<V>>> {
        // A panic mid-insert cannot leave the map inconsistent, so a poisoned
        // lock is still usable.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of live and expired-but-unswept entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove one entry, or all entries when `key` is `None`.
    pub fn clear(&self, key: Option<&CacheKey>) {
        let mut entries = self.lock();
        if let Some(key) = key {
            entries.remove(key);
        } else {
            entries.clear();
        }
    }

    /// Delete every expired entry; returns how many were removed.
    pub fn sweep_expired(&self, now_millis: u64) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now_millis));
        before - entries.len()
    }
}

impl<V: Clone> TtlCache<V> {
    /// Live value for `key`, or `None`. Expired entries are deleted and
    /// reported as absent.
    pub fn get(&self, key: &CacheKey, now_millis: u64) -> Option<V> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if !entry.is_expired(now_millis) => Some(entry.data.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Whether a live entry exists for `key`, with the same lazy expiry as
    /// [`TtlCache::get`].
    pub fn contains(&self, key: &CacheKey, now_millis: u64) -> bool {
        self.get(key, now_millis).is_some()
    }

    /// Store `value` under `key` with the cache's default TTL.
    pub fn insert(&self, key: CacheKey, value: V, now_millis: u64) {
        self.insert_with_ttl(key, value, now_millis, self.default_ttl);
    }

    /// Store `value` under `key` with an entry-specific TTL.
    pub fn insert_with_ttl(&self, key: CacheKey, value: V, now_millis: u64, ttl: Duration) {
        self.lock().insert(
            key,
            Entry {
                data: value,
                timestamp: now_millis,
                ttl,
            },
        );
    }
}
