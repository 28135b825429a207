use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::storage::clock::{Clock, SystemClock};

/// TTL of the football data store.
pub const FOOTBALL_TTL: Duration = Duration::from_secs(5 * 60);
/// TTL of the odds store.
pub const ODDS_TTL: Duration = Duration::from_secs(3 * 60);

type Payload = Arc<dyn Any + Send + Sync>;

/// A memoized provider response
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub key: String,
    pub payload: T,
    pub stored_at: Instant,
}

impl<T> CacheEntry<T> {
    pub fn new(key: String, payload: T, stored_at: Instant) -> Self {
        Self { key, payload, stored_at }
    }

    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.stored_at)
    }

    /// An entry is live while its age is strictly below the TTL.
    pub fn is_live(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) < ttl
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub total_entries: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }
}

/// Time-boxed memoization keyed by an opaque string.
///
/// One store is shared per provider; cloning is cheap and every clone sees the
/// same entries. Payloads are type-erased so a single store can hold every
/// response type of a provider. Looking a key up with a different type than it
/// was stored with is a miss.
///
/// Locks are only held for the synchronous lookup and the final write, never
/// across the producer's `.await`. Two overlapping misses for the same key both
/// run their producer and the one that completes last wins.
#[derive(Clone)]
pub struct CacheStore {
    name: &'static str,
    entries: Arc<RwLock<HashMap<String, CacheEntry<Payload>>>>,
    stats: Arc<RwLock<CacheStats>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore")
            .field("name", &self.name)
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}

impl CacheStore {
    pub fn new(name: &'static str, ttl: Duration) -> Self {
        Self::with_clock(name, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(name: &'static str, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            name,
            entries: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(RwLock::new(CacheStats::default())),
            ttl,
            clock,
        }
    }

    pub fn football() -> Self {
        Self::new("football", FOOTBALL_TTL)
    }

    pub fn odds() -> Self {
        Self::new("odds", ODDS_TTL)
    }

    /// Return the live payload for `key`, or run `producer` and memoize its result.
    ///
    /// A failing producer leaves the store untouched, so the next call retries.
    pub async fn fetch<T, F, Fut>(&self, key: &str, producer: F) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(hit) = self.lookup::<T>(key) {
            trace!("{} cache hit: {}", self.name, key);
            return Ok(hit);
        }

        debug!("{} cache miss: {}", self.name, key);
        match producer().await {
            Ok(value) => {
                self.store(key, value.clone());
                Ok(value)
            }
            Err(e) => {
                debug!("{} producer failed for {}, nothing cached: {}", self.name, key, e);
                Err(e)
            }
        }
    }

    /// Live payload for `key` without touching the producer path.
    pub fn peek<T>(&self, key: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let now = self.clock.now();
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|entry| entry.is_live(now, self.ttl))
            .and_then(|entry| (*entry.payload).downcast_ref::<T>().cloned())
    }

    fn lookup<T>(&self, key: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let now = self.clock.now();
        let entries = self.entries.read();
        let mut stats = self.stats.write();

        match entries.get(key) {
            Some(entry) if entry.is_live(now, self.ttl) => {
                match (*entry.payload).downcast_ref::<T>() {
                    Some(value) => {
                        stats.record_hit();
                        Some(value.clone())
                    }
                    None => {
                        stats.record_miss();
                        None
                    }
                }
            }
            Some(_) => {
                stats.record_expiration();
                stats.record_miss();
                None
            }
            None => {
                stats.record_miss();
                None
            }
        }
    }

    fn store<T>(&self, key: &str, value: T)
    where
        T: Send + Sync + 'static,
    {
        let entry = CacheEntry::new(key.to_string(), Arc::new(value) as Payload, self.clock.now());
        let mut entries = self.entries.write();
        let mut stats = self.stats.write();

        entries.insert(key.to_string(), entry);
        stats.total_entries = entries.len();
    }

    /// Drop every entry at once.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        let mut stats = self.stats.write();

        entries.clear();
        stats.total_entries = 0;
        debug!("{} cache cleared", self.name);
    }

    /// True only if `key` holds an entry that would still be served.
    pub fn contains(&self, key: &str) -> bool {
        let now = self.clock.now();
        self.entries
            .read()
            .get(key)
            .map(|entry| entry.is_live(now, self.ttl))
            .unwrap_or(false)
    }

    /// Stored entries, including ones past their TTL that have not been refreshed yet.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.read().clone()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// `operation:` followed by the JSON encoding of the parameters.
pub fn cache_key<P: Serialize + ?Sized>(operation: &str, params: &P) -> String {
    match serde_json::to_string(params) {
        Ok(encoded) => format!("{}:{}", operation, encoded),
        Err(_) => operation.to_string(),
    }
}
