//! Bounded, time-expiring path cache.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use gridnav_core::Cell;

use crate::config::SearchConfig;

/// Hit/miss/eviction counters, cumulative since construction or the last
/// [`PathCache::clear`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

struct CacheEntry {
    path: Vec<Cell>,
    created: Instant,
    hits: u32,
}

/// Caches computed paths keyed by directed (start, goal) pairs.
///
/// Entries expire after a TTL and are evicted oldest-inserted-first in
/// batches once the cache is full; recency of use does not protect an
/// entry. The cache cannot observe grid mutation, so whoever mutates
/// obstacles must call [`PathCache::clear`].
pub struct PathCache {
    entries: HashMap<(Cell, Cell), CacheEntry>,
    /// Insertion order of live keys, oldest first.
    order: VecDeque<(Cell, Cell)>,
    ttl: Duration,
    capacity: usize,
    eviction_batch: usize,
    stats: CacheStats,
}

impl PathCache {
    /// Create a cache with the given TTL, capacity, and eviction batch
    /// size.
    pub fn new(ttl: Duration, capacity: usize, eviction_batch: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            ttl,
            capacity,
            eviction_batch: eviction_batch.max(1),
            stats: CacheStats::default(),
        }
    }

    /// Create a cache from the engine configuration.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.cache_ttl, config.cache_capacity, config.eviction_batch)
    }

    /// Look up a cached path.
    ///
    /// Stale entries are evicted and count as misses. Returns a copy of
    /// the cached path; mutating it cannot corrupt the cache.
    pub fn get(&mut self, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
        let key = (start, goal);
        match self.entries.get_mut(&key) {
            Some(entry) if entry.created.elapsed() <= self.ttl => {
                entry.hits += 1;
                self.stats.hits += 1;
                Some(entry.path.clone())
            }
            Some(_) => {
                self.entries.remove(&key);
                self.order.retain(|k| *k != key);
                self.stats.misses += 1;
                None
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Insert a path, evicting the oldest entries in bulk if the cache
    /// is full.
    pub fn put(&mut self, start: Cell, goal: Cell, path: Vec<Cell>) {
        let key = (start, goal);
        if self.entries.contains_key(&key) {
            // Re-inserting refreshes both the entry and its age.
            self.order.retain(|k| *k != key);
        } else if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.entries.insert(
            key,
            CacheEntry {
                path,
                created: Instant::now(),
                hits: 0,
            },
        );
        self.order.push_back(key);
    }

    /// Drop every entry and reset the counters.
    ///
    /// Must be called whenever the grid's obstacle layout changes.
    pub fn clear(&mut self) {
        log::debug!("path cache cleared ({} entries)", self.entries.len());
        self.entries.clear();
        self.order.clear();
        self.stats = CacheStats::default();
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cumulative counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    fn evict_oldest(&mut self) {
        let mut evicted = 0;
        while evicted < self.eviction_batch {
            let Some(key) = self.order.pop_front() else {
                break;
            };
            if self.entries.remove(&key).is_some() {
                evicted += 1;
            }
        }
        self.stats.evictions += evicted as u64;
        log::debug!("path cache evicted {evicted} oldest entries");
    }
}
