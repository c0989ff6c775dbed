//! Catalog statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics tracked by the catalog.
///
/// All fields are atomic so they can be bumped and read through `&self`.
///
/// # Memory Ordering
/// We use `Ordering::Relaxed` for all operations: counters are independent
/// and only need atomicity, not ordering against each other.
///
/// # Example
/// ```
/// use warehousedb::CatalogStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = CatalogStats::new();
/// stats.evictions.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.evictions.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct CatalogStats {
    /// Records inserted, whichever bucket they landed in.
    pub inserts: AtomicU64,

    /// Records dropped to make room in a full bucket.
    pub evictions: AtomicU64,

    /// Records placed outside their home bucket by probing placement.
    pub relocations: AtomicU64,

    /// Successful restocks.
    pub restocks: AtomicU64,

    /// Purchases that were applied.
    pub purchases: AtomicU64,

    /// Purchases refused because they exceeded the stock on hand.
    pub rejected_purchases: AtomicU64,

    /// Records removed by explicit deletion.
    pub deletes: AtomicU64,

    /// Restock, purchase or delete requests for an id not in its bucket.
    pub misses: AtomicU64,
}

impl CatalogStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            inserts: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            relocations: AtomicU64::new(0),
            restocks: AtomicU64::new(0),
            purchases: AtomicU64::new(0),
            rejected_purchases: AtomicU64::new(0),
            deletes: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            relocations: self.relocations.load(Ordering::Relaxed),
            restocks: self.restocks.load(Ordering::Relaxed),
            purchases: self.purchases.load(Ordering::Relaxed),
            rejected_purchases: self.rejected_purchases.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        self.relocations.store(0, Ordering::Relaxed);
        self.restocks.store(0, Ordering::Relaxed);
        self.purchases.store(0, Ordering::Relaxed);
        self.rejected_purchases.store(0, Ordering::Relaxed);
        self.deletes.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Default for CatalogStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of catalog statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub inserts: u64,
    pub evictions: u64,
    pub relocations: u64,
    pub restocks: u64,
    pub purchases: u64,
    pub rejected_purchases: u64,
    pub deletes: u64,
    pub misses: u64,
}

impl StatsSnapshot {
    /// Restock, purchase and delete requests, found or not.
    pub fn lookups(&self) -> u64 {
        self.restocks + self.purchases + self.rejected_purchases + self.deletes + self.misses
    }

    /// Fraction of lookups that found their id (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            (total - self.misses) as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, evictions: {}, relocations: {}, misses: {}, hit_rate: {:.2}% }}",
            self.inserts,
            self.evictions,
            self.relocations,
            self.misses,
            self.hit_rate() * 100.0
        )
    }
}
