//! Catalog - the router over a fixed array of buckets.
//!
//! The [`Catalog`] provides:
//! - Routing of product ids to buckets (`id % BUCKET_COUNT`)
//! - Add, restock, purchase and delete on the routed bucket
//! - Probing placement that fills empty slots before evicting anything
//! - A deterministic text snapshot of every bucket

use std::fmt;

use tracing::{debug, trace};

use crate::common::config::BUCKET_COUNT;
use crate::common::{BucketId, Error, ProductId, Result};
use crate::store::placement::{Placement, ProbeSequence};
use crate::store::{AddOutcome, Bucket, CatalogStats, Lookup, PurchaseOutcome, Record, StatsSnapshot};

/// A fixed set of bounded popularity heaps keyed by product id.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                         Catalog                          │
/// │   id ──▶ id % 10 ──▶ buckets: [Bucket; 10]               │
/// │                      [B0] [B1] [B2] ... [B9]             │
/// │                       │                                  │
/// │                       ▼                                  │
/// │              min-heap of ≤ 5 Records by demand           │
/// │  ┌──────────────┐                                        │
/// │  │    stats     │  atomic counters                       │
/// │  └──────────────┘                                        │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// Every operation touches one bucket, except probing placement which
/// reads occupancy across buckets before writing to one.
///
/// Lookups (restock, purchase, delete, get) only search the routed bucket.
/// A record placed elsewhere by [`Catalog::better_add_product`] is not
/// reachable by id.
///
/// # Usage
/// ```
/// use warehousedb::{Catalog, PurchaseOutcome};
///
/// let mut catalog = Catalog::new();
/// catalog.add_product(7u32, "kettle", 10, 1, 2);
///
/// assert_eq!(catalog.purchase_product(7u32, 5, 4), PurchaseOutcome::Applied);
/// assert_eq!(catalog.purchase_product(7u32, 6, 100), PurchaseOutcome::Rejected);
/// assert_eq!(catalog.get(7u32).unwrap().stock(), 6);
/// ```
#[derive(Debug)]
pub struct Catalog {
    buckets: [Bucket; BUCKET_COUNT],
    stats: CatalogStats,
}

impl Catalog {
    /// Create a catalog with every bucket empty.
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| Bucket::new()),
            stats: CatalogStats::new(),
        }
    }

    /// Home bucket for an id.
    #[inline]
    pub fn route(id: impl Into<ProductId>) -> BucketId {
        id.into().home_bucket()
    }

    // ========================================================================
    // Public API: Insertion
    // ========================================================================

    /// Add a product to its home bucket.
    ///
    /// If the bucket is full its least popular record is evicted first and
    /// returned in the outcome.
    pub fn add_product(
        &mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        stock: u64,
        day: u32,
        demand: u64,
    ) -> AddOutcome {
        self.insert_with(Placement::Home, Record::new(id.into(), name, stock, day, demand))
    }

    /// Add a product, preferring any free slot over an eviction.
    ///
    /// Tries the home bucket, then every other bucket in round-robin order.
    /// Only when all buckets are full does the home bucket evict.
    pub fn better_add_product(
        &mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        stock: u64,
        day: u32,
        demand: u64,
    ) -> AddOutcome {
        self.insert_with(Placement::Probing, Record::new(id.into(), name, stock, day, demand))
    }

    /// Insert an already built record using the given placement strategy.
    pub fn insert_with(&mut self, placement: Placement, record: Record) -> AddOutcome {
        let id = record.id();
        let home = id.home_bucket();

        let target = match placement {
            Placement::Home => home,
            Placement::Probing => ProbeSequence::new(home)
                .find(|b| !self.buckets[b.0].is_full())
                .unwrap_or(home),
        };

        let evicted = self.buckets[target.0].insert(record);

        CatalogStats::bump(&self.stats.inserts);
        if let Some(victim) = &evicted {
            CatalogStats::bump(&self.stats.evictions);
            debug!(
                bucket = target.0,
                evicted = victim.id().0,
                demand = victim.demand(),
                incoming = id.0,
                "evicted least popular record"
            );
        }
        if target != home {
            CatalogStats::bump(&self.stats.relocations);
            debug!(id = id.0, home = home.0, bucket = target.0, "relocated record");
        } else {
            trace!(id = id.0, bucket = target.0, "inserted record");
        }

        AddOutcome {
            id,
            bucket: target,
            evicted,
        }
    }

    // ========================================================================
    // Public API: Mutation by id
    // ========================================================================

    /// Add `amount` units of stock to a product.
    ///
    /// Demand is untouched, so heap order needs no repair.
    pub fn restock_product(&mut self, id: impl Into<ProductId>, amount: u32) -> Lookup {
        let id = id.into();
        let home = id.home_bucket();

        let Some(pos) = self.buckets[home.0].position_of(id) else {
            self.miss(id, "restock");
            return Lookup::NotFound;
        };

        if let Some(record) = self.buckets[home.0].at_mut(pos) {
            // Positive deltas never fail.
            if record.apply_stock_delta(i64::from(amount)).is_ok() {
                CatalogStats::bump(&self.stats.restocks);
            }
        }
        Lookup::Found
    }

    /// Sell `amount` units of a product on `day`.
    ///
    /// Applies only when `amount` does not exceed the stock on hand. On
    /// success the purchase raises demand, so the record is sifted from its
    /// actual heap position.
    pub fn purchase_product(&mut self, id: impl Into<ProductId>, day: u32, amount: u32) -> PurchaseOutcome {
        let id = id.into();
        let home = id.home_bucket();

        let Some(pos) = self.buckets[home.0].position_of(id) else {
            self.miss(id, "purchase");
            return PurchaseOutcome::NotFound;
        };

        let bucket = &mut self.buckets[home.0];
        let Some(record) = bucket.at_mut(pos) else {
            return PurchaseOutcome::NotFound;
        };

        if let Err(err) = record.apply_stock_delta(-i64::from(amount)) {
            CatalogStats::bump(&self.stats.rejected_purchases);
            debug!(id = id.0, %err, "purchase rejected");
            return PurchaseOutcome::Rejected;
        }
        record.set_last_purchase_day(day);
        record.apply_demand_delta(u64::from(amount));

        bucket.repair(pos);
        CatalogStats::bump(&self.stats.purchases);
        PurchaseOutcome::Applied
    }

    /// Remove a product, returning it if it was in its home bucket.
    pub fn delete_product(&mut self, id: impl Into<ProductId>) -> Option<Record> {
        let id = id.into();
        let bucket = &mut self.buckets[id.home_bucket().0];

        let removed = bucket.position_of(id).and_then(|pos| bucket.remove_at(pos));
        match &removed {
            Some(_) => CatalogStats::bump(&self.stats.deletes),
            None => self.miss(id, "delete"),
        }
        removed
    }

    fn miss(&self, id: ProductId, op: &'static str) {
        CatalogStats::bump(&self.stats.misses);
        debug!(id = id.0, op, "id not found in its bucket");
    }

    // ========================================================================
    // Public API: Read-only access
    // ========================================================================

    /// Look up a product in its home bucket.
    pub fn get(&self, id: impl Into<ProductId>) -> Option<&Record> {
        let id = id.into();
        self.buckets[id.home_bucket().0].get(id)
    }

    /// Borrow one bucket by index.
    ///
    /// # Errors
    /// - `Error::BucketOutOfRange` if `index >= BUCKET_COUNT`
    pub fn bucket(&self, index: usize) -> Result<&Bucket> {
        self.buckets.get(index).ok_or(Error::BucketOutOfRange(index))
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Total number of records across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Bucket::size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    /// Get a snapshot of the catalog's statistics.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Render every bucket, one per line, in index order.
    ///
    /// ```text
    /// [
    ///     [(3: pan, 2S, 1L, 1D), (13: mug, 4S, 1L, 5D)]
    ///     []
    ///     ...
    /// ]
    /// ```
    pub fn snapshot(&self) -> String {
        self.to_string()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for bucket in &self.buckets {
            writeln!(f, "\t{}", bucket)?;
        }
        write!(f, "]")
    }
}
