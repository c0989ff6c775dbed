//! Record - one product stored in the catalog.
//!
//! A [`Record`] carries the product's identity plus the two counters the
//! catalog cares about:
//! - `stock`: units on hand, moved by restocks and purchases
//! - `demand`: units ever purchased, which doubles as the popularity score

use std::fmt;

use crate::common::{Error, ProductId, Result};

/// A single product.
///
/// `id`, `name` and `day_added` are fixed at creation. `stock`, `demand`
/// and `last_purchase_day` change in place while the record sits in its
/// bucket.
///
/// # Example
/// ```
/// use warehousedb::{ProductId, Record};
///
/// let mut record = Record::new(ProductId::new(7), "kettle", 10, 1, 2);
/// record.apply_stock_delta(-4).unwrap();
/// record.apply_demand_delta(4);
/// assert_eq!(record.stock(), 6);
/// assert_eq!(record.demand(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: ProductId,
    name: String,
    stock: u64,
    demand: u64,
    day_added: u32,
    last_purchase_day: u32,
}

impl Record {
    /// Create a record. The last purchase day starts out as the day added.
    pub fn new(id: ProductId, name: impl Into<String>, stock: u64, day: u32, demand: u64) -> Self {
        Self {
            id,
            name: name.into(),
            stock,
            demand,
            day_added: day,
            last_purchase_day: day,
        }
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn stock(&self) -> u64 {
        self.stock
    }

    /// Cumulative purchased quantity plus the demand the record started with.
    #[inline]
    pub fn demand(&self) -> u64 {
        self.demand
    }

    #[inline]
    pub fn day_added(&self) -> u32 {
        self.day_added
    }

    #[inline]
    pub fn last_purchase_day(&self) -> u32 {
        self.last_purchase_day
    }

    pub fn set_last_purchase_day(&mut self, day: u32) {
        self.last_purchase_day = day;
    }

    /// Heap ordering key.
    ///
    /// Lower demand sorts first; equal demand falls back to the lower id so
    /// heap shape never depends on insertion accidents.
    #[inline]
    pub fn priority(&self) -> (u64, ProductId) {
        (self.demand, self.id)
    }

    /// Add `delta` to the stock (negative for a withdrawal).
    ///
    /// # Errors
    /// - `Error::InsufficientStock` if the withdrawal exceeds the stock on
    ///   hand. The record is left unchanged.
    pub fn apply_stock_delta(&mut self, delta: i64) -> Result<()> {
        if delta < 0 {
            let requested = delta.unsigned_abs();
            if requested > self.stock {
                return Err(Error::InsufficientStock {
                    id: self.id.0,
                    requested,
                    available: self.stock,
                });
            }
            self.stock -= requested;
        } else {
            self.stock = self.stock.saturating_add(delta.unsigned_abs());
        }
        Ok(())
    }

    /// Raise demand by `delta`. Demand never goes down.
    pub fn apply_demand_delta(&mut self, delta: u64) {
        self.demand = self.demand.saturating_add(delta);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}: {}, {}S, {}L, {}D)",
            self.id, self.name, self.stock, self.last_purchase_day, self.demand
        )
    }
}
