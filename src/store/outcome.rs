//! Outcome values returned by catalog mutations.
//!
//! None of these are errors. A missing id or an oversized purchase leaves
//! the catalog untouched and is reported here so callers can tell.

use crate::common::{BucketId, ProductId};
use crate::store::Record;

/// Where an added record landed and what it displaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// Id of the record that was added.
    pub id: ProductId,

    /// Bucket now holding the record.
    pub bucket: BucketId,

    /// Least popular record dropped to make room, if the bucket was full.
    pub evicted: Option<Record>,
}

impl AddOutcome {
    /// Whether the record was placed outside its home bucket.
    pub fn is_relocated(&self) -> bool {
        self.bucket != self.id.home_bucket()
    }
}

/// Result of looking up an id for a mutation that cannot be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found,
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found)
    }
}

/// Result of a purchase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Stock, demand and last purchase day were updated.
    Applied,
    /// The amount exceeded the stock on hand; nothing changed.
    Rejected,
    /// No record with this id in its bucket; nothing changed.
    NotFound,
}

impl PurchaseOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PurchaseOutcome::Applied)
    }
}
