//! Product identifier type.

use std::fmt;

use crate::common::config::BUCKET_COUNT;
use crate::common::BucketId;

/// Identifies a product in the catalog.
///
/// Ids are the catalog's only key. Two records with the same id must never
/// be stored at once; the catalog does not check for this.
///
/// # Example
/// ```
/// use warehousedb::{BucketId, ProductId};
///
/// let id = ProductId::new(43);
/// assert_eq!(id.home_bucket(), BucketId::new(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u32);

impl ProductId {
    /// Create a new ProductId.
    #[inline]
    pub fn new(id: u32) -> Self {
        ProductId(id)
    }

    /// The bucket this id routes to: `id % BUCKET_COUNT`.
    #[inline]
    pub fn home_bucket(&self) -> BucketId {
        BucketId::new(self.0 as usize % BUCKET_COUNT)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
