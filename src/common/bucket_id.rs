//! Bucket identifier type.

use std::fmt;

use crate::common::config::BUCKET_COUNT;

/// Identifies a bucket in the catalog.
///
/// Using `usize` so it can index the bucket array directly:
/// `buckets[bucket_id.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BucketId(pub usize);

impl BucketId {
    /// Create a new BucketId.
    #[inline]
    pub fn new(id: usize) -> Self {
        BucketId(id)
    }

    /// The next bucket in round-robin order, wrapping after the last one.
    #[inline]
    pub fn next(&self) -> Self {
        BucketId((self.0 + 1) % BUCKET_COUNT)
    }
}

impl fmt::Display for BucketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bucket({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_id_new() {
        let bid = BucketId::new(4);
        assert_eq!(bid.0, 4);
    }

    #[test]
    fn test_bucket_id_next_wraps() {
        assert_eq!(BucketId::new(3).next(), BucketId::new(4));
        assert_eq!(BucketId::new(9).next(), BucketId::new(0));
    }

    #[test]
    fn test_bucket_id_display() {
        assert_eq!(format!("{}", BucketId::new(7)), "Bucket(7)");
    }
}
