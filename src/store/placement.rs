//! Placement strategies for new records.
//!
//! Currently implements:
//! - [`Placement::Home`] - always the home bucket, evicting when full
//! - [`Placement::Probing`] - home bucket first, then the first bucket with
//!   room in round-robin order, evicting at home only when every bucket is full

use crate::common::config::BUCKET_COUNT;
use crate::common::BucketId;

/// How the catalog picks a bucket for a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Home,
    Probing,
}

/// Round-robin walk over every bucket, starting at `start`.
///
/// Yields each of the `BUCKET_COUNT` buckets exactly once:
/// `start, start + 1, ..., 9, 0, ..., start - 1`.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    next: BucketId,
    remaining: usize,
}

impl ProbeSequence {
    pub fn new(start: BucketId) -> Self {
        Self {
            next: start,
            remaining: BUCKET_COUNT,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = BucketId;

    fn next(&mut self) -> Option<BucketId> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.next = current.next();
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}
