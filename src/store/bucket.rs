//! Bucket - a bounded priority queue of records.
//!
//! A [`Bucket`] is a fixed-capacity binary heap laid out in an array:
//! - Slot 0 is never used, so the children of position `i` are `2i` and `2i + 1`
//! - The root (position 1) always holds the least popular record
//! - Inserting into a full bucket first evicts the root

use std::fmt;

use crate::common::config::BUCKET_CAPACITY;
use crate::common::ProductId;
use crate::store::Record;

/// A capacity-bounded min-heap over [`Record::priority`].
///
/// # Layout
/// ```text
///   slots: [ -- | r1 | r2 | r3 | r4 | r5 ]
///            0    1    2    3    4    5
///
///              r1
///            /    \
///          r2      r3
///         /  \
///       r4    r5
/// ```
///
/// Positions are 1-indexed everywhere in this API. Position 0 and positions
/// past `size()` are empty.
///
/// # Example
/// ```
/// use warehousedb::{Bucket, ProductId, Record};
///
/// let mut bucket = Bucket::new();
/// bucket.insert(Record::new(ProductId::new(13), "mug", 4, 1, 5));
/// bucket.insert(Record::new(ProductId::new(3), "pan", 2, 1, 1));
///
/// assert_eq!(bucket.at(1).map(|r| r.id()), Some(ProductId::new(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    slots: [Option<Record>; BUCKET_CAPACITY + 1],
    size: usize,
}

impl Bucket {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            size: 0,
        }
    }

    // ========================================================================
    // Occupancy
    // ========================================================================

    #[inline]
    pub const fn capacity(&self) -> usize {
        BUCKET_CAPACITY
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.size == BUCKET_CAPACITY
    }

    // ========================================================================
    // Positional access
    // ========================================================================

    /// Record at 1-indexed heap position `i`, or `None` if the slot is empty.
    pub fn at(&self, i: usize) -> Option<&Record> {
        if i == 0 || i > self.size {
            return None;
        }
        self.slots[i].as_ref()
    }

    pub(crate) fn at_mut(&mut self, i: usize) -> Option<&mut Record> {
        if i == 0 || i > self.size {
            return None;
        }
        self.slots[i].as_mut()
    }

    /// Heap position of the record with the given id.
    ///
    /// Linear scan, bounded by the capacity.
    pub fn position_of(&self, id: ProductId) -> Option<usize> {
        (1..=self.size).find(|&i| self.slots[i].as_ref().is_some_and(|r| r.id() == id))
    }

    pub fn get(&self, id: ProductId) -> Option<&Record> {
        self.position_of(id).and_then(|i| self.at(i))
    }

    /// Records in heap-array order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.slots[1..=self.size].iter().flatten()
    }

    // ========================================================================
    // Heap primitives
    // ========================================================================

    /// Place `record` at position `size + 1` without restoring heap order.
    ///
    /// Callers follow up with [`Bucket::sift_up`] on the new position.
    ///
    /// # Panics
    /// Panics if the bucket is full.
    pub fn append(&mut self, record: Record) {
        assert!(!self.is_full(), "append on a full bucket");

        self.size += 1;
        self.slots[self.size] = Some(record);
    }

    /// Exchange the records at two positions.
    ///
    /// # Panics
    /// Panics if either position is past the capacity.
    #[inline]
    pub fn swap_positions(&mut self, i: usize, j: usize) {
        self.slots.swap(i, j);
    }

    /// Remove and return the record at position `size`.
    pub fn pop_last(&mut self) -> Option<Record> {
        if self.size == 0 {
            return None;
        }
        let last = self.slots[self.size].take();
        self.size -= 1;
        last
    }

    /// Move the record at `i` toward the root while it outranks its parent.
    ///
    /// Returns the position the record ended up at.
    pub fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 1 && i <= self.size && self.precedes(i, i / 2) {
            self.slots.swap(i, i / 2);
            i /= 2;
        }
        i
    }

    /// Move the record at `i` toward the leaves while a child outranks it.
    ///
    /// Always swaps with the more eligible child. Returns the position the
    /// record ended up at.
    pub fn sift_down(&mut self, mut i: usize) -> usize {
        if i == 0 {
            return i;
        }
        loop {
            let left = 2 * i;
            let right = left + 1;
            let mut target = i;

            if left <= self.size && self.precedes(left, target) {
                target = left;
            }
            if right <= self.size && self.precedes(right, target) {
                target = right;
            }
            if target == i {
                return i;
            }

            self.slots.swap(i, target);
            i = target;
        }
    }

    /// Restore heap order around position `i` after its record changed
    /// priority or was replaced.
    pub fn repair(&mut self, i: usize) -> usize {
        let moved = self.sift_up(i);
        if moved == i {
            self.sift_down(i)
        } else {
            moved
        }
    }

    // ========================================================================
    // Bounded queue operations
    // ========================================================================

    /// Insert a record, evicting the least popular one first if full.
    ///
    /// Returns the evicted record, if any.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        let evicted = if self.is_full() { self.evict() } else { None };

        self.append(record);
        self.sift_up(self.size);

        evicted
    }

    /// Remove the least popular record (the root).
    ///
    /// Swaps root with the last slot, drops it, then sifts the new root down.
    pub fn evict(&mut self) -> Option<Record> {
        self.remove_at(1)
    }

    /// Remove the record at position `i` and repair the heap around the hole.
    pub fn remove_at(&mut self, i: usize) -> Option<Record> {
        if i == 0 || i > self.size {
            return None;
        }

        self.swap_positions(i, self.size);
        let removed = self.pop_last();
        if i <= self.size {
            self.repair(i);
        }
        removed
    }

    /// Check the heap invariant over every parent/child pair.
    pub fn is_heap(&self) -> bool {
        (2..=self.size).all(|child| !self.precedes(child, child / 2))
    }

    /// Whether the record at `i` ranks strictly before the record at `j`.
    fn precedes(&self, i: usize, j: usize) -> bool {
        match (&self.slots[i], &self.slots[j]) {
            (Some(a), Some(b)) => a.priority() < b.priority(),
            _ => false,
        }
    }
}

impl Default for Bucket {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (n, record) in self.iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", record)?;
        }
        write!(f, "]")
    }
}
