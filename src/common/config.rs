//! Configuration constants for warehousedb.

/// Number of buckets in a catalog.
///
/// Product ids are routed with `id % BUCKET_COUNT`, so the last decimal
/// digit of an id picks its home bucket.
pub const BUCKET_COUNT: usize = 10;

/// Maximum number of records a single bucket can hold.
///
/// # Memory Layout
/// Buckets use a 1-indexed heap array, so each bucket reserves
/// `BUCKET_CAPACITY + 1` slots with slot 0 left empty.
pub const BUCKET_CAPACITY: usize = 5;

/// Upper bound on records a full catalog can hold.
pub const MAX_RECORDS: usize = BUCKET_COUNT * BUCKET_CAPACITY;
