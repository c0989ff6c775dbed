//! Product storage.
//!
//! The catalog is a fixed array of buckets, each a small heap that keeps its
//! least popular product at the root so it can be evicted cheaply.
//!
//! # Components
//! - [`Catalog`] - Routes ids to buckets and runs every operation
//! - [`Bucket`] - Bounded array-backed min-heap over records
//! - [`Record`] - One product and its counters
//! - [`CatalogStats`] - Operation counters
//! - [`placement`] - Bucket selection for new records

mod bucket;
mod catalog;
mod outcome;
pub mod placement;
mod record;
mod stats;

pub use bucket::Bucket;
pub use catalog::Catalog;
pub use outcome::{AddOutcome, Lookup, PurchaseOutcome};
pub use placement::Placement;
pub use record::Record;
pub use stats::{CatalogStats, StatsSnapshot};
