//! warehousedb - A product catalog built from bounded popularity heaps.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          warehousedb                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Command Layer (command/)                    │   │
//! │  │       Script parser → Command → Catalog operations       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Store (store/)                            │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Catalog: id % 10 → one of 10 Buckets            │   │   │
//! │  │   │  Placement: Home | Probing                       │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      Bucket (bounded min-heap of 5) + Record + Stats     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (ProductId, BucketId, Error, config)
//! - [`store`] - Catalog, buckets and records
//! - [`command`] - Command scripts and their file I/O
//!
//! # Quick Start
//! ```
//! use warehousedb::Catalog;
//!
//! let mut catalog = Catalog::new();
//! catalog.add_product(13u32, "mug", 4, 1, 5);
//! catalog.add_product(3u32, "pan", 2, 1, 1);
//!
//! // Both live in bucket 3, least popular first
//! let bucket = catalog.bucket(3).unwrap();
//! assert_eq!(bucket.at(1).unwrap().name(), "pan");
//! ```

pub mod command;
pub mod common;
pub mod store;

// Re-export commonly used items at crate root for convenience
pub use common::config::{BUCKET_CAPACITY, BUCKET_COUNT};
pub use common::{BucketId, Error, ProductId, Result};

pub use store::{
    AddOutcome, Bucket, Catalog, CatalogStats, Lookup, Placement, PurchaseOutcome, Record,
    StatsSnapshot,
};
