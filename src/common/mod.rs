//! Common types and utilities shared across warehousedb.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (ProductId, BucketId)

pub mod config;
pub mod error;
mod bucket_id;
mod product_id;

pub use bucket_id::BucketId;
pub use error::{Error, Result};
pub use product_id::ProductId;
