//! Domain model types for trip allocation.
//!
//! Provides the core records: geotagged orders, trips as ordered groups of
//! orders under one vehicle capacity, and the result of an allocation run
//! with its metrics and unallocatable orders.

mod order;
mod result;
mod trip;

pub use order::{GeoPoint, Order};
pub use result::{AllocationResult, Metrics, Unallocatable, UnallocatableReason};
pub use trip::Trip;
