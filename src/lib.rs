//! # u-allocation
//!
//! Delivery trip allocation by greedy capacitated spatial clustering.
//! Geotagged, weighted orders are grouped into trips that never exceed the
//! vehicle capacity, using haversine distances only.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Order, Trip, AllocationResult, Metrics)
//! - [`distance`] — Haversine distance, centroids, path length
//! - [`preprocess`] — Stage 1: validation and unallocatable partitioning
//! - [`clustering`] — Stage 2: seed selection and capacity-bounded growth
//! - [`metrics`] — Stage 3: utilization, distance and runtime aggregation
//! - [`engine`] — [`AllocationEngine`](engine::AllocationEngine) running all three stages
//! - [`config`] — Tuning parameters and radius policy
//! - [`io`] — JSON request/response boundary
//! - [`error`] — Error types

pub mod clustering;
pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod io;
pub mod metrics;
pub mod models;
pub mod preprocess;

pub use engine::{allocate, AllocationEngine};
pub use error::{AllocationError, Result};
