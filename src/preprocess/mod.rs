//! Stage 1: order validation and partitioning.
//!
//! Malformed orders abort the run. Orders with a non-positive weight or a
//! weight above vehicle capacity are set aside as unallocatable; everything
//! else goes on to clustering in ascending ID order.

mod partition;

pub use partition::{check_order, classify, preprocess_orders, Partitioned};
