//! Allocation result, metrics and unallocatable order types.

use serde::Serialize;

use super::Trip;

/// Why an order could not be placed in any trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnallocatableReason {
    /// Weight is zero or negative.
    InvalidWeight {
        /// The offending weight.
        weight_kg: f64,
    },
    /// A single order is heavier than a whole vehicle.
    ExceedsCapacity {
        /// The order's weight.
        weight_kg: f64,
        /// Vehicle capacity for the run.
        capacity_kg: f64,
    },
}

/// An order routed to the unallocatable bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unallocatable {
    /// ID of the order.
    pub order_id: i64,
    /// Reason it was not placed.
    pub reason: UnallocatableReason,
}

impl Unallocatable {
    /// Creates a new unallocatable entry.
    pub fn new(order_id: i64, reason: UnallocatableReason) -> Self {
        Self { order_id, reason }
    }
}

/// Aggregate figures for one allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Metrics {
    /// Count of finalized trips.
    pub number_of_trips: usize,
    /// Mean of per-trip utilization; 0 when there are no trips.
    pub average_utilization_percent: f64,
    /// Sum of trip route distances.
    pub total_distance_km: f64,
    /// Wall-clock time spent clustering and aggregating.
    pub runtime_seconds: f64,
}

/// The outcome of one allocation run.
///
/// # Examples
///
/// ```
/// use u_allocation::models::{AllocationResult, Metrics};
///
/// let result = AllocationResult::new(vec![], vec![], Metrics::default());
/// assert_eq!(result.num_trips(), 0);
/// assert!(result.unallocatable_order_ids().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationResult {
    trips: Vec<Trip>,
    unallocatable: Vec<Unallocatable>,
    metrics: Metrics,
}

impl AllocationResult {
    /// Assembles a result.
    pub fn new(trips: Vec<Trip>, unallocatable: Vec<Unallocatable>, metrics: Metrics) -> Self {
        Self {
            trips,
            unallocatable,
            metrics,
        }
    }

    /// Trips in creation order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Number of trips.
    pub fn num_trips(&self) -> usize {
        self.trips.len()
    }

    /// Unallocatable orders with reasons, in input order.
    pub fn unallocatable(&self) -> &[Unallocatable] {
        &self.unallocatable
    }

    /// IDs of unallocatable orders, in input order.
    pub fn unallocatable_order_ids(&self) -> Vec<i64> {
        self.unallocatable.iter().map(|u| u.order_id).collect()
    }

    /// Aggregate metrics.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Total number of orders placed in trips.
    pub fn num_served(&self) -> usize {
        self.trips.iter().map(|t| t.len()).sum()
    }

    /// Returns the trip containing `order_id`, if any.
    pub fn trip_of(&self, order_id: i64) -> Option<&Trip> {
        self.trips.iter().find(|t| t.contains(order_id))
    }
}
