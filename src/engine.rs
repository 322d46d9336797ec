//! Allocation engine tying the three stages together.

use tracing::{info, info_span};

use crate::clustering::SpatialClusterBuilder;
use crate::config::{validate_capacity, AllocationConfig};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{AllocationResult, Order};
use crate::preprocess::preprocess_orders;

/// Runs validation, clustering and metrics for one batch of orders.
///
/// The engine holds only its configuration. Each call to
/// [`AllocationEngine::run`] works on a private copy of the working set, so
/// one engine may be shared across threads.
///
/// # Examples
///
/// ```
/// use u_allocation::engine::AllocationEngine;
/// use u_allocation::models::Order;
///
/// let orders = vec![
///     Order::new(1, 19.0760, 72.8777, 25.0),
///     Order::new(2, 19.0765, 72.8780, 25.0),
///     Order::new(3, 19.0770, 72.8785, 25.0),
///     Order::new(4, 19.0775, 72.8790, 25.0),
///     Order::new(5, 19.0775, 72.8790, 150.0),
/// ];
///
/// let result = AllocationEngine::default().run(&orders, 100.0).unwrap();
/// assert_eq!(result.num_trips(), 1);
/// assert_eq!(result.unallocatable_order_ids(), vec![5]);
/// assert!((result.metrics().average_utilization_percent - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    config: AllocationConfig,
}

impl AllocationEngine {
    /// Creates an engine with the given tuning.
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    /// Tuning in use.
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Allocates `orders` into trips for a vehicle of `vehicle_capacity_kg`.
    ///
    /// Fails on a non-positive capacity, invalid tuning, or a malformed
    /// order; per-order weight problems are reported in the result instead.
    pub fn run(&self, orders: &[Order], vehicle_capacity_kg: f64) -> Result<AllocationResult> {
        let span = info_span!("allocation.run", orders = orders.len(), vehicle_capacity_kg);
        let _guard = span.enter();

        validate_capacity(vehicle_capacity_kg)?;
        self.config.validate()?;

        let parts = preprocess_orders(orders, vehicle_capacity_kg)?;

        let collector = MetricsCollector::start();
        let trips =
            SpatialClusterBuilder::new(&self.config, vehicle_capacity_kg).build(&parts.clusterable);
        let metrics = collector.finish(&trips, vehicle_capacity_kg);

        info!(
            trips = metrics.number_of_trips,
            unallocatable = parts.unallocatable.len(),
            utilization = metrics.average_utilization_percent,
            distance_km = metrics.total_distance_km,
            runtime_s = metrics.runtime_seconds,
            "allocation complete"
        );

        Ok(AllocationResult::new(trips, parts.unallocatable, metrics))
    }
}

/// One-shot allocation with optional tuning; `None` uses the defaults.
pub fn allocate(
    orders: &[Order],
    vehicle_capacity_kg: f64,
    config: Option<&AllocationConfig>,
) -> Result<AllocationResult> {
    let engine = AllocationEngine::new(config.cloned().unwrap_or_default());
    engine.run(orders, vehicle_capacity_kg)
}
