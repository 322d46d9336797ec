//! Run metrics aggregation.

use std::time::Instant;

use crate::models::{Metrics, Trip};

/// Times a run and aggregates trip figures.
///
/// Start it immediately before clustering; [`MetricsCollector::finish`]
/// stops the clock after aggregation.
///
/// # Examples
///
/// ```
/// use u_allocation::metrics::MetricsCollector;
///
/// let collector = MetricsCollector::start();
/// let metrics = collector.finish(&[], 100.0);
/// assert_eq!(metrics.number_of_trips, 0);
/// assert_eq!(metrics.average_utilization_percent, 0.0);
/// assert!(metrics.runtime_seconds >= 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MetricsCollector {
    started: Instant,
}

impl MetricsCollector {
    /// Starts the monotonic clock.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Aggregates `trips` and records elapsed time since [`MetricsCollector::start`].
    pub fn finish(self, trips: &[Trip], vehicle_capacity_kg: f64) -> Metrics {
        let mut metrics = aggregate(trips, vehicle_capacity_kg);
        metrics.runtime_seconds = self.started.elapsed().as_secs_f64();
        metrics
    }
}

/// Trip count, mean utilization and total distance, with zero runtime.
pub fn aggregate(trips: &[Trip], vehicle_capacity_kg: f64) -> Metrics {
    let number_of_trips = trips.len();
    let average_utilization_percent = if number_of_trips == 0 {
        0.0
    } else {
        trips
            .iter()
            .map(|t| t.utilization_percent(vehicle_capacity_kg))
            .sum::<f64>()
            / number_of_trips as f64
    };

    Metrics {
        number_of_trips,
        average_utilization_percent,
        total_distance_km: trips.iter().map(|t| t.route_distance_km()).sum(),
        runtime_seconds: 0.0,
    }
}
