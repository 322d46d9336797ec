//! Greedy capacitated spatial clustering.
//!
//! # Algorithm
//!
//! Trips are built one at a time. Each trip starts from the densest seed in
//! a fixed-size sample of unassigned orders, then grows by repeatedly adding
//! the sampled order nearest to the trip centroid that still fits the
//! vehicle. An order that does not fit is skipped for the rest of the trip
//! and stays available for later trips. The trip closes when nothing in the
//! sample fits.
//!
//! # Complexity
//!
//! O(s) distance evaluations per growth step and O(s²) per seed choice,
//! where s is the sample size, so total cost grows near-linearly with the
//! number of orders.

use tracing::{debug, trace, warn};

use super::{select_seed, WorkingSet};
use crate::config::{AllocationConfig, RadiusPolicy};
use crate::distance::{centroid, haversine_km, path_length_km};
use crate::models::{GeoPoint, Order, Trip};

/// Builds capacity-bounded trips from clusterable orders.
///
/// # Examples
///
/// ```
/// use u_allocation::clustering::SpatialClusterBuilder;
/// use u_allocation::config::AllocationConfig;
/// use u_allocation::models::Order;
///
/// let orders = vec![
///     Order::new(1, 12.9716, 77.5946, 60.0),
///     Order::new(2, 12.9720, 77.5950, 30.0),
///     Order::new(3, 12.9725, 77.5955, 30.0),
/// ];
/// let refs: Vec<&Order> = orders.iter().collect();
/// let config = AllocationConfig::default();
///
/// let trips = SpatialClusterBuilder::new(&config, 100.0).build(&refs);
/// assert_eq!(trips.len(), 2);
/// assert!(trips.iter().all(|t| t.total_weight_kg() <= 100.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SpatialClusterBuilder<'c> {
    config: &'c AllocationConfig,
    vehicle_capacity_kg: f64,
}

impl<'c> SpatialClusterBuilder<'c> {
    /// Creates a builder for one vehicle capacity.
    pub fn new(config: &'c AllocationConfig, vehicle_capacity_kg: f64) -> Self {
        Self {
            config,
            vehicle_capacity_kg,
        }
    }

    /// Partitions `orders` into trips numbered from 1.
    ///
    /// Orders are expected to have passed preprocessing. Any order that could
    /// never fit a vehicle is skipped with a warning rather than placed.
    pub fn build(&self, orders: &[&Order]) -> Vec<Trip> {
        let placeable: Vec<&Order> = orders
            .iter()
            .copied()
            .filter(|o| {
                let ok = o.weight_kg() > 0.0 && o.weight_kg() <= self.vehicle_capacity_kg;
                if !ok {
                    warn!(order_id = o.id(), weight_kg = o.weight_kg(), "skipping unplaceable order");
                }
                ok
            })
            .collect();

        let mut set = WorkingSet::new(&placeable);
        let mut excluded = vec![false; set.len()];
        let mut trips = Vec::new();

        while let Some(seed) = select_seed(
            &set,
            self.config.seed_sample_size,
            self.config.neighbor_sample_size,
            self.config.neighbor_radius_km,
        ) {
            trace!(trip_id = trips.len() + 1, seed = set.order(seed).id(), "seed selected");
            let trip = self.grow_trip(&mut set, &mut excluded, seed, trips.len() + 1);
            debug!(
                trip_id = trip.trip_id(),
                orders = trip.len(),
                weight_kg = trip.total_weight_kg(),
                distance_km = trip.route_distance_km(),
                "trip finalized"
            );
            trips.push(trip);
        }

        trips
    }

    /// `excluded` is indexed by working-set position and is all `false` on
    /// entry and on return.
    fn grow_trip(
        &self,
        set: &mut WorkingSet<'_>,
        excluded: &mut [bool],
        seed: usize,
        trip_id: usize,
    ) -> Trip {
        let mut trip = Trip::new(trip_id);
        let mut members: Vec<&Order> = Vec::new();
        let mut skipped: Vec<usize> = Vec::new();

        let seed_order = set.order(seed);
        trip.push_order(seed_order);
        members.push(seed_order);
        set.remove(seed);

        loop {
            let Some(center) = centroid(members.iter().map(|o| o.location())) else {
                break;
            };
            match self.next_member(set, center, trip.total_weight_kg(), excluded, &mut skipped) {
                Some(idx) => {
                    let order = set.order(idx);
                    trip.push_order(order);
                    members.push(order);
                    set.remove(idx);
                }
                None => break,
            }
        }

        for idx in skipped {
            excluded[idx] = false;
        }

        let path: Vec<_> = members.iter().map(|o| o.location()).collect();
        trip.set_route_distance(path_length_km(&path));
        trip
    }

    /// Nearest sampled order that fits, marking closer non-fitting ones as
    /// excluded for the current trip.
    fn next_member(
        &self,
        set: &WorkingSet<'_>,
        center: GeoPoint,
        load_kg: f64,
        excluded: &mut [bool],
        skipped: &mut Vec<usize>,
    ) -> Option<usize> {
        let sample = set.sample_where(self.config.neighbor_sample_size, |i| !excluded[i]);

        let mut ranked: Vec<(f64, usize)> = sample
            .into_iter()
            .map(|i| (haversine_km(center, set.order(i).location()), i))
            .collect();
        ranked.sort_by(|a, b| {
            a.0.total_cmp(&b.0)
                .then_with(|| set.order(a.1).id().cmp(&set.order(b.1).id()))
        });

        for (dist, idx) in ranked {
            if self.config.radius_policy == RadiusPolicy::HardCutoff
                && dist > self.config.neighbor_radius_km
            {
                return None;
            }
            if load_kg + set.order(idx).weight_kg() <= self.vehicle_capacity_kg {
                return Some(idx);
            }
            excluded[idx] = true;
            skipped.push(idx);
        }
        None
    }
}
