//! Trip type.

use super::Order;

/// An ordered group of orders served by one vehicle run.
///
/// Insertion order is visiting order. The route distance is set once the
/// trip is finalized.
///
/// # Examples
///
/// ```
/// use u_allocation::models::{Order, Trip};
///
/// let mut trip = Trip::new(1);
/// trip.push_order(&Order::new(10, 0.0, 0.0, 20.0));
/// trip.push_order(&Order::new(11, 0.0, 0.0, 30.0));
/// assert_eq!(trip.order_ids(), &[10, 11]);
/// assert_eq!(trip.total_weight_kg(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    trip_id: usize,
    order_ids: Vec<i64>,
    total_weight_kg: f64,
    route_distance_km: f64,
}

impl Trip {
    /// Creates an empty trip with the given sequence number.
    pub fn new(trip_id: usize) -> Self {
        Self {
            trip_id,
            order_ids: Vec::new(),
            total_weight_kg: 0.0,
            route_distance_km: 0.0,
        }
    }

    /// Appends an order and adds its weight. Capacity is the caller's concern.
    pub fn push_order(&mut self, order: &Order) {
        self.order_ids.push(order.id());
        self.total_weight_kg += order.weight_kg();
    }

    /// Sequence number, starting at 1.
    pub fn trip_id(&self) -> usize {
        self.trip_id
    }

    /// Member order IDs in visiting order.
    pub fn order_ids(&self) -> &[i64] {
        &self.order_ids
    }

    /// Number of orders in this trip.
    pub fn len(&self) -> usize {
        self.order_ids.len()
    }

    /// Returns `true` if the trip has no orders.
    pub fn is_empty(&self) -> bool {
        self.order_ids.is_empty()
    }

    /// Returns `true` if the given order is a member.
    pub fn contains(&self, order_id: i64) -> bool {
        self.order_ids.contains(&order_id)
    }

    /// Sum of member weights.
    pub fn total_weight_kg(&self) -> f64 {
        self.total_weight_kg
    }

    /// Cumulative haversine distance along visiting order.
    pub fn route_distance_km(&self) -> f64 {
        self.route_distance_km
    }

    /// Sets the route distance (used by the cluster builder).
    pub fn set_route_distance(&mut self, km: f64) {
        self.route_distance_km = km;
    }

    /// Load as a percentage of `capacity_kg`.
    pub fn utilization_percent(&self, capacity_kg: f64) -> f64 {
        self.total_weight_kg / capacity_kg * 100.0
    }
}
