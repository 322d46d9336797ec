//! JSON request/response boundary.
//!
//! The request mirrors the order service's allocation body; the response is
//! the flat view handed back to it, with figures rounded for display.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AllocationConfig;
use crate::engine::allocate;
use crate::error::{AllocationError, MalformedReason, Result};
use crate::models::{AllocationResult, Metrics, Order, Trip};

fn default_capacity() -> f64 {
    100.0
}

/// An order as received over the wire, before its fields are checked.
///
/// Coordinates and weight are kept as raw JSON so that a missing or
/// non-numeric value can be reported against the order's ID instead of a
/// parser position.
///
/// # Examples
///
/// ```
/// use u_allocation::io::OrderRecord;
/// use u_allocation::models::Order;
///
/// let record: OrderRecord = serde_json::from_str(
///     r#"{"order_id": 5, "latitude": "12.97", "longitude": 77.59, "total_weight_kg": 8}"#,
/// ).unwrap();
/// let order = Order::try_from(&record).unwrap();
/// assert_eq!(order.latitude(), 12.97);
/// assert_eq!(order.weight_kg(), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order ID.
    #[serde(alias = "order_id")]
    pub id: i64,
    /// Latitude as sent: a number or numeric string.
    #[serde(default)]
    pub latitude: Option<Value>,
    /// Longitude as sent: a number or numeric string.
    #[serde(default)]
    pub longitude: Option<Value>,
    /// Weight in kilograms as sent: a number or numeric string.
    #[serde(default, alias = "total_weight_kg")]
    pub weight_kg: Option<Value>,
    /// Postal code, informational only.
    #[serde(default)]
    pub pincode: Option<String>,
}

impl OrderRecord {
    fn number(&self, field: &'static str, value: Option<&Value>) -> Result<f64> {
        let malformed = |reason| AllocationError::MalformedOrder {
            order_id: self.id,
            reason,
        };
        match value {
            None | Some(Value::Null) => Err(malformed(MalformedReason::MissingField(field))),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| malformed(MalformedReason::NonNumericField(field))),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| malformed(MalformedReason::NonNumericField(field))),
            Some(_) => Err(malformed(MalformedReason::NonNumericField(field))),
        }
    }
}

impl TryFrom<&OrderRecord> for Order {
    type Error = AllocationError;

    fn try_from(record: &OrderRecord) -> Result<Self> {
        let latitude = record.number("latitude", record.latitude.as_ref())?;
        let longitude = record.number("longitude", record.longitude.as_ref())?;
        let weight_kg = record.number("weight_kg", record.weight_kg.as_ref())?;
        let order = Order::new(record.id, latitude, longitude, weight_kg);
        Ok(match &record.pincode {
            Some(pincode) => order.with_pincode(pincode.as_str()),
            None => order,
        })
    }
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id(),
            latitude: Some(Value::from(order.latitude())),
            longitude: Some(Value::from(order.longitude())),
            weight_kg: Some(Value::from(order.weight_kg())),
            pincode: Some(order.pincode().to_string()),
        }
    }
}

/// An allocation request.
///
/// # Examples
///
/// ```
/// use u_allocation::io::AllocationRequest;
///
/// let req: AllocationRequest = serde_json::from_str(r#"{"orders": []}"#).unwrap();
/// assert_eq!(req.vehicle_capacity_kg, 100.0);
/// assert!(req.config.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Orders to allocate, unchecked until [`AllocationRequest::run`].
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    /// Vehicle capacity; 100 kg when omitted.
    #[serde(default = "default_capacity")]
    pub vehicle_capacity_kg: f64,
    /// Optional tuning overrides.
    #[serde(default)]
    pub config: Option<AllocationConfig>,
}

impl AllocationRequest {
    /// Runs the allocation this request describes.
    ///
    /// Fails with [`AllocationError::MalformedOrder`] on the first order (in
    /// request order) whose coordinates or weight are missing or not numbers.
    pub fn run(&self) -> Result<AllocationResult> {
        let orders = self
            .orders
            .iter()
            .map(Order::try_from)
            .collect::<Result<Vec<_>>>()?;
        allocate(&orders, self.vehicle_capacity_kg, self.config.as_ref())
    }
}

/// One trip in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripView {
    /// Trip number, starting at 1.
    pub trip_id: usize,
    /// Member order IDs in insertion order.
    pub orders: Vec<i64>,
    /// Load in kilograms, 2 decimals.
    pub total_weight: f64,
    /// Path length in kilometres, 2 decimals.
    pub route_distance_km: f64,
}

/// Metrics in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsView {
    /// Number of trips built.
    pub number_of_trips: usize,
    /// Mean trip utilization, 2 decimals.
    pub average_utilization_percent: f64,
    /// Sum of trip route distances, 2 decimals.
    pub total_distance_km: f64,
    /// Wall time of clustering and aggregation, 4 decimals.
    pub runtime_seconds: f64,
}

/// The serialized form of an [`AllocationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResponse {
    /// Trips in build order.
    pub trips: Vec<TripView>,
    /// IDs of orders that fit no vehicle, in request order.
    pub unallocatable_orders: Vec<i64>,
    /// Run summary.
    pub metrics: MetricsView,
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

impl From<&Trip> for TripView {
    fn from(trip: &Trip) -> Self {
        Self {
            trip_id: trip.trip_id(),
            orders: trip.order_ids().to_vec(),
            total_weight: round_to(trip.total_weight_kg(), 2),
            route_distance_km: round_to(trip.route_distance_km(), 2),
        }
    }
}

impl From<&Metrics> for MetricsView {
    fn from(m: &Metrics) -> Self {
        Self {
            number_of_trips: m.number_of_trips,
            average_utilization_percent: round_to(m.average_utilization_percent, 2),
            total_distance_km: round_to(m.total_distance_km, 2),
            runtime_seconds: round_to(m.runtime_seconds, 4),
        }
    }
}

impl From<&AllocationResult> for AllocationResponse {
    fn from(result: &AllocationResult) -> Self {
        Self {
            trips: result.trips().iter().map(TripView::from).collect(),
            unallocatable_orders: result.unallocatable_order_ids(),
            metrics: MetricsView::from(result.metrics()),
        }
    }
}

/// Parses a request, runs it, and serializes the response.
///
/// # Examples
///
/// ```
/// use u_allocation::io::allocate_json;
///
/// let body = r#"{
///     "orders": [
///         {"order_id": 1, "latitude": 12.97, "longitude": 77.59, "pincode": "560001", "total_weight_kg": 40},
///         {"order_id": 2, "latitude": 12.97, "longitude": 77.59, "pincode": "560001", "total_weight_kg": 150}
///     ],
///     "vehicle_capacity_kg": 100
/// }"#;
/// let out: serde_json::Value = serde_json::from_str(&allocate_json(body).unwrap()).unwrap();
/// assert_eq!(out["trips"][0]["orders"][0], 1);
/// assert_eq!(out["unallocatable_orders"][0], 2);
/// ```
pub fn allocate_json(request: &str) -> Result<String> {
    let request: AllocationRequest = serde_json::from_str(request)?;
    let result = request.run()?;
    Ok(serde_json::to_string(&AllocationResponse::from(&result))?)
}
