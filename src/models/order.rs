//! Order and coordinate types.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_allocation::models::GeoPoint;
///
/// let p = GeoPoint::new(12.9716, 77.5946);
/// assert_eq!(p.latitude(), 12.9716);
/// assert!(p.is_valid());
/// assert!(!GeoPoint::new(91.0, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a coordinate. No range checking is done here; see [`GeoPoint::is_valid`].
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if both components are finite and within
    /// `[-90, 90]` / `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A geotagged delivery order.
///
/// Orders are supplied fully resolved by the caller. The pincode is carried
/// along for reporting and never influences allocation.
///
/// Deserialization also accepts `order_id` and `total_weight_kg`, the field
/// names used by the order service.
///
/// # Examples
///
/// ```
/// use u_allocation::models::Order;
///
/// let o = Order::new(7, 12.9716, 77.5946, 25.0).with_pincode("560001");
/// assert_eq!(o.id(), 7);
/// assert_eq!(o.weight_kg(), 25.0);
/// assert_eq!(o.pincode(), "560001");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(alias = "order_id")]
    id: i64,
    latitude: f64,
    longitude: f64,
    #[serde(alias = "total_weight_kg")]
    weight_kg: f64,
    #[serde(default)]
    pincode: String,
}

impl Order {
    /// Creates an order with an empty pincode.
    pub fn new(id: i64, latitude: f64, longitude: f64, weight_kg: f64) -> Self {
        Self {
            id,
            latitude,
            longitude,
            weight_kg,
            pincode: String::new(),
        }
    }

    /// Sets the pincode.
    pub fn with_pincode(mut self, pincode: impl Into<String>) -> Self {
        self.pincode = pincode.into();
        self
    }

    /// Order ID.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Delivery location.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Postal code, informational only.
    pub fn pincode(&self) -> &str {
        &self.pincode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_valid() {
        assert!(GeoPoint::new(0.0, 0.0).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(GeoPoint::new(90.0, -180.0).is_valid());
    }

    #[test]
    fn test_geo_point_invalid() {
        assert!(!GeoPoint::new(90.1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_order_new() {
        let o = Order::new(3, 19.076, 72.8777, 12.5);
        assert_eq!(o.id(), 3);
        assert_eq!(o.latitude(), 19.076);
        assert_eq!(o.longitude(), 72.8777);
        assert_eq!(o.weight_kg(), 12.5);
        assert_eq!(o.pincode(), "");
        assert_eq!(o.location(), GeoPoint::new(19.076, 72.8777));
    }

    #[test]
    fn test_order_deserialize_service_names() {
        let json = r#"{"order_id": 9, "latitude": 1.5, "longitude": 2.5,
                       "pincode": "400001", "total_weight_kg": 30.0}"#;
        let o: Order = serde_json::from_str(json).expect("valid order");
        assert_eq!(o.id(), 9);
        assert_eq!(o.weight_kg(), 30.0);
        assert_eq!(o.pincode(), "400001");
    }

    #[test]
    fn test_order_deserialize_missing_pincode() {
        let json = r#"{"id": 1, "latitude": 0.0, "longitude": 0.0, "weight_kg": 5.0}"#;
        let o: Order = serde_json::from_str(json).expect("valid order");
        assert_eq!(o.pincode(), "");
    }

    #[test]
    fn test_order_deserialize_missing_weight_fails() {
        let json = r#"{"id": 1, "latitude": 0.0, "longitude": 0.0}"#;
        assert!(serde_json::from_str::<Order>(json).is_err());
    }
}
