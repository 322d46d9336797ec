//! Great-circle distance on a spherical Earth.

use crate::models::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers.
///
/// Symmetric, non-negative, and zero for identical points.
///
/// # Examples
///
/// ```
/// use u_allocation::models::GeoPoint;
/// use u_allocation::distance::haversine_km;
///
/// let a = GeoPoint::new(0.0, 0.0);
/// let b = GeoPoint::new(1.0, 0.0);
/// assert!((haversine_km(a, b) - 111.19492664455873).abs() < 1e-9);
/// assert_eq!(haversine_km(a, a), 0.0);
/// ```
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Arithmetic mean of latitudes and longitudes.
///
/// Returns `None` for an empty input.
pub fn centroid<I>(points: I) -> Option<GeoPoint>
where
    I: IntoIterator<Item = GeoPoint>,
{
    let mut n = 0usize;
    let mut lat = 0.0;
    let mut lon = 0.0;
    for p in points {
        lat += p.latitude();
        lon += p.longitude();
        n += 1;
    }
    if n == 0 {
        return None;
    }
    Some(GeoPoint::new(lat / n as f64, lon / n as f64))
}

/// Cumulative distance walking the points in the given order.
///
/// Zero for fewer than two points. No return leg is added.
pub fn path_length_km(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|w| haversine_km(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEGREE_KM: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

    #[test]
    fn test_zero_for_identical() {
        let p = GeoPoint::new(12.9716, 77.5946);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = GeoPoint::new(28.7041, 77.1025);
        let b = GeoPoint::new(19.076, 72.8777);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-10);
    }

    #[test]
    fn test_one_degree_meridian() {
        let a = GeoPoint::new(10.0, 50.0);
        let b = GeoPoint::new(11.0, 50.0);
        assert!((haversine_km(a, b) - DEGREE_KM).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, -1.0);
        assert!((haversine_km(a, b) - DEGREE_KM).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let half = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((haversine_km(a, b) - half).abs() < 1e-6);
    }

    #[test]
    fn test_delhi_mumbai() {
        let delhi = GeoPoint::new(28.7041, 77.1025);
        let mumbai = GeoPoint::new(19.076, 72.8777);
        let d = haversine_km(delhi, mumbai);
        assert!(d > 1130.0 && d < 1160.0, "got {d}");
    }

    #[test]
    fn test_centroid() {
        let c = centroid([
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(2.0, 4.0),
            GeoPoint::new(4.0, 2.0),
        ])
        .expect("non-empty");
        assert!((c.latitude() - 2.0).abs() < 1e-10);
        assert!((c.longitude() - 2.0).abs() < 1e-10);
        assert!(centroid(std::iter::empty()).is_none());
    }

    #[test]
    fn test_path_length() {
        let pts = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(2.0, 0.0),
        ];
        assert!((path_length_km(&pts) - 2.0 * DEGREE_KM).abs() < 1e-9);
        assert_eq!(path_length_km(&pts[..1]), 0.0);
        assert_eq!(path_length_km(&[]), 0.0);
    }

    #[test]
    fn test_path_length_follows_given_order() {
        let forward = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(2.0, 0.0),
            GeoPoint::new(1.0, 0.0),
        ];
        // 0 -> 2 -> 1 backtracks one degree
        assert!((path_length_km(&forward) - 3.0 * DEGREE_KM).abs() < 1e-9);
    }
}
