const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance using the haversine formula.
/// Input lat/lon in degrees. Output in meters.
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Geographic midpoint of two coordinates, computed on the sphere rather
/// than by averaging degrees. Input and output lat/lon in degrees.
pub fn midpoint(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let lambda1 = lon1.to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let bx = phi2.cos() * dlambda.cos();
    let by = phi2.cos() * dlambda.sin();
    let phi_m = (phi1.sin() + phi2.sin())
        .atan2(((phi1.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lambda_m = lambda1 + by.atan2(phi1.cos() + bx);

    (phi_m.to_degrees(), lambda_m.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_of_identical_points_is_zero() {
        assert_eq!(haversine_meters(41.87, -87.65, 41.87, -87.65), 0.0);
    }

    #[test]
    fn haversine_of_a_known_pair() {
        // One degree of latitude is roughly 111.2 km.
        let d = haversine_meters(41.0, -87.65, 42.0, -87.65);
        assert!((d - 111_195.0).abs() < 100.0, "got {}", d);
    }

    #[test]
    fn midpoint_of_identical_points_is_the_point() {
        let (lat, lon) = midpoint(41.87, -87.65, 41.87, -87.65);
        assert!((lat - 41.87).abs() < 1e-9);
        assert!((lon - -87.65).abs() < 1e-9);
    }

    #[test]
    fn midpoint_lies_between_the_endpoints() {
        let (lat, lon) = midpoint(41.86, -87.66, 41.88, -87.64);
        assert!((lat - 41.87).abs() < 1e-3);
        assert!((lon - -87.65).abs() < 1e-3);
        // Roughly equidistant from both ends.
        let da = haversine_meters(41.86, -87.66, lat, lon);
        let db = haversine_meters(41.88, -87.64, lat, lon);
        assert!((da - db).abs() < 1.0);
    }
}
