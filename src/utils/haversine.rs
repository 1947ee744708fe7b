//! Great-circle distance on a spherical Earth.

use crate::error::EstimateError;
use crate::types::location::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the great-circle distance between two coordinates with the
/// haversine formula.
///
/// The result is symmetric in its arguments: only absolute differences
/// and the commutative product `cos(lat_a) * cos(lat_b)` enter the
/// formula, so swapping `a` and `b` yields bit-identical results.
///
/// # Arguments
/// * `a` - One end of the trip.
/// * `b` - The other end of the trip.
///
/// # Returns
/// The distance in kilometers, never negative.
///
/// # Errors
/// [`EstimateError::InvalidCoordinate`] if either coordinate is out of
/// range.
pub fn distance(a: &Coordinate, b: &Coordinate) -> Result<f64, EstimateError> {
    a.validate()?;
    b.validate()?;

    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let half_d_lat = (b.latitude() - a.latitude()).abs().to_radians() / 2.0;
    let half_d_lon = (b.longitude() - a.longitude()).abs().to_radians() / 2.0;

    let h = half_d_lat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_d_lon.sin().powi(2);
    // Rounding can push `h` a hair above 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    let distance = EARTH_RADIUS_KM * c;
    debug!("distance from ({}) to ({}): {} km", a, b, distance);
    Ok(distance)
}

#[cfg(test)]
mod haversine_tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::utils::generator::generate_coordinates_near;

    const CHENNAI: Coordinate = Coordinate::new_unchecked(13.0827, 80.2707);
    const CHENNAI_CENTRAL: Coordinate = Coordinate::new_unchecked(13.0604, 80.2496);

    #[test]
    fn test_chennai_short_trip() {
        let km = distance(&CHENNAI, &CHENNAI_CENTRAL).unwrap();
        assert_abs_diff_eq!(km, 3.2, epsilon = 0.2);
    }

    #[test]
    fn test_zero_distance() {
        let origin = Coordinate::new(0.0, 0.0).unwrap();
        assert_eq!(distance(&origin, &origin).unwrap(), 0.0);
        assert_abs_diff_eq!(distance(&CHENNAI, &CHENNAI).unwrap(), 0.0, epsilon = 1e-9);
    }

    /// Half of the Earth's circumference along the equator.
    #[test]
    fn test_half_circumference() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(0.0, 180.0).unwrap();
        assert_abs_diff_eq!(distance(&a, &b).unwrap(), 20015.0, epsilon = 5.0);
    }

    #[test]
    fn test_pole_to_pole() {
        let north = Coordinate::new(90.0, 0.0).unwrap();
        let south = Coordinate::new(-90.0, 0.0).unwrap();
        assert_abs_diff_eq!(
            distance(&north, &south).unwrap(),
            std::f64::consts::PI * EARTH_RADIUS_KM,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_rejects_latitude_91() {
        let bad = Coordinate::new_unchecked(91.0, 0.0);
        let result = distance(&bad, &CHENNAI);
        assert!(matches!(result, Err(EstimateError::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_rejects_longitude_181() {
        let bad = Coordinate::new_unchecked(0.0, 181.0);
        let result = distance(&CHENNAI, &bad);
        assert!(matches!(result, Err(EstimateError::InvalidCoordinate { .. })));
    }

    /// Symmetry and non-negativity over random points around the globe.
    #[test]
    fn test_symmetric_and_non_negative() {
        let center = Coordinate::new(0.0, 0.0).unwrap();
        let points = generate_coordinates_near(&center, 20_000.0, 50);
        for a in &points {
            for b in &points {
                let ab = distance(a, b).unwrap();
                let ba = distance(b, a).unwrap();
                assert_eq!(ab, ba, "asymmetric for {} and {}", a, b);
                assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let points = generate_coordinates_near(&CHENNAI, 500.0, 30);
        for a in &points {
            for b in &points {
                for c in &points {
                    let ab = distance(a, b).unwrap();
                    let bc = distance(b, c).unwrap();
                    let ac = distance(a, c).unwrap();
                    assert!(ac <= ab + bc + 1e-9);
                }
            }
        }
    }
}
