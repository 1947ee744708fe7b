//! Random coordinate generation for property tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::location::Coordinate;
use crate::utils::haversine::EARTH_RADIUS_KM;

/// Fixed seed so failures are reproducible.
const SEED: u64 = 0x5EED;

/// Generates `count` coordinates scattered within `radius_km` of
/// `center`.
///
/// Each point is reached from `center` along a random bearing for a
/// random great-circle distance, so every generated coordinate is
/// within the legal latitude/longitude ranges.
pub fn generate_coordinates_near(center: &Coordinate, radius_km: f64, count: usize) -> Vec<Coordinate> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let lat_1 = center.latitude().to_radians();
    let lon_1 = center.longitude().to_radians();

    (0..count)
        .map(|_| {
            let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
            let delta = rng.gen_range(0.0..=radius_km) / EARTH_RADIUS_KM;

            let lat_2 = (lat_1.sin() * delta.cos() + lat_1.cos() * delta.sin() * bearing.cos())
                .clamp(-1.0, 1.0)
                .asin();
            let lon_2 = lon_1
                + (bearing.sin() * delta.sin() * lat_1.cos())
                    .atan2(delta.cos() - lat_1.sin() * lat_2.sin());

            let latitude = lat_2.to_degrees().clamp(-90.0, 90.0);
            let longitude = (lon_2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
            Coordinate::new_unchecked(latitude, longitude)
        })
        .collect()
}
