//! Struct definitions and implementations for [`Coordinate`].

use std::fmt;
use std::ops::RangeInclusive;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// Legal latitude range in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Legal longitude range in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A [`Coordinate`] is a value type that represents a point on the
/// surface of the Earth.
///
/// The fields are wrapped in [`OrderedFloat`] so that coordinates can
/// be compared and hashed. Double precision keeps the round-off well
/// below a millimeter.
///
/// Fields are public, so a `Coordinate` is not guaranteed to be in
/// range. Every estimator entry point calls [`Coordinate::validate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Coordinate {
    /// Creates a coordinate, rejecting values outside of the legal
    /// latitude/longitude ranges.
    ///
    /// # Arguments
    /// * `latitude` - Degrees north, within [-90, 90].
    /// * `longitude` - Degrees east, within [-180, 180].
    ///
    /// # Errors
    /// [`EstimateError::InvalidCoordinate`] for out-of-range, NaN or
    /// infinite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, EstimateError> {
        let coordinate = Self::new_unchecked(latitude, longitude);
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Creates a coordinate without range checks. Used for constants.
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Checks that both components are within their legal ranges.
    pub fn validate(&self) -> Result<(), EstimateError> {
        let (latitude, longitude) = (self.latitude(), self.longitude());
        if LATITUDE_RANGE.contains(&latitude) && LONGITUDE_RANGE.contains(&longitude) {
            Ok(())
        } else {
            Err(EstimateError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude.into_inner()
    }

    pub fn longitude(&self) -> f64 {
        self.longitude.into_inner()
    }
}

impl fmt::Display for Coordinate {
    /// Four decimals, the way the rider sees a position.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude(), self.longitude())
    }
}

#[cfg(test)]
mod coordinate_tests {
    use super::*;

    #[test]
    fn test_accepts_range_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            Coordinate::new(91.0, 0.0),
            Err(EstimateError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            Coordinate::new(0.0, 181.0),
            Err(EstimateError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            Coordinate::new(-90.5, -180.5),
            Err(EstimateError::InvalidCoordinate { .. })
        ));
    }

    /// NaN never falls inside a range, so it must be rejected too.
    #[test]
    fn test_rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_unchecked_can_be_validated_later() {
        let coordinate = Coordinate::new_unchecked(120.0, 10.0);
        assert!(coordinate.validate().is_err());
    }

    #[test]
    fn test_display() {
        let chennai = Coordinate::new(13.0827, 80.2707).unwrap();
        assert_eq!(chennai.to_string(), "13.0827, 80.2707");
    }

    #[test]
    fn test_value_equality() {
        let a = Coordinate::new(13.0827, 80.2707).unwrap();
        let b = Coordinate::new(13.0827, 80.2707).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_round_trip() {
        let chennai = Coordinate::new(13.0827, 80.2707).unwrap();
        let json = serde_json::to_string(&chennai).unwrap();
        assert_eq!(json, r#"{"latitude":13.0827,"longitude":80.2707}"#);
        assert_eq!(serde_json::from_str::<Coordinate>(&json).unwrap(), chennai);
    }
}
