//! Linear fare estimation on top of the haversine distance.

use std::fmt;

use serde::Serialize;

use crate::config::{validate_rate, FareConfig};
use crate::error::EstimateError;
use crate::types::location::Coordinate;
use crate::utils::haversine;

/// Distance and price of a trip. Created on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareEstimate {
    /// Great-circle distance in kilometers.
    pub distance_km: f64,

    /// `distance_km * rate_per_km`, full precision.
    pub fare: f64,

    pub rate_per_km: f64,
    pub currency: String,
}

impl fmt::Display for FareEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distance: {:.2} km, Estimated Fare: {} {:.2}",
            round_for_display(self.distance_km),
            self.currency,
            round_for_display(self.fare)
        )
    }
}

/// Computes the fare for a distance.
///
/// # Arguments
/// * `distance_km` - Non-negative distance.
/// * `rate_per_km` - Positive price of one kilometer.
///
/// # Returns
/// `distance_km * rate_per_km`, unrounded. Use [`round_for_display`]
/// when presenting it.
///
/// # Errors
/// * [`EstimateError::InvalidConfiguration`] if the rate is not positive.
/// * [`EstimateError::InvalidDistance`] if the distance is negative or
///   not finite.
pub fn compute_fare(distance_km: f64, rate_per_km: f64) -> Result<f64, EstimateError> {
    validate_rate(rate_per_km)?;
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(EstimateError::InvalidDistance(distance_km));
    }
    Ok(distance_km * rate_per_km)
}

/// Rounds a value to two decimals, ties away from zero.
pub fn round_for_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimates the distance and the fare between two coordinates.
pub fn estimate(
    from: &Coordinate,
    to: &Coordinate,
    config: &FareConfig,
) -> Result<FareEstimate, EstimateError> {
    let distance_km = haversine::distance(from, to)?;
    let fare = compute_fare(distance_km, config.rate_per_km)?;
    debug!("fare for {} km: {} {}", distance_km, config.currency, fare);
    Ok(FareEstimate {
        distance_km,
        fare,
        rate_per_km: config.rate_per_km,
        currency: config.currency.clone(),
    })
}
