//! Configuration of the fare multiplier and the geocoding service.
//!
//! Neither the rate nor the currency is hard-coded into the estimator:
//! callers build a [`FareConfig`] (from flags, environment or a
//! deserialized file) and pass it in explicitly.

use std::time::Duration;

use serde::Deserialize;

use crate::error::EstimateError;

/// Default rate in currency units per kilometer.
pub const DEFAULT_RATE_PER_KM: f64 = 15.0;

/// Default currency label.
pub const DEFAULT_CURRENCY: &str = "Rs.";

/// Public Nominatim instance.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fare multiplier settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FareConfig {
    /// Price of one kilometer, must be positive.
    pub rate_per_km: f64,

    /// Label printed in front of the fare, for example `Rs.` or `$`.
    pub currency: String,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            rate_per_km: DEFAULT_RATE_PER_KM,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl FareConfig {
    pub fn new(rate_per_km: f64, currency: impl Into<String>) -> Result<Self, EstimateError> {
        let config = Self {
            rate_per_km,
            currency: currency.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects non-positive or non-finite rates.
    pub fn validate(&self) -> Result<(), EstimateError> {
        validate_rate(self.rate_per_km)
    }
}

pub(crate) fn validate_rate(rate_per_km: f64) -> Result<(), EstimateError> {
    if rate_per_km.is_finite() && rate_per_km > 0.0 {
        Ok(())
    } else {
        Err(EstimateError::InvalidConfiguration(format!(
            "rate per kilometer must be positive, got {}",
            rate_per_km
        )))
    }
}

/// Settings of the Nominatim HTTP client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NominatimConfig {
    pub base_url: String,

    /// Nominatim's usage policy requires an identifying User-Agent.
    pub user_agent: String,

    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOMINATIM_URL.to_string(),
            user_agent: concat!("ride-fare / ", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
