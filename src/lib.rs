//! Ride Fare Estimation Library.
//! Turns two positions into a great-circle distance and a fare.
//!
//! The distance and fare computations are pure functions over value
//! types. Looking up a destination by name and obtaining the rider's
//! current position are collaborators behind the [`Geocoder`] and
//! [`LocationProvider`] traits; the estimator is only invoked once both
//! ends of the trip are known.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod fare;
pub mod geocoding;
pub mod geolocation;
pub mod session;

pub mod types {
    pub mod location;
}

pub mod utils {
    pub mod directions;
    #[cfg(test)]
    pub mod generator;
    pub mod haversine;
}

pub use config::{FareConfig, NominatimConfig};
pub use error::{EstimateError, GeocodingError, LocationError};
pub use fare::{compute_fare, estimate, FareEstimate};
pub use geocoding::{Geocoder, NominatimGeocoder, StaticGeocoder};
pub use geolocation::{FixedLocation, LocationProvider, Unavailable};
pub use session::{RideSession, RideState};
pub use types::location::Coordinate;
pub use utils::haversine::distance;
