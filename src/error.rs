//! Error types of the estimator and its collaborators.

/// Errors reported by the distance and fare estimator.
///
/// All variants are local validation failures, detected synchronously
/// and never retried.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid distance: {0} km")]
    InvalidDistance(f64),

    #[error("failed to resolve the destination: {0}")]
    Geocoding(#[from] GeocodingError),
}

/// Failures of the geocoding lookup.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GeocodingError {
    #[error("please enter a destination")]
    EmptyQuery,

    #[error("location `{0}` not found")]
    NotFound(String),

    #[error("invalid geocoder configuration: {0}")]
    InvalidConfiguration(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid geocoder response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for GeocodingError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::InvalidResponse(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}

/// The current position could not be obtained.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("location is unavailable: {0}")]
    Unavailable(String),
}
