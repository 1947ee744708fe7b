//! Sources of the rider's current position.

use crate::error::LocationError;
use crate::types::location::Coordinate;

/// Position used when the current location cannot be determined.
pub const DEFAULT_SOURCE: Coordinate = Coordinate::new_unchecked(13.02, 80.57);

/// Supplies the current position of the rider.
pub trait LocationProvider {
    fn current_location(&self) -> Result<Coordinate, LocationError>;
}

/// A provider that always reports the same position.
#[derive(Debug, Copy, Clone)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// A provider for environments without positioning support.
#[derive(Debug, Copy, Clone, Default)]
pub struct Unavailable;

impl LocationProvider for Unavailable {
    fn current_location(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::Unavailable(
            "positioning is not supported".to_string(),
        ))
    }
}

/// Asks the provider for the current position and falls back to
/// [`DEFAULT_SOURCE`] when it fails or reports an invalid coordinate.
pub fn locate_or_default(provider: &impl LocationProvider) -> Coordinate {
    match provider.current_location() {
        Ok(coordinate) if coordinate.validate().is_ok() => coordinate,
        Ok(coordinate) => {
            warn!(
                "Provider reported an invalid location ({}), using default location",
                coordinate
            );
            DEFAULT_SOURCE
        }
        Err(error) => {
            warn!("Unable to get current location ({}), using default location", error);
            DEFAULT_SOURCE
        }
    }
}
