//! Stores the state of a fare calculation.
//!
//! A session starts without a destination. Every successful search
//! resolves the destination and computes a fresh estimate; failed
//! searches leave the previous state untouched, so the estimator is
//! never invoked with a destination that was not resolved.

use crate::config::FareConfig;
use crate::error::EstimateError;
use crate::fare::{self, FareEstimate};
use crate::geocoding::Geocoder;
use crate::geolocation::{locate_or_default, LocationProvider};
use crate::types::location::Coordinate;
use crate::utils::directions;

/// Progress of a session.
#[derive(Debug, Clone, PartialEq)]
pub enum RideState {
    /// No destination has been resolved yet.
    Unresolved,

    /// The destination is known and priced.
    Estimated {
        destination: Coordinate,
        estimate: FareEstimate,
    },
}

/// A rider's fare calculation from a fixed source position.
#[derive(Debug)]
pub struct RideSession<G> {
    source: Coordinate,
    config: FareConfig,
    geocoder: G,
    state: RideState,
}

impl<G: Geocoder> RideSession<G> {
    /// Creates a session starting at `source`.
    ///
    /// # Errors
    /// [`EstimateError::InvalidCoordinate`] or
    /// [`EstimateError::InvalidConfiguration`] for bad inputs.
    pub fn new(source: Coordinate, config: FareConfig, geocoder: G) -> Result<Self, EstimateError> {
        source.validate()?;
        config.validate()?;
        Ok(Self {
            source,
            config,
            geocoder,
            state: RideState::Unresolved,
        })
    }

    /// Creates a session starting at the provider's current position,
    /// or at the default position if there is none.
    pub fn from_provider(
        provider: &impl LocationProvider,
        config: FareConfig,
        geocoder: G,
    ) -> Result<Self, EstimateError> {
        Self::new(locate_or_default(provider), config, geocoder)
    }

    /// Resolves `query` and prices the trip to it.
    ///
    /// On failure the session keeps its previous state.
    pub fn search(&mut self, query: &str) -> Result<FareEstimate, EstimateError> {
        info!("[1/2] Resolving destination `{}`", query.trim());
        let destination = self.geocoder.resolve(query).map_err(|error| {
            error!("Failed to resolve `{}`: {}", query.trim(), error);
            error
        })?;
        self.estimate_to(destination)
    }

    /// Prices the trip to an already known destination.
    pub fn estimate_to(&mut self, destination: Coordinate) -> Result<FareEstimate, EstimateError> {
        info!("[2/2] Estimating fare from ({}) to ({})", self.source, destination);
        let estimate = fare::estimate(&self.source, &destination, &self.config)?;
        info!("{}", estimate);
        self.state = RideState::Estimated {
            destination,
            estimate: estimate.clone(),
        };
        Ok(estimate)
    }

    pub fn source(&self) -> &Coordinate {
        &self.source
    }

    pub fn config(&self) -> &FareConfig {
        &self.config
    }

    pub fn state(&self) -> &RideState {
        &self.state
    }

    /// Resolved destination, if any.
    pub fn destination(&self) -> Option<&Coordinate> {
        match &self.state {
            RideState::Estimated { destination, .. } => Some(destination),
            RideState::Unresolved => None,
        }
    }

    pub fn estimate(&self) -> Option<&FareEstimate> {
        match &self.state {
            RideState::Estimated { estimate, .. } => Some(estimate),
            RideState::Unresolved => None,
        }
    }

    /// OpenStreetMap directions from the source to the destination.
    pub fn directions_url(&self) -> Option<String> {
        self.destination()
            .map(|destination| directions::openstreetmap_url(&self.source, destination))
    }
}
