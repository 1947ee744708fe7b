//! Resolution of free-text place names into coordinates.
//!
//! The estimator never talks to a geocoding service directly. Callers
//! resolve the destination through a [`Geocoder`] first and only invoke
//! the estimator when the lookup succeeded.

use std::collections::HashMap;

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::types::location::Coordinate;

/// A geocoding lookup.
pub trait Geocoder {
    /// Resolves `query` to a coordinate.
    ///
    /// # Errors
    /// [`GeocodingError::NotFound`] when nothing matches, other variants
    /// for blank queries, transport failures and malformed responses.
    fn resolve(&self, query: &str) -> Result<Coordinate, GeocodingError>;
}

/// Trims the query and rejects blank ones.
fn normalize_query(query: &str) -> Result<&str, GeocodingError> {
    let query = query.trim();
    if query.is_empty() {
        Err(GeocodingError::EmptyQuery)
    } else {
        Ok(query)
    }
}

//------------------------------------------------------------------
// Nominatim
//------------------------------------------------------------------

/// Looks places up with the [Nominatim][1] search API.
///
/// [1]: https://nominatim.org/release-docs/latest/api/Search/
#[derive(Debug)]
pub struct NominatimGeocoder {
    client: Client,
    search_url: String,
}

/// A single search hit. Nominatim encodes the numbers as strings.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,

    #[serde(default)]
    pub display_name: Option<String>,
}

impl NominatimGeocoder {
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|error| {
                GeocodingError::InvalidConfiguration(format!("invalid user agent: {}", error))
            })?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            search_url: format!("{}/search", config.base_url.trim_end_matches('/')),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    fn resolve(&self, query: &str) -> Result<Coordinate, GeocodingError> {
        let query = normalize_query(query)?;
        debug!("Searching Nominatim for `{}`", query);
        let places: Vec<NominatimPlace> = self
            .client
            .get(&self.search_url)
            .query(&[("format", "json"), ("q", query)])
            .send()?
            .error_for_status()?
            .json()?;
        debug!("{} places found for `{}`", places.len(), query);
        first_place(query, places)
    }
}

/// Picks the best (first) hit and converts it into a [`Coordinate`].
pub fn first_place(query: &str, places: Vec<NominatimPlace>) -> Result<Coordinate, GeocodingError> {
    let place = places
        .into_iter()
        .next()
        .ok_or_else(|| GeocodingError::NotFound(query.to_string()))?;
    if let Some(display_name) = &place.display_name {
        debug!("`{}` resolved to {}", query, display_name);
    }
    let latitude = parse_degrees(&place.lat)?;
    let longitude = parse_degrees(&place.lon)?;
    Coordinate::new(latitude, longitude)
        .map_err(|error| GeocodingError::InvalidResponse(error.to_string()))
}

fn parse_degrees(value: &str) -> Result<f64, GeocodingError> {
    value
        .trim()
        .parse()
        .map_err(|_| GeocodingError::InvalidResponse(format!("`{}` is not a number", value)))
}

//------------------------------------------------------------------
// In-memory
//------------------------------------------------------------------

/// Resolves names from a fixed table. Names match case-insensitively.
#[derive(Debug, Default, Clone)]
pub struct StaticGeocoder {
    places: HashMap<String, Coordinate>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a place to the table.
    pub fn with_place(mut self, name: &str, coordinate: Coordinate) -> Self {
        self.places.insert(name.trim().to_lowercase(), coordinate);
        self
    }
}

impl Geocoder for StaticGeocoder {
    fn resolve(&self, query: &str) -> Result<Coordinate, GeocodingError> {
        let query = normalize_query(query)?;
        self.places
            .get(&query.to_lowercase())
            .copied()
            .ok_or_else(|| GeocodingError::NotFound(query.to_string()))
    }
}
