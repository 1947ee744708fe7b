//! Links to turn-by-turn directions on OpenStreetMap.

use crate::types::location::Coordinate;

const OPENSTREETMAP_DIRECTIONS_URL: &str = "https://www.openstreetmap.org/directions";

/// Builds an OpenStreetMap directions URL between two coordinates.
pub fn openstreetmap_url(from: &Coordinate, to: &Coordinate) -> String {
    format!(
        "{}?from={},{}&to={},{}",
        OPENSTREETMAP_DIRECTIONS_URL,
        from.latitude(),
        from.longitude(),
        to.latitude(),
        to.longitude(),
    )
}
