#[cfg(test)]
#[path = "../../tests/unit/models/coordinate_test.rs"]
mod coordinate_test;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geocoordinate with latitude and longitude. Serialized as a lat/lng literal understood by the
/// mapping provider.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Coordinate {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns a point with averaged latitude and longitude of all coordinates or `None` when
    /// there are no coordinates.
    pub fn mean(coordinates: &[Coordinate]) -> Option<Self> {
        if coordinates.is_empty() {
            return None;
        }

        let (lat, lng) = coordinates.iter().fold((0., 0.), |(lat, lng), coord| (lat + coord.lat, lng + coord.lng));
        let size = coordinates.len() as f64;

        Some(Self::new(lat / size, lng / size))
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "lat={}, lng={}", self.lat, self.lng)
    }
}
