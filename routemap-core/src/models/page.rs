#[cfg(test)]
#[path = "../../tests/unit/models/page_test.rs"]
mod page_test;

use super::Coordinate;
use crate::utils::{GenericError, GenericResult};
use std::fmt;
use std::str::FromStr;

/// A name of map element attribute which keeps map center as a json pair.
pub const CENTER_ATTRIBUTE: &str = "center";
/// A name of map element attribute which keeps coordinate sequence as a json array of pairs.
pub const GEOCODE_ATTRIBUTE: &str = "geocode";
/// A name of map element attribute which keeps an address. It is read, but not used.
pub const ADDRESS_ATTRIBUTE: &str = "address";

/// Specifies how coordinates are presented on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationMode {
    /// Every coordinate gets a marker labeled with its position in the sequence.
    Annotate,
    /// Coordinates are used as ordered stops of a driving route.
    Route,
}

impl PresentationMode {
    /// Returns a minimum amount of coordinates required by the mode.
    pub fn min_coordinates(&self) -> usize {
        match self {
            PresentationMode::Annotate => 1,
            PresentationMode::Route => 2,
        }
    }
}

impl FromStr for PresentationMode {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "annotate" | "markers" => Ok(PresentationMode::Annotate),
            "route" => Ok(PresentationMode::Route),
            _ => Err(format!("unknown presentation mode: '{value}'").into()),
        }
    }
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PresentationMode::Annotate => write!(f, "annotate"),
            PresentationMode::Route => write!(f, "route"),
        }
    }
}

/// Data embedded into the hosting page by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct PageData {
    /// Map viewport center.
    pub center: Coordinate,
    /// Ordered coordinates: marker numbering or route traversal order.
    pub coordinates: Vec<Coordinate>,
    /// An optional address.
    pub address: Option<String>,
}

impl PageData {
    /// Parses page data from raw attribute values. When center is not specified, it is
    /// calculated as mean of all coordinates.
    pub fn parse(center: Option<&str>, geocode: Option<&str>, address: Option<String>) -> GenericResult<Self> {
        let geocode = geocode.ok_or_else(|| format!("page has no '{GEOCODE_ATTRIBUTE}' attribute"))?;
        let coordinates = serde_json::from_str::<Vec<[f64; 2]>>(geocode)
            .map_err(|err| format!("cannot parse '{GEOCODE_ATTRIBUTE}' attribute: '{err}'"))?
            .into_iter()
            .map(Coordinate::from)
            .collect::<Vec<_>>();

        let center = match center {
            Some(center) => serde_json::from_str::<[f64; 2]>(center)
                .map(Coordinate::from)
                .map_err(|err| format!("cannot parse '{CENTER_ATTRIBUTE}' attribute: '{err}'"))?,
            None => Coordinate::mean(&coordinates)
                .ok_or_else(|| format!("cannot get map center: no '{CENTER_ATTRIBUTE}' attribute and no coordinates"))?,
        };

        Ok(Self { center, coordinates, address })
    }

    /// Checks that page data can be presented using given mode.
    pub fn validate(&self, mode: PresentationMode) -> GenericResult<()> {
        let required = mode.min_coordinates();

        if self.coordinates.len() < required {
            Err(format!("{mode} mode requires at least {required} coordinate(s), got {}", self.coordinates.len())
                .into())
        } else {
            Ok(())
        }
    }
}
