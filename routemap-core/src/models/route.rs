#[cfg(test)]
#[path = "../../tests/unit/models/route_test.rs"]
mod route_test;

use super::Coordinate;
use crate::utils::GenericResult;
use serde::{Deserialize, Serialize};

/// A travel mode used to request a route.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    /// Driving directions.
    #[default]
    Driving,
    /// Walking directions.
    Walking,
    /// Bicycling directions.
    Bicycling,
    /// Public transit directions.
    Transit,
}

/// An intermediate stop of the route.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Waypoint {
    /// Waypoint location.
    pub location: Coordinate,
    /// True if the route has to stop at the waypoint, splitting the route into legs.
    pub stopover: bool,
}

/// A route request sent to the mapping provider.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Route start.
    pub origin: Coordinate,
    /// Route end.
    pub destination: Coordinate,
    /// Intermediate stops in traversal order.
    pub waypoints: Vec<Waypoint>,
    /// Travel mode.
    pub travel_mode: TravelMode,
    /// Whether toll roads should be avoided.
    pub avoid_tolls: bool,
    /// Whether provider is allowed to reorder waypoints. Always false.
    pub optimize_waypoints: bool,
}

impl RouteRequest {
    /// Creates a route request through all coordinates keeping their order: first is origin,
    /// last is destination and the rest are waypoints.
    pub fn new(coordinates: &[Coordinate], travel_mode: TravelMode, avoid_tolls: bool) -> GenericResult<Self> {
        match coordinates {
            [origin, waypoints @ .., destination] => Ok(Self {
                origin: *origin,
                destination: *destination,
                waypoints: waypoints.iter().map(|location| Waypoint { location: *location, stopover: true }).collect(),
                travel_mode,
                avoid_tolls,
                optimize_waypoints: false,
            }),
            _ => Err(format!("route requires at least 2 coordinates, got {}", coordinates.len()).into()),
        }
    }
}

/// A result of route request: route alternatives ranked by provider.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RouteResult {
    /// Route alternatives.
    #[serde(default)]
    pub routes: Vec<RouteAlternative>,
}

/// One complete candidate path.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RouteAlternative {
    /// Consecutive route legs.
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// A segment of the route between two consecutive stops.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Leg {
    /// Leg distance, if reported by provider.
    #[serde(default)]
    pub distance: Option<Distance>,
}

/// A distance reported by provider.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Distance {
    /// Distance in meters.
    pub value: f64,
    /// Human readable representation.
    #[serde(default)]
    pub text: String,
}
