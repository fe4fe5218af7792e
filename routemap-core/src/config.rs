//! Map configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

extern crate serde_json;

use crate::models::{MarkerStyle, PresentationMode, TravelMode};
use crate::utils::GenericResult;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A map configuration as it is specified by the hosting page. All fields are optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies ids of page elements.
    pub elements: Option<ElementsConfig>,
    /// Specifies zoom levels.
    pub zoom: Option<ZoomConfig>,
    /// Specifies marker label style.
    pub marker: Option<MarkerConfig>,
    /// Specifies route request options.
    pub routing: Option<RoutingConfig>,
    /// Specifies logging options.
    pub logging: Option<LoggingConfig>,
}

/// Ids of page elements.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementsConfig {
    /// An element which hosts the map and keeps data attributes. Default is `map`.
    pub map: Option<String>,
    /// An element which shows turn-by-turn directions. Default is `panel`.
    pub panel: Option<String>,
    /// An element which shows total distance. Default is `total`.
    pub total: Option<String>,
}

/// Zoom level per presentation mode.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomConfig {
    /// Zoom used for markers. Default is 6.
    pub annotate: Option<u8>,
    /// Zoom used for route. Default is 4.
    pub route: Option<u8>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerConfig {
    pub color: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
}

/// Route request options.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingConfig {
    /// Travel mode. Default is driving.
    pub travel_mode: Option<TravelMode>,
    /// Avoid tolls. Default is true.
    pub avoid_tolls: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    pub enabled: bool,
}

/// Ids of page elements used by map initialization.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementIds {
    /// Map element id.
    pub map: String,
    /// Directions panel element id.
    pub panel: String,
    /// Total distance element id.
    pub total: String,
}

/// A configuration with all defaults resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Ids of page elements.
    pub elements: ElementIds,
    /// Zoom used for markers.
    pub annotate_zoom: u8,
    /// Zoom used for route.
    pub route_zoom: u8,
    /// Marker label style.
    pub marker: MarkerStyle,
    /// Route travel mode.
    pub travel_mode: TravelMode,
    /// Whether route avoids tolls.
    pub avoid_tolls: bool,
    /// Whether logging is enabled.
    pub logging: bool,
}

impl Settings {
    /// Returns zoom level for given presentation mode.
    pub fn zoom(&self, mode: PresentationMode) -> u8 {
        match mode {
            PresentationMode::Annotate => self.annotate_zoom,
            PresentationMode::Route => self.route_zoom,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(Config::default())
    }
}

impl From<Config> for Settings {
    fn from(config: Config) -> Self {
        let elements = config.elements.unwrap_or(ElementsConfig { map: None, panel: None, total: None });
        let zoom = config.zoom.unwrap_or(ZoomConfig { annotate: None, route: None });
        let marker = config.marker.unwrap_or(MarkerConfig { color: None, font_size: None, font_weight: None });
        let routing = config.routing.unwrap_or(RoutingConfig { travel_mode: None, avoid_tolls: None });
        let default_style = MarkerStyle::default();

        Settings {
            elements: ElementIds {
                map: elements.map.unwrap_or_else(|| "map".to_string()),
                panel: elements.panel.unwrap_or_else(|| "panel".to_string()),
                total: elements.total.unwrap_or_else(|| "total".to_string()),
            },
            annotate_zoom: zoom.annotate.unwrap_or(6),
            route_zoom: zoom.route.unwrap_or(4),
            marker: MarkerStyle {
                color: marker.color.unwrap_or(default_style.color),
                font_size: marker.font_size.unwrap_or(default_style.font_size),
                font_weight: marker.font_weight.unwrap_or(default_style.font_weight),
            },
            travel_mode: routing.travel_mode.unwrap_or_default(),
            avoid_tolls: routing.avoid_tolls.unwrap_or(true),
            logging: config.logging.is_some_and(|logging| logging.enabled),
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
