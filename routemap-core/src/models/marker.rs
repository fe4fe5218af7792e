#[cfg(test)]
#[path = "../../tests/unit/models/marker_test.rs"]
mod marker_test;

use super::Coordinate;
use serde::Serialize;

/// Specifies how marker labels look like.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Label text color.
    pub color: String,
    /// Label font size.
    pub font_size: String,
    /// Label font weight.
    pub font_weight: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self { color: "#000".to_string(), font_size: "12px".to_string(), font_weight: "600".to_string() }
    }
}

/// A marker label.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLabel {
    /// Label text.
    pub text: String,
    /// Label text color.
    pub color: String,
    /// Label font size.
    pub font_size: String,
    /// Label font weight.
    pub font_weight: String,
}

/// A labeled marker placed on the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    /// Marker position.
    pub position: Coordinate,
    /// Marker label.
    pub label: MarkerLabel,
}

/// Creates a marker per coordinate labeled with its one-based position in the sequence.
pub fn create_markers(coordinates: &[Coordinate], style: &MarkerStyle) -> Vec<Marker> {
    coordinates
        .iter()
        .enumerate()
        .map(|(idx, coordinate)| Marker {
            position: *coordinate,
            label: MarkerLabel {
                text: (idx + 1).to_string(),
                color: style.color.clone(),
                font_size: style.font_size.clone(),
                font_weight: style.font_weight.clone(),
            },
        })
        .collect()
}
