#[cfg(test)]
#[path = "../../tests/unit/models/distance_test.rs"]
mod distance_test;

use super::RouteResult;

/// Returns total distance of the first route alternative in kilometers or `None` if the result
/// has no routes.
pub fn get_total_distance(result: &RouteResult) -> Option<f64> {
    let route = result.routes.first()?;

    let meters =
        route.legs.iter().filter_map(|leg| leg.distance.as_ref()).fold(0., |total, distance| total + distance.value);

    Some(meters / 1000.)
}

/// Formats total distance in kilometers as it is shown to the user.
pub fn format_total_distance(kilometers: f64) -> String {
    format!("{kilometers} km")
}
