//! Specifies the seam between map initialization logic and its hosting environment: a mapping
//! provider which draws maps and computes routes, and a page which keeps input data and shows
//! results.

#[cfg(test)]
#[path = "../tests/unit/provider_test.rs"]
mod provider_test;

use crate::models::{Coordinate, Marker, RouteRequest, RouteResult};
use crate::utils::{GenericResult, InfoLogger};
use serde::Serialize;
use std::future::Future;
use std::rc::Rc;

/// Options used to construct a map view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewOptions {
    /// Viewport center.
    pub center: Coordinate,
    /// Zoom level.
    pub zoom: u8,
}

/// A callback invoked every time rendered directions change. Receives `None` when the renderer
/// has no directions.
pub type RouteChangeHandler = Rc<dyn Fn(Option<&RouteResult>)>;

/// A map view constructed by the mapping provider.
pub trait MapView {
    /// Places a labeled marker on the view.
    fn place_marker(&self, marker: &Marker) -> GenericResult<()>;
}

/// Renders directions into the map view and accompanying panel.
pub trait RouteRenderer<D> {
    /// Renders directions. Renderer is expected to notify its route change handler afterwards.
    fn render(&self, directions: &D);
}

/// A mapping provider.
pub trait MapProvider {
    /// A map view type.
    type View: MapView;
    /// A provider specific representation of computed directions.
    type Directions;
    /// A route renderer type.
    type Renderer: RouteRenderer<Self::Directions>;

    /// Creates a new map view.
    fn create_view(&self, options: &ViewOptions) -> GenericResult<Self::View>;

    /// Creates a route renderer bound to the view which calls `on_change` when directions change.
    fn create_renderer(&self, view: &Self::View, on_change: RouteChangeHandler) -> GenericResult<Self::Renderer>;

    /// Requests a route. Completes with directions or with a failure reason.
    fn route(&self, request: &RouteRequest) -> impl Future<Output = GenericResult<Self::Directions>>;
}

/// A page which hosts the map.
pub trait HostPage {
    /// Returns a data attribute of the map element.
    fn dataset(&self, key: &str) -> Option<String>;

    /// Replaces text of the total distance element.
    fn set_total_text(&self, text: &str);

    /// Shows a blocking notification to the user.
    fn alert(&self, message: &str);
}

/// Passes directions read back from a renderer to the route change handler. `None` stands for a
/// renderer without directions, a failure to read them is logged and not propagated.
pub fn notify_route_change(
    directions: Option<GenericResult<RouteResult>>,
    on_change: &RouteChangeHandler,
    logger: &InfoLogger,
) {
    match directions {
        None => (on_change)(None),
        Some(Ok(result)) => (on_change)(Some(&result)),
        Some(Err(err)) => (logger)(&format!("cannot read rendered directions: '{err}'")),
    }
}
