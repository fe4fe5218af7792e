//! This module contains the map initializer: it reads page data, constructs a map view and then
//! either places numbered markers or requests and renders a route with its total distance.

#[cfg(test)]
#[path = "../tests/unit/initializer_test.rs"]
mod initializer_test;

use crate::config::Settings;
use crate::models::*;
use crate::provider::{HostPage, MapProvider, MapView, RouteChangeHandler, RouteRenderer, ViewOptions};
use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
use std::rc::Rc;

/// A handle to the constructed map which owns provider objects for the page lifetime.
pub enum MapHandle<P: MapProvider> {
    /// A map with markers.
    Annotated {
        /// Map view.
        view: P::View,
        /// Placed markers.
        markers: Vec<Marker>,
    },
    /// A map with route.
    Routed {
        /// Map view.
        view: P::View,
        /// Route renderer which keeps route change listener alive.
        renderer: P::Renderer,
        /// Sent route request.
        request: RouteRequest,
        /// Route request outcome.
        status: RouteStatus,
    },
}

impl<P: MapProvider> MapHandle<P> {
    /// Returns presentation mode of the map.
    pub fn mode(&self) -> PresentationMode {
        match self {
            MapHandle::Annotated { .. } => PresentationMode::Annotate,
            MapHandle::Routed { .. } => PresentationMode::Route,
        }
    }

    /// Returns the route request sent to the provider, if the map shows a route.
    pub fn request(&self) -> Option<&RouteRequest> {
        match self {
            MapHandle::Annotated { .. } => None,
            MapHandle::Routed { request, .. } => Some(request),
        }
    }
}

/// An outcome of route request.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteStatus {
    /// Route was computed and rendered.
    Rendered,
    /// Route request failed, user was notified.
    Failed(GenericError),
}

/// Initializes a map on the hosting page using given mapping provider.
pub struct MapInitializer<P: MapProvider, H: HostPage + 'static> {
    provider: P,
    page: Rc<H>,
    settings: Settings,
    environment: Environment,
}

impl<P: MapProvider, H: HostPage + 'static> MapInitializer<P, H> {
    /// Creates a new instance of `MapInitializer`.
    pub fn new(provider: P, page: Rc<H>, settings: Settings, environment: Environment) -> Self {
        Self { provider, page, settings, environment }
    }

    /// Reads page data and presents it on a new map view using given mode.
    pub async fn initialize(&self, mode: PresentationMode) -> GenericResult<MapHandle<P>> {
        let page_data = read_page_data(self.page.as_ref())?;
        page_data.validate(mode)?;

        self.log(&format!(
            "initializing {mode} map: {} coordinate(s), center at {}",
            page_data.coordinates.len(),
            page_data.center
        ));

        let view = self.provider.create_view(&ViewOptions { center: page_data.center, zoom: self.settings.zoom(mode) })?;

        match mode {
            PresentationMode::Annotate => self.annotate(view, &page_data),
            PresentationMode::Route => self.route(view, &page_data).await,
        }
    }

    fn annotate(&self, view: P::View, page_data: &PageData) -> GenericResult<MapHandle<P>> {
        let markers = create_markers(page_data.coordinates.as_slice(), &self.settings.marker);

        markers.iter().try_for_each(|marker| view.place_marker(marker))?;

        self.log(&format!("placed {} marker(s)", markers.len()));

        Ok(MapHandle::Annotated { view, markers })
    }

    async fn route(&self, view: P::View, page_data: &PageData) -> GenericResult<MapHandle<P>> {
        let renderer = self.provider.create_renderer(&view, self.create_route_change_handler())?;

        let request =
            RouteRequest::new(page_data.coordinates.as_slice(), self.settings.travel_mode, self.settings.avoid_tolls)?;

        self.log(&format!(
            "requesting {:?} route from {} to {} via {} waypoint(s)",
            request.travel_mode,
            request.origin,
            request.destination,
            request.waypoints.len()
        ));

        let status = match self.provider.route(&request).await {
            Ok(directions) => {
                renderer.render(&directions);
                RouteStatus::Rendered
            }
            Err(err) => {
                self.log(&format!("route request failed: {err}"));
                self.page.alert(&format!("Could not display directions due to: {err}"));
                RouteStatus::Failed(err)
            }
        };

        Ok(MapHandle::Routed { view, renderer, request, status })
    }

    fn create_route_change_handler(&self) -> RouteChangeHandler {
        let page = self.page.clone();
        let logger = self.environment.logger.clone();

        Rc::new(move |result| {
            if let Some(result) = result {
                show_total_distance(result, page.as_ref(), &logger);
            }
        })
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message);
    }
}

/// Reads page data from data attributes of the hosting page.
pub fn read_page_data<H: HostPage + ?Sized>(page: &H) -> GenericResult<PageData> {
    PageData::parse(
        page.dataset(CENTER_ATTRIBUTE).as_deref(),
        page.dataset(GEOCODE_ATTRIBUTE).as_deref(),
        page.dataset(ADDRESS_ATTRIBUTE),
    )
}

/// Computes total distance of the route and shows it on the page. Leaves displayed text untouched
/// when the result has no routes. Returns shown text.
pub fn show_total_distance<H: HostPage + ?Sized>(
    result: &RouteResult,
    page: &H,
    logger: &InfoLogger,
) -> Option<String> {
    let text = get_total_distance(result).map(format_total_distance)?;

    logger(&format!("total distance: {text}"));
    page.set_total_text(text.as_str());

    Some(text)
}
