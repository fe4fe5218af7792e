use crate::google;
use crate::google::describe_js_error;
use routemap_core::models::{Marker, RouteRequest, RouteResult};
use routemap_core::provider::*;
use routemap_core::utils::{GenericError, GenericResult, InfoLogger};
use serde::Serialize;
use std::cell::RefCell;
use std::future::Future;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

/// A name of the event fired by directions renderer when rendered directions change.
const DIRECTIONS_CHANGED_EVENT: &str = "directions_changed";

/// A mapping provider which uses Google Maps JavaScript API.
pub struct GoogleMapsProvider {
    map_element: HtmlElement,
    panel_element: Option<HtmlElement>,
    service: google::DirectionsService,
    logger: InfoLogger,
}

impl GoogleMapsProvider {
    /// Creates a new instance of `GoogleMapsProvider`. Requires Maps SDK to be loaded.
    pub fn new(map_element: HtmlElement, panel_element: Option<HtmlElement>, logger: InfoLogger) -> Self {
        Self { map_element, panel_element, service: google::DirectionsService::new(), logger }
    }
}

/// A Google map with markers placed on it.
pub struct GoogleMapView {
    map: google::Map,
    markers: RefCell<Vec<google::Marker>>,
}

impl MapView for GoogleMapView {
    fn place_marker(&self, marker: &Marker) -> GenericResult<()> {
        let options = to_js_value(marker)?;

        let marker = google::Marker::new(&options);
        marker.set_map(&self.map);
        self.markers.borrow_mut().push(marker);

        Ok(())
    }
}

/// Renders directions and keeps route change listener alive while it exists.
pub struct GoogleRouteRenderer {
    renderer: google::DirectionsRenderer,
    _listener: Closure<dyn Fn()>,
}

impl RouteRenderer<JsValue> for GoogleRouteRenderer {
    fn render(&self, directions: &JsValue) {
        self.renderer.set_directions(directions);
    }
}

impl MapProvider for GoogleMapsProvider {
    type View = GoogleMapView;
    type Directions = JsValue;
    type Renderer = GoogleRouteRenderer;

    fn create_view(&self, options: &ViewOptions) -> GenericResult<Self::View> {
        let map = google::Map::new(&self.map_element, &to_js_value(options)?);

        Ok(GoogleMapView { map, markers: RefCell::new(Vec::new()) })
    }

    fn create_renderer(&self, view: &Self::View, on_change: RouteChangeHandler) -> GenericResult<Self::Renderer> {
        let renderer = google::DirectionsRenderer::new();
        renderer.set_map(&view.map);
        if let Some(panel) = &self.panel_element {
            renderer.set_panel(panel);
        }

        let source = renderer.clone();
        let logger = self.logger.clone();
        let listener = Closure::<dyn Fn()>::new(move || {
            let directions = source.get_directions();
            let directions = (!directions.is_null() && !directions.is_undefined()).then(|| {
                serde_wasm_bindgen::from_value::<RouteResult>(directions).map_err(|err| GenericError::from(err.to_string()))
            });

            notify_route_change(directions, &on_change, &logger);
        });
        renderer.add_listener(DIRECTIONS_CHANGED_EVENT, listener.as_ref().unchecked_ref());

        Ok(GoogleRouteRenderer { renderer, _listener: listener })
    }

    fn route(&self, request: &RouteRequest) -> impl Future<Output = GenericResult<Self::Directions>> {
        let request = to_js_value(request);
        let service = self.service.clone();

        async move {
            let promise = service.route(&request?);

            JsFuture::from(promise).await.map_err(|err| GenericError::from(describe_js_error(&err)))
        }
    }
}

fn to_js_value<T: Serialize + ?Sized>(value: &T) -> GenericResult<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| format!("cannot convert to js value: '{err}'").into())
}
