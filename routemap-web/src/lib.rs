//! Browser bindings which show coordinates embedded into a web page on Google Maps.
//!
//! The hosting page loads Maps JavaScript API and, once it is ready, calls exported `initMap`
//! function explicitly:
//!
//! ```js
//! import init, { initMap } from "./pkg/routemap_web.js";
//!
//! window.onMapsReady = async () => {
//!     await init();
//!     const session = await initMap("route", JSON.stringify({ zoom: { route: 5 } }));
//! };
//! ```

mod google;

mod page;
pub use self::page::DomPage;

mod provider;
pub use self::provider::*;

use routemap_core::config::{read_config, Settings};
use routemap_core::initializer::{MapHandle, MapInitializer, RouteStatus};
use routemap_core::models::PresentationMode;
use routemap_core::utils::{Environment, GenericResult};
use std::io::BufReader;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// Keeps map objects and event listeners alive for the page lifetime.
#[wasm_bindgen]
pub struct MapSession {
    handle: MapHandle<GoogleMapsProvider>,
}

#[wasm_bindgen]
impl MapSession {
    /// Returns presentation mode of the map.
    pub fn mode(&self) -> String {
        self.handle.mode().to_string()
    }

    /// Returns amount of markers placed on the map.
    #[wasm_bindgen(js_name = markerCount)]
    pub fn marker_count(&self) -> usize {
        match &self.handle {
            MapHandle::Annotated { markers, .. } => markers.len(),
            MapHandle::Routed { .. } => 0,
        }
    }

    /// Returns amount of intermediate stops of the requested route.
    #[wasm_bindgen(js_name = waypointCount)]
    pub fn waypoint_count(&self) -> usize {
        self.handle.request().map_or(0, |request| request.waypoints.len())
    }

    /// Returns a reason of route request failure, if any.
    #[wasm_bindgen(js_name = routeError)]
    pub fn route_error(&self) -> Option<String> {
        match &self.handle {
            MapHandle::Routed { status: RouteStatus::Failed(err), .. } => Some(err.to_string()),
            _ => None,
        }
    }
}

/// Initializes map on the page: `mode` is either `annotate` (numbered markers) or `route`
/// (driving directions with total distance), `config` is an optional json configuration.
#[wasm_bindgen(js_name = initMap)]
pub async fn init_map(mode: String, config: Option<String>) -> Result<MapSession, JsValue> {
    console_error_panic_hook::set_once();

    create_session(mode.as_str(), config.as_deref()).await.map_err(|err| JsValue::from_str(err.to_string().as_str()))
}

async fn create_session(mode: &str, config: Option<&str>) -> GenericResult<MapSession> {
    let settings = match config {
        Some(config) => Settings::from(read_config(BufReader::new(config.as_bytes()))?),
        None => Settings::default(),
    };
    let environment = create_environment(&settings);
    let logger = environment.logger.clone();

    let mode = mode.parse::<PresentationMode>()?;
    let window = web_sys::window().ok_or("no global window")?;
    let page = Rc::new(DomPage::new(window, &settings.elements)?);
    let provider =
        GoogleMapsProvider::new(page.map_element().clone(), page.panel_element().cloned(), environment.logger.clone());

    let handle = MapInitializer::new(provider, page, settings, environment).initialize(mode).await.map_err(|err| {
        (logger)(&format!("cannot initialize map: {err}"));
        err
    })?;

    Ok(MapSession { handle })
}

fn create_environment(settings: &Settings) -> Environment {
    if settings.logging {
        Environment::new(Arc::new(|msg: &str| web_sys::console::log_1(&JsValue::from_str(msg))))
    } else {
        Environment::new_silent()
    }
}
