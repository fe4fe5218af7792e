//! Bindings to the subset of Google Maps JavaScript API used to draw maps and directions.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    /// A `google.maps.Map` instance.
    #[derive(Clone, Debug)]
    pub type Map;

    /// Creates a new map inside the given element.
    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(element: &HtmlElement, options: &JsValue) -> Map;
}

#[wasm_bindgen]
extern "C" {
    /// A `google.maps.Marker` instance.
    #[derive(Clone, Debug)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &Marker, map: &Map);
}

#[wasm_bindgen]
extern "C" {
    /// A `google.maps.DirectionsService` instance.
    #[derive(Clone, Debug)]
    pub type DirectionsService;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new() -> DirectionsService;

    /// Requests directions. Returned promise resolves to `DirectionsResult`.
    #[wasm_bindgen(method)]
    pub fn route(this: &DirectionsService, request: &JsValue) -> js_sys::Promise;
}

#[wasm_bindgen]
extern "C" {
    /// A `google.maps.DirectionsRenderer` instance.
    #[derive(Clone, Debug)]
    pub type DirectionsRenderer;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new() -> DirectionsRenderer;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &DirectionsRenderer, map: &Map);

    #[wasm_bindgen(method, js_name = setPanel)]
    pub fn set_panel(this: &DirectionsRenderer, panel: &HtmlElement);

    #[wasm_bindgen(method, js_name = setDirections)]
    pub fn set_directions(this: &DirectionsRenderer, directions: &JsValue);

    /// Returns currently rendered directions or `null`.
    #[wasm_bindgen(method, js_name = getDirections)]
    pub fn get_directions(this: &DirectionsRenderer) -> JsValue;

    /// Subscribes to MVC object event, returns `MapsEventListener`.
    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &DirectionsRenderer, event_name: &str, handler: &js_sys::Function) -> JsValue;
}

/// Returns a string representation of an error thrown by JS code.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.to_string())
    } else if let Some(text) = value.as_string() {
        text
    } else if value.is_null() {
        "null".to_string()
    } else if value.is_undefined() {
        "undefined".to_string()
    } else {
        String::from(value.unchecked_ref::<js_sys::Object>().to_string())
    }
}
