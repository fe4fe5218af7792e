use routemap_core::config::ElementIds;
use routemap_core::provider::HostPage;
use routemap_core::utils::GenericResult;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

/// A hosting page backed by the browser DOM.
pub struct DomPage {
    window: Window,
    map: HtmlElement,
    panel: Option<HtmlElement>,
    total: Option<HtmlElement>,
}

impl DomPage {
    /// Creates a new instance of `DomPage` looking up elements by their ids. Only map element is
    /// required.
    pub fn new(window: Window, elements: &ElementIds) -> GenericResult<Self> {
        let document = window.document().ok_or("window has no document")?;
        let find = |id: &str| document.get_element_by_id(id).and_then(|element| element.dyn_into::<HtmlElement>().ok());

        let map = find(elements.map.as_str())
            .ok_or_else(|| format!("cannot find map element with id '{}'", elements.map))?;
        let panel = find(elements.panel.as_str());
        let total = find(elements.total.as_str());

        Ok(Self { window, map, panel, total })
    }

    /// Returns the element which hosts the map.
    pub fn map_element(&self) -> &HtmlElement {
        &self.map
    }

    /// Returns the element which shows turn-by-turn directions, if present.
    pub fn panel_element(&self) -> Option<&HtmlElement> {
        self.panel.as_ref()
    }
}

impl HostPage for DomPage {
    fn dataset(&self, key: &str) -> Option<String> {
        self.map.dataset().get(key)
    }

    fn set_total_text(&self, text: &str) {
        if let Some(total) = &self.total {
            total.set_text_content(Some(text));
        }
    }

    fn alert(&self, message: &str) {
        self.window.alert_with_message(message).ok();
    }
}
