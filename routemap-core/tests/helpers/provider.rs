use crate::models::*;
use crate::provider::*;
use crate::utils::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::{ready, Future};
use std::rc::Rc;
use std::sync::Arc;

/// Keeps track of everything what was done with the fake provider.
#[derive(Default)]
pub struct ProviderState {
    pub views: RefCell<Vec<ViewOptions>>,
    pub markers: RefCell<Vec<Marker>>,
    pub requests: RefCell<Vec<RouteRequest>>,
    pub rendered: RefCell<Vec<RouteResult>>,
}

pub struct FakeProvider {
    pub outcome: GenericResult<RouteResult>,
    pub state: Rc<ProviderState>,
}

impl FakeProvider {
    pub fn new(outcome: GenericResult<RouteResult>) -> Self {
        Self { outcome, state: Rc::new(ProviderState::default()) }
    }
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::new(Ok(RouteResult::default()))
    }
}

pub struct FakeView {
    state: Rc<ProviderState>,
}

impl MapView for FakeView {
    fn place_marker(&self, marker: &Marker) -> GenericResult<()> {
        self.state.markers.borrow_mut().push(marker.clone());
        Ok(())
    }
}

/// Mimics provider renderer: notifies listener right after directions are set.
pub struct FakeRenderer {
    state: Rc<ProviderState>,
    pub on_change: RouteChangeHandler,
}

impl RouteRenderer<RouteResult> for FakeRenderer {
    fn render(&self, directions: &RouteResult) {
        self.state.rendered.borrow_mut().push(directions.clone());
        (self.on_change)(Some(directions));
    }
}

impl MapProvider for FakeProvider {
    type View = FakeView;
    type Directions = RouteResult;
    type Renderer = FakeRenderer;

    fn create_view(&self, options: &ViewOptions) -> GenericResult<Self::View> {
        self.state.views.borrow_mut().push(options.clone());
        Ok(FakeView { state: self.state.clone() })
    }

    fn create_renderer(&self, _: &Self::View, on_change: RouteChangeHandler) -> GenericResult<Self::Renderer> {
        Ok(FakeRenderer { state: self.state.clone(), on_change })
    }

    fn route(&self, request: &RouteRequest) -> impl Future<Output = GenericResult<Self::Directions>> {
        self.state.requests.borrow_mut().push(request.clone());
        ready(self.outcome.clone())
    }
}

#[derive(Default)]
pub struct FakePage {
    pub attributes: HashMap<String, String>,
    pub total_writes: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn new(center: Option<&str>, geocode: Option<&str>) -> Self {
        let attributes = [("center", center), ("geocode", geocode)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key.to_string(), value.to_string())))
            .collect();

        Self { attributes, ..Self::default() }
    }

    pub fn total_text(&self) -> Option<String> {
        self.total_writes.borrow().last().cloned()
    }
}

impl HostPage for FakePage {
    fn dataset(&self, key: &str) -> Option<String> {
        self.attributes.get(key).cloned()
    }

    fn set_total_text(&self, text: &str) {
        self.total_writes.borrow_mut().push(text.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Creates an environment which collects log messages into returned storage.
pub fn create_test_environment() -> (Environment, Rc<RefCell<Vec<String>>>) {
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = messages.clone();

    (Environment::new(Arc::new(move |msg: &str| sink.borrow_mut().push(msg.to_string()))), messages)
}
