use super::*;
use crate::helpers::models::create_route_result;
use crate::helpers::provider::*;

#[test]
fn can_show_total_distance() {
    let page = FakePage::default();
    let (environment, messages) = create_test_environment();

    let text = show_total_distance(&create_route_result(vec![vec![1000., 2500., 500.]]), &page, &environment.logger);

    assert_eq!(text.as_deref(), Some("4 km"));
    assert_eq!(page.total_text().as_deref(), Some("4 km"));
    assert_eq!(messages.borrow().as_slice(), ["total distance: 4 km"]);
}

#[test]
fn can_leave_total_unchanged_without_routes() {
    let page = FakePage::default();
    page.set_total_text("12 km");
    let (environment, _) = create_test_environment();

    let text = show_total_distance(&create_route_result(vec![]), &page, &environment.logger);

    assert!(text.is_none());
    assert_eq!(page.total_writes.borrow().as_slice(), ["12 km"]);
}

#[test]
fn can_recompute_total_distance_idempotently() {
    let page = FakePage::default();
    let result = create_route_result(vec![vec![1200., 300.]]);
    let environment = Environment::new_silent();

    let first = show_total_distance(&result, &page, &environment.logger);
    let second = show_total_distance(&result, &page, &environment.logger);

    assert_eq!(first, second);
    assert_eq!(page.total_writes.borrow().as_slice(), ["1.5 km", "1.5 km"]);
}

#[test]
fn can_read_page_data_from_host_page() {
    let mut page = FakePage::new(Some("[1, 2]"), Some("[[1, 2], [3, 4]]"));
    page.attributes.insert("address".to_string(), "221B Baker Street".to_string());

    let page_data = read_page_data(&page).unwrap();

    assert_eq!(page_data.center, Coordinate::new(1., 2.));
    assert_eq!(page_data.coordinates.len(), 2);
    assert_eq!(page_data.address.as_deref(), Some("221B Baker Street"));
}

#[test]
fn can_keep_route_request_in_handle() {
    let page = Rc::new(FakePage::new(Some("[0, 0]"), Some("[[1, 1], [2, 2], [3, 3]]")));
    let initializer = MapInitializer::new(
        FakeProvider::new(Ok(create_route_result(vec![vec![100.]]))),
        page,
        Settings::default(),
        Environment::new_silent(),
    );

    let handle = pollster::block_on(initializer.initialize(PresentationMode::Route)).unwrap();

    assert_eq!(handle.mode(), PresentationMode::Route);
    let request = handle.request().expect("no route request");
    assert_eq!(request.origin, Coordinate::new(1., 1.));
    assert_eq!(request.waypoints.len(), 1);
    assert_eq!(request.destination, Coordinate::new(3., 3.));
}

#[test]
fn can_have_no_route_request_for_markers() {
    let page = Rc::new(FakePage::new(Some("[0, 0]"), Some("[[1, 1]]")));
    let initializer =
        MapInitializer::new(FakeProvider::default(), page, Settings::default(), Environment::new_silent());

    let handle = pollster::block_on(initializer.initialize(PresentationMode::Annotate)).unwrap();

    assert!(handle.request().is_none());
}
