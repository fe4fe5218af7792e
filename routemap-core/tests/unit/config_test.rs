use super::*;
use std::fs::File;

#[test]
fn can_read_full_config() {
    let file = File::open("tests/data/config.full.json").expect("cannot read config from file");

    let settings = Settings::from(read_config(BufReader::new(file)).unwrap());

    assert_eq!(
        settings.elements,
        ElementIds { map: "route-map".to_string(), panel: "directions".to_string(), total: "distance".to_string() }
    );
    assert_eq!(settings.zoom(PresentationMode::Annotate), 8);
    assert_eq!(settings.zoom(PresentationMode::Route), 5);
    assert_eq!(
        settings.marker,
        MarkerStyle { color: "#e6194b".to_string(), font_size: "14px".to_string(), font_weight: "700".to_string() }
    );
    assert_eq!(settings.travel_mode, TravelMode::Walking);
    assert!(!settings.avoid_tolls);
    assert!(settings.logging);
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = read_config(BufReader::new("{}".as_bytes())).unwrap();

    assert_eq!(Settings::from(config), Settings::default());

    let settings = Settings::default();
    assert_eq!(settings.elements.map, "map");
    assert_eq!(settings.elements.panel, "panel");
    assert_eq!(settings.elements.total, "total");
    assert_eq!(settings.annotate_zoom, 6);
    assert_eq!(settings.route_zoom, 4);
    assert_eq!(settings.marker, MarkerStyle::default());
    assert_eq!(settings.travel_mode, TravelMode::Driving);
    assert!(settings.avoid_tolls);
    assert!(!settings.logging);
}

#[test]
fn can_keep_defaults_for_omitted_fields() {
    let config = r#"{ "zoom": { "route": 7 }, "marker": { "color": "red" }, "routing": {} }"#;

    let settings = Settings::from(read_config(BufReader::new(config.as_bytes())).unwrap());

    assert_eq!(settings.route_zoom, 7);
    assert_eq!(settings.annotate_zoom, 6);
    assert_eq!(settings.marker.color, "red");
    assert_eq!(settings.marker.font_size, "12px");
    assert_eq!(settings.travel_mode, TravelMode::Driving);
    assert!(settings.avoid_tolls);
}

#[test]
fn can_report_malformed_config() {
    let result = read_config(BufReader::new(r#"{ "zoom": { "route": "far" } }"#.as_bytes()));

    assert!(result.expect_err("expected error").to_string().starts_with("cannot deserialize config"));
}
