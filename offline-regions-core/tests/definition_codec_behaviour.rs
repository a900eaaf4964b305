//! Behavioural tests for the JSON region document codec.

use geo::polygon;
use offline_regions_core::{
    DecodeError, DefinitionError, GeometryRegionDefinition, LatLngBounds, RegionDefinition,
    RegionGeometry, TilePyramidRegionDefinition, decode, encode,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

#[fixture]
fn definition() -> RefCell<Option<RegionDefinition>> {
    RefCell::new(None)
}

#[fixture]
fn document() -> RefCell<String> {
    RefCell::new(String::new())
}

#[fixture]
fn outcome() -> RefCell<Option<Result<RegionDefinition, DecodeError>>> {
    RefCell::new(None)
}

fn parsed(document: &RefCell<String>) -> Value {
    serde_json::from_str(&document.borrow()).expect("encoded document is JSON")
}

fn decoded(document: &RefCell<String>) -> RegionDefinition {
    decode(&document.borrow()).expect("encoded document decodes")
}

#[given("a tile pyramid definition with no maximum zoom")]
fn given_unbounded(#[from(definition)] definition: &RefCell<Option<RegionDefinition>>) {
    let pyramid = TilePyramidRegionDefinition::new(
        "mapbox://styles/mapbox/outdoors-v11",
        LatLngBounds::world(),
        0.0,
        f64::INFINITY,
        1.0,
    )
    .expect("valid tile pyramid definition");
    *definition.borrow_mut() = Some(pyramid.into());
}

#[given("a polygon definition between zoom 2 and zoom 9")]
fn given_polygon(#[from(definition)] definition: &RefCell<Option<RegionDefinition>>) {
    let shape = polygon![
        (x: -122.54219055175781, y: 37.658819317731265),
        (x: -122.3382568359375, y: 37.658819317731265),
        (x: -122.3382568359375, y: 37.810326435534755),
        (x: -122.54219055175781, y: 37.810326435534755),
    ];
    let region = GeometryRegionDefinition::new(
        "mapbox://styles/mapbox/satellite-v9",
        RegionGeometry::from(shape),
        2.0,
        9.0,
        2.0,
    )
    .expect("valid geometry definition");
    *definition.borrow_mut() = Some(region.into());
}

#[when("I encode the definition")]
fn when_encode(
    #[from(definition)] definition: &RefCell<Option<RegionDefinition>>,
    #[from(document)] document: &RefCell<String>,
) {
    let prepared = definition.borrow();
    let region = prepared.as_ref().expect("definition prepared");
    *document.borrow_mut() = encode(region).expect("definition encodes");
}

#[when("I decode a document whose bounds hold three numbers")]
fn when_decode_short_bounds(
    #[from(outcome)] outcome: &RefCell<Option<Result<RegionDefinition, DecodeError>>>,
) {
    let text = r#"{"style_url":"x","min_zoom":0,"pixel_ratio":1,"bounds":[0,0,0]}"#;
    *outcome.borrow_mut() = Some(decode(text));
}

#[when("I decode a document whose max_zoom is below its min_zoom")]
fn when_decode_inverted_zooms(
    #[from(outcome)] outcome: &RefCell<Option<Result<RegionDefinition, DecodeError>>>,
) {
    let text = r#"{"style_url":"x","min_zoom":8,"max_zoom":3,"pixel_ratio":1,"bounds":[0,0,1,1]}"#;
    *outcome.borrow_mut() = Some(decode(text));
}

#[then("the document has no max_zoom member")]
fn then_no_max_zoom(#[from(document)] document: &RefCell<String>) {
    let value = parsed(document);
    assert!(value.get("max_zoom").is_none(), "unexpected max_zoom in {value}");
    assert!(value.get("bounds").is_some());
}

#[then("the document has a geometry member")]
fn then_geometry_member(#[from(document)] document: &RefCell<String>) {
    let value = parsed(document);
    assert_eq!(
        value.pointer("/geometry/type").and_then(Value::as_str),
        Some("Polygon")
    );
    assert!(value.get("bounds").is_none());
}

#[then("decoding the document restores an unbounded maximum zoom")]
fn then_unbounded_restored(#[from(document)] document: &RefCell<String>) {
    assert_eq!(decoded(document).max_zoom(), f64::INFINITY);
}

#[then("decoding the document restores the same definition")]
fn then_same_definition(
    #[from(definition)] definition: &RefCell<Option<RegionDefinition>>,
    #[from(document)] document: &RefCell<String>,
) {
    let prepared = definition.borrow();
    assert_eq!(Some(&decoded(document)), prepared.as_ref());
}

#[then("decoding fails because the document is malformed")]
fn then_malformed(
    #[from(outcome)] outcome: &RefCell<Option<Result<RegionDefinition, DecodeError>>>,
) {
    let result = outcome.borrow();
    assert!(
        matches!(result.as_ref(), Some(Err(DecodeError::Malformed(_)))),
        "unexpected outcome: {result:?}"
    );
}

#[then("decoding fails because the definition is invalid")]
fn then_invalid(
    #[from(outcome)] outcome: &RefCell<Option<Result<RegionDefinition, DecodeError>>>,
) {
    let result = outcome.borrow();
    assert!(
        matches!(
            result.as_ref(),
            Some(Err(DecodeError::InvalidDefinition(
                DefinitionError::MaxBelowMin { .. }
            )))
        ),
        "unexpected outcome: {result:?}"
    );
}

#[scenario(path = "tests/features/definition_codec.feature", index = 0)]
fn unbounded_max_zoom(
    definition: RefCell<Option<RegionDefinition>>,
    document: RefCell<String>,
    outcome: RefCell<Option<Result<RegionDefinition, DecodeError>>>,
) {
    let _ = (definition, document, outcome);
}

#[scenario(path = "tests/features/definition_codec.feature", index = 1)]
fn geometry_round_trip(
    definition: RefCell<Option<RegionDefinition>>,
    document: RefCell<String>,
    outcome: RefCell<Option<Result<RegionDefinition, DecodeError>>>,
) {
    let _ = (definition, document, outcome);
}

#[scenario(path = "tests/features/definition_codec.feature", index = 2)]
fn short_bounds(
    definition: RefCell<Option<RegionDefinition>>,
    document: RefCell<String>,
    outcome: RefCell<Option<Result<RegionDefinition, DecodeError>>>,
) {
    let _ = (definition, document, outcome);
}

#[scenario(path = "tests/features/definition_codec.feature", index = 3)]
fn inverted_zooms(
    definition: RefCell<Option<RegionDefinition>>,
    document: RefCell<String>,
    outcome: RefCell<Option<Result<RegionDefinition, DecodeError>>>,
) {
    let _ = (definition, document, outcome);
}
