//! JSON persistence for region definitions.
//!
//! Documents carry `style_url`, `min_zoom`, `pixel_ratio` and, when the
//! upper bound is finite, `max_zoom`. The area is stored either as
//! `bounds` (`[south, west, north, east]`) or as a GeoJSON `geometry`
//! object, never both.
//!
//! ```json
//! {
//!   "style_url": "mapbox://styles/mapbox/streets-v11",
//!   "min_zoom": 0,
//!   "max_zoom": 14,
//!   "pixel_ratio": 1,
//!   "bounds": [37.6609, -122.5744, 37.8271, -122.3204]
//! }
//! ```

use geo::Coord;
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    DecodeError, EncodeError, GeometryRegionDefinition, LatLngBounds, MalformedDocument,
    RegionDefinition, RegionGeometry, TilePyramidRegionDefinition,
};

const STYLE_URL: &str = "style_url";
const MIN_ZOOM: &str = "min_zoom";
const MAX_ZOOM: &str = "max_zoom";
const PIXEL_RATIO: &str = "pixel_ratio";
const BOUNDS: &str = "bounds";
const GEOMETRY: &str = "geometry";

/// The serialised form of one definition, in document field order.
#[derive(Debug, Serialize)]
struct RegionDocument<'a> {
    style_url: &'a str,
    min_zoom: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_zoom: Option<f64>,
    pixel_ratio: f64,
    #[serde(flatten)]
    area: DocumentArea,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum DocumentArea {
    Bounds([f64; 4]),
    Geometry(geojson::Geometry),
}

impl<'a> From<&'a RegionDefinition> for RegionDocument<'a> {
    fn from(definition: &'a RegionDefinition) -> Self {
        let area = match definition {
            RegionDefinition::TilePyramid(pyramid) => {
                DocumentArea::Bounds(pyramid.bounds().to_array())
            }
            RegionDefinition::Geometry(shaped) => {
                DocumentArea::Geometry(shaped.geometry().to_geojson())
            }
        };
        let max_zoom = definition.max_zoom();
        Self {
            style_url: definition.style_url(),
            min_zoom: definition.min_zoom(),
            max_zoom: max_zoom.is_finite().then_some(max_zoom),
            pixel_ratio: f64::from(definition.pixel_ratio()),
            area,
        }
    }
}

/// Encode a definition as a compact JSON document.
///
/// An unbounded `max_zoom` is written by leaving the member out.
///
/// # Errors
/// Returns [`EncodeError`] when the JSON writer fails.
///
/// # Examples
/// ```
/// use offline_regions_core::{LatLngBounds, RegionDefinition, TilePyramidRegionDefinition, encode};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let definition = RegionDefinition::from(TilePyramidRegionDefinition::new(
///     "style.json",
///     LatLngBounds::world(),
///     0.0,
///     f64::INFINITY,
///     1.0,
/// )?);
/// assert_eq!(
///     encode(&definition)?,
///     r#"{"style_url":"style.json","min_zoom":0.0,"pixel_ratio":1.0,"bounds":[-90.0,-180.0,90.0,180.0]}"#
/// );
/// # Ok(())
/// # }
/// ```
pub fn encode(definition: &RegionDefinition) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(&RegionDocument::from(definition))?)
}

/// Encode a definition as a JSON value.
///
/// # Errors
/// Returns [`EncodeError`] when the definition cannot be represented.
pub fn encode_value(definition: &RegionDefinition) -> Result<Value, EncodeError> {
    Ok(serde_json::to_value(RegionDocument::from(definition))?)
}

/// Decode a definition from JSON text.
///
/// Structural problems are reported as [`DecodeError::Malformed`] before any
/// definition is built. A well-formed document is then validated by the
/// definition constructor, whose failures surface as
/// [`DecodeError::InvalidDefinition`].
///
/// When both `bounds` and `geometry` are present, a valid `bounds` wins.
///
/// Bounds are rebuilt as the hull of their two corners, so corner order does
/// not matter. An empty [`LatLngBounds`] encodes as `[90, 180, -90, -180]`
/// and therefore decodes as [`LatLngBounds::world`].
///
/// # Errors
/// Returns [`DecodeError`] when the text is not a valid region document.
///
/// # Examples
/// ```
/// use offline_regions_core::{DecodeError, decode};
///
/// let definition = decode(r#"{"style_url":"x","min_zoom":0,"pixel_ratio":1,"bounds":[1,2,3,4]}"#)?;
/// assert_eq!(definition.max_zoom(), f64::INFINITY);
///
/// let short = decode(r#"{"style_url":"x","min_zoom":0,"pixel_ratio":1,"bounds":[0,0,0]}"#);
/// assert!(matches!(short, Err(DecodeError::Malformed(_))));
/// # Ok::<(), DecodeError>(())
/// ```
pub fn decode(text: &str) -> Result<RegionDefinition, DecodeError> {
    let value: Value = serde_json::from_str(text).map_err(MalformedDocument::Parse)?;
    decode_value(&value)
}

/// Decode a definition from an already parsed JSON value.
///
/// # Errors
/// Returns [`DecodeError`] when the value is not a valid region document.
pub fn decode_value(value: &Value) -> Result<RegionDefinition, DecodeError> {
    let fields = DocumentFields::extract(value)?;
    Ok(fields.into_definition()?)
}

/// Members of a document that passed structural validation.
#[derive(Debug)]
struct DocumentFields {
    style_url: String,
    min_zoom: f64,
    max_zoom: f64,
    pixel_ratio: f64,
    area: DecodedArea,
}

#[derive(Debug)]
enum DecodedArea {
    Bounds(LatLngBounds),
    Geometry(RegionGeometry),
}

impl DocumentFields {
    fn extract(value: &Value) -> Result<Self, MalformedDocument> {
        let object = value.as_object().ok_or(MalformedDocument::NotAnObject)?;
        Ok(Self {
            style_url: required_string(object, STYLE_URL)?,
            min_zoom: required_number(object, MIN_ZOOM)?,
            max_zoom: optional_number(object, MAX_ZOOM)?.unwrap_or(f64::INFINITY),
            pixel_ratio: required_number(object, PIXEL_RATIO)?,
            area: parse_area(object)?,
        })
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "pixel ratios are stored in single precision"
    )]
    fn into_definition(self) -> Result<RegionDefinition, crate::DefinitionError> {
        let pixel_ratio = self.pixel_ratio as f32;
        match self.area {
            DecodedArea::Bounds(bounds) => {
                debug!("decoded tile pyramid region for {}", self.style_url);
                TilePyramidRegionDefinition::new(
                    self.style_url,
                    bounds,
                    self.min_zoom,
                    self.max_zoom,
                    pixel_ratio,
                )
                .map(RegionDefinition::from)
            }
            DecodedArea::Geometry(geometry) => {
                debug!(
                    "decoded {} geometry region for {}",
                    geometry.kind(),
                    self.style_url
                );
                GeometryRegionDefinition::new(
                    self.style_url,
                    geometry,
                    self.min_zoom,
                    self.max_zoom,
                    pixel_ratio,
                )
                .map(RegionDefinition::from)
            }
        }
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, MalformedDocument> {
    let value = object.get(field).ok_or(MalformedDocument::MissingField { field })?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or(MalformedDocument::WrongType {
            field,
            expected: "a string",
        })
}

fn required_number(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, MalformedDocument> {
    optional_number(object, field)?.ok_or(MalformedDocument::MissingField { field })
}

fn optional_number(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<f64>, MalformedDocument> {
    object
        .get(field)
        .map(|value| {
            value.as_f64().ok_or(MalformedDocument::WrongType {
                field,
                expected: "a number",
            })
        })
        .transpose()
}

fn parse_area(object: &Map<String, Value>) -> Result<DecodedArea, MalformedDocument> {
    if let Some(bounds) = object.get(BOUNDS).and_then(parse_bounds) {
        return Ok(DecodedArea::Bounds(bounds));
    }
    match object.get(GEOMETRY) {
        Some(geometry @ Value::Object(_)) => parse_geometry(geometry).map(DecodedArea::Geometry),
        _ => Err(MalformedDocument::MissingArea),
    }
}

/// Rebuild bounds from `[south, west, north, east]`, normalising the
/// corners through [`LatLngBounds::hull`].
fn parse_bounds(value: &Value) -> Option<LatLngBounds> {
    let [south, west, north, east] = value.as_array()?.as_slice() else {
        return None;
    };
    let southwest = Coord {
        x: west.as_f64()?,
        y: south.as_f64()?,
    };
    let northeast = Coord {
        x: east.as_f64()?,
        y: north.as_f64()?,
    };
    Some(LatLngBounds::hull(southwest, northeast))
}

fn parse_geometry(value: &Value) -> Result<RegionGeometry, MalformedDocument> {
    let geometry =
        geojson::Geometry::from_json_value(value.clone()).map_err(invalid_geometry)?;
    let shape = geo::Geometry::<f64>::try_from(geometry).map_err(invalid_geometry)?;
    Ok(RegionGeometry::try_from(shape)?)
}

fn invalid_geometry(err: geojson::Error) -> MalformedDocument {
    MalformedDocument::InvalidGeometry(Box::new(err))
}
