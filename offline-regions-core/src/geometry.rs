//! The geometry shapes a region may be drawn with.

use geo::{
    CoordsIter, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use thiserror::Error;

/// The area of a geometry region.
///
/// Only the six simple GeoJSON shapes are accepted; collections and the
/// `geo`-specific `Line`, `Rect` and `Triangle` shapes are rejected on
/// conversion.
///
/// # Examples
/// ```
/// use geo::{Geometry, Point};
/// use offline_regions_core::RegionGeometry;
///
/// let geometry = RegionGeometry::try_from(Geometry::Point(Point::new(-122.5, 37.7)))?;
/// assert_eq!(geometry.kind(), "Point");
/// # Ok::<(), offline_regions_core::UnsupportedGeometry>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RegionGeometry {
    /// A single position.
    Point(Point),
    /// Several unconnected positions.
    MultiPoint(MultiPoint),
    /// A connected path.
    LineString(LineString),
    /// Several paths.
    MultiLineString(MultiLineString),
    /// An exterior ring with optional holes.
    Polygon(Polygon),
    /// Several polygons.
    MultiPolygon(MultiPolygon),
}

/// Returned when a `geo` geometry has no region counterpart.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{kind} geometries cannot describe an offline region")]
pub struct UnsupportedGeometry {
    /// Name of the rejected geometry kind.
    pub kind: &'static str,
}

impl RegionGeometry {
    /// GeoJSON type name of the shape.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::MultiPoint(_) => "MultiPoint",
            Self::LineString(_) => "LineString",
            Self::MultiLineString(_) => "MultiLineString",
            Self::Polygon(_) => "Polygon",
            Self::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Whether every coordinate is a finite number.
    #[must_use]
    pub fn has_finite_coordinates(&self) -> bool {
        let finite = |coord: geo::Coord| coord.x.is_finite() && coord.y.is_finite();
        match self {
            Self::Point(point) => point.coords_iter().all(finite),
            Self::MultiPoint(points) => points.coords_iter().all(finite),
            Self::LineString(line) => line.coords_iter().all(finite),
            Self::MultiLineString(lines) => lines.coords_iter().all(finite),
            Self::Polygon(polygon) => polygon.coords_iter().all(finite),
            Self::MultiPolygon(polygons) => polygons.coords_iter().all(finite),
        }
    }

    /// Convert into GeoJSON form.
    #[must_use]
    pub fn to_geojson(&self) -> geojson::Geometry {
        let value = match self {
            Self::Point(point) => geojson::Value::from(point),
            Self::MultiPoint(points) => geojson::Value::from(points),
            Self::LineString(line) => geojson::Value::from(line),
            Self::MultiLineString(lines) => geojson::Value::from(lines),
            Self::Polygon(polygon) => geojson::Value::from(polygon),
            Self::MultiPolygon(polygons) => geojson::Value::from(polygons),
        };
        geojson::Geometry::new(value)
    }
}

impl TryFrom<Geometry> for RegionGeometry {
    type Error = UnsupportedGeometry;

    fn try_from(geometry: Geometry) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::Point(point) => Ok(Self::Point(point)),
            Geometry::MultiPoint(points) => Ok(Self::MultiPoint(points)),
            Geometry::LineString(line) => Ok(Self::LineString(line)),
            Geometry::MultiLineString(lines) => Ok(Self::MultiLineString(lines)),
            Geometry::Polygon(polygon) => Ok(Self::Polygon(polygon)),
            Geometry::MultiPolygon(polygons) => Ok(Self::MultiPolygon(polygons)),
            Geometry::Line(_) => Err(UnsupportedGeometry { kind: "Line" }),
            Geometry::Rect(_) => Err(UnsupportedGeometry { kind: "Rect" }),
            Geometry::Triangle(_) => Err(UnsupportedGeometry { kind: "Triangle" }),
            Geometry::GeometryCollection(_) => Err(UnsupportedGeometry {
                kind: "GeometryCollection",
            }),
        }
    }
}

impl From<RegionGeometry> for Geometry {
    fn from(geometry: RegionGeometry) -> Self {
        match geometry {
            RegionGeometry::Point(point) => Self::Point(point),
            RegionGeometry::MultiPoint(points) => Self::MultiPoint(points),
            RegionGeometry::LineString(line) => Self::LineString(line),
            RegionGeometry::MultiLineString(lines) => Self::MultiLineString(lines),
            RegionGeometry::Polygon(polygon) => Self::Polygon(polygon),
            RegionGeometry::MultiPolygon(polygons) => Self::MultiPolygon(polygons),
        }
    }
}

macro_rules! region_geometry_from {
    ($($shape:ident),+ $(,)?) => {
        $(
            impl From<$shape> for RegionGeometry {
                fn from(shape: $shape) -> Self {
                    Self::$shape(shape)
                }
            }
        )+
    };
}

region_geometry_from!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon
);
