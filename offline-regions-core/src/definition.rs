//! Region definitions: what to download, how deep, and for which style.
//!
//! A definition pairs a style with an area and a zoom interval. Two area
//! shapes exist: a latitude/longitude rectangle ([`TilePyramidRegionDefinition`])
//! and an arbitrary simple geometry ([`GeometryRegionDefinition`]).
//! [`RegionDefinition`] is the closed sum of the two, so code handling
//! definitions has to account for both.
//!
//! Constructors validate their input and return [`DefinitionError`] instead
//! of clamping silently.

use crate::enumerate::{tile_count, tile_cover};
use crate::{DefinitionError, LatLngBounds, RegionGeometry, TileId, TileSource};

/// A rectangular region downloaded as a full tile pyramid.
///
/// # Examples
/// ```
/// use offline_regions_core::{LatLngBounds, TilePyramidRegionDefinition, TileSource};
///
/// # fn main() -> Result<(), offline_regions_core::DefinitionError> {
/// let definition = TilePyramidRegionDefinition::new(
///     "mapbox://styles/mapbox/streets-v11",
///     LatLngBounds::world(),
///     0.0,
///     0.0,
///     1.0,
/// )?;
/// assert_eq!(definition.tile_count(&TileSource::default()), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TilePyramidRegionDefinition {
    style_url: String,
    bounds: LatLngBounds,
    min_zoom: f64,
    max_zoom: f64,
    pixel_ratio: f32,
}

/// A region covering only the tiles a geometry touches.
///
/// # Examples
/// ```
/// use geo::point;
/// use offline_regions_core::{GeometryRegionDefinition, RegionGeometry, TileId, TileSource};
///
/// # fn main() -> Result<(), offline_regions_core::DefinitionError> {
/// let definition = GeometryRegionDefinition::new(
///     "mapbox://styles/mapbox/streets-v11",
///     RegionGeometry::from(point!(x: -122.5744, y: 37.6609)),
///     2.0,
///     2.0,
///     1.0,
/// )?;
/// assert_eq!(
///     definition.tile_cover(&TileSource::default()),
///     vec![TileId::new(2, 0, 1)]
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryRegionDefinition {
    style_url: String,
    geometry: RegionGeometry,
    min_zoom: f64,
    max_zoom: f64,
    pixel_ratio: f32,
}

/// Check the zoom interval and pixel ratio shared by both shapes.
///
/// Positive infinity is accepted for `max_zoom`; NaN is not.
const fn validate_levels(
    min_zoom: f64,
    max_zoom: f64,
    pixel_ratio: f32,
) -> Result<(), DefinitionError> {
    if !min_zoom.is_finite() {
        return Err(DefinitionError::NonFiniteMinZoom(min_zoom));
    }
    if min_zoom < 0.0 {
        return Err(DefinitionError::NegativeMinZoom(min_zoom));
    }
    if max_zoom.is_nan() {
        return Err(DefinitionError::NanMaxZoom);
    }
    if max_zoom < 0.0 {
        return Err(DefinitionError::NegativeMaxZoom(max_zoom));
    }
    if max_zoom < min_zoom {
        return Err(DefinitionError::MaxBelowMin { min_zoom, max_zoom });
    }
    if !pixel_ratio.is_finite() {
        return Err(DefinitionError::NonFinitePixelRatio(pixel_ratio));
    }
    if pixel_ratio < 0.0 {
        return Err(DefinitionError::NegativePixelRatio(pixel_ratio));
    }
    Ok(())
}

fn validate_bounds(bounds: &LatLngBounds) -> Result<(), DefinitionError> {
    let sides = bounds.to_array();
    if sides.iter().any(|side| !side.is_finite()) {
        return Err(DefinitionError::NonFiniteCoordinate);
    }
    [bounds.south(), bounds.north()]
        .into_iter()
        .find(|latitude| !(-90.0..=90.0).contains(latitude))
        .map_or(Ok(()), |latitude| {
            Err(DefinitionError::LatitudeOutOfRange(latitude))
        })
}

impl TilePyramidRegionDefinition {
    /// Validate and construct a tile-pyramid definition.
    ///
    /// # Errors
    /// Returns [`DefinitionError`] when a zoom bound or the pixel ratio is
    /// out of range, or when the bounds are not finite or reach beyond the
    /// poles.
    pub fn new(
        style_url: impl Into<String>,
        bounds: LatLngBounds,
        min_zoom: f64,
        max_zoom: f64,
        pixel_ratio: f32,
    ) -> Result<Self, DefinitionError> {
        validate_levels(min_zoom, max_zoom, pixel_ratio)?;
        validate_bounds(&bounds)?;
        Ok(Self {
            style_url: style_url.into(),
            bounds,
            min_zoom,
            max_zoom,
            pixel_ratio,
        })
    }

    /// URL of the style the region renders.
    #[must_use]
    pub fn style_url(&self) -> &str {
        &self.style_url
    }

    /// Area to download.
    #[must_use]
    pub const fn bounds(&self) -> &LatLngBounds {
        &self.bounds
    }

    /// Lowest declared zoom.
    #[must_use]
    pub const fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Highest declared zoom; infinite when unbounded.
    #[must_use]
    pub const fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Device pixel ratio the tiles are fetched for.
    #[must_use]
    pub const fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Tiles the region needs from `source`, zoom by zoom.
    #[must_use]
    pub fn tile_cover(&self, source: &TileSource) -> Vec<TileId> {
        tile_cover(self.min_zoom, self.max_zoom, &self.bounds, source)
    }

    /// Number of tiles the region needs from `source`.
    #[must_use]
    pub fn tile_count(&self, source: &TileSource) -> u64 {
        tile_count(self.min_zoom, self.max_zoom, &self.bounds, source)
    }
}

impl GeometryRegionDefinition {
    /// Validate and construct a geometry definition.
    ///
    /// # Errors
    /// Returns [`DefinitionError`] when a zoom bound or the pixel ratio is
    /// out of range, or when a geometry coordinate is not finite.
    pub fn new(
        style_url: impl Into<String>,
        geometry: RegionGeometry,
        min_zoom: f64,
        max_zoom: f64,
        pixel_ratio: f32,
    ) -> Result<Self, DefinitionError> {
        validate_levels(min_zoom, max_zoom, pixel_ratio)?;
        if !geometry.has_finite_coordinates() {
            return Err(DefinitionError::NonFiniteCoordinate);
        }
        Ok(Self {
            style_url: style_url.into(),
            geometry,
            min_zoom,
            max_zoom,
            pixel_ratio,
        })
    }

    /// URL of the style the region renders.
    #[must_use]
    pub fn style_url(&self) -> &str {
        &self.style_url
    }

    /// Area to download.
    #[must_use]
    pub const fn geometry(&self) -> &RegionGeometry {
        &self.geometry
    }

    /// Lowest declared zoom.
    #[must_use]
    pub const fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Highest declared zoom; infinite when unbounded.
    #[must_use]
    pub const fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Device pixel ratio the tiles are fetched for.
    #[must_use]
    pub const fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Tiles the region needs from `source`, zoom by zoom.
    #[must_use]
    pub fn tile_cover(&self, source: &TileSource) -> Vec<TileId> {
        tile_cover(self.min_zoom, self.max_zoom, &self.geometry, source)
    }

    /// Number of tiles the region needs from `source`.
    #[must_use]
    pub fn tile_count(&self, source: &TileSource) -> u64 {
        tile_count(self.min_zoom, self.max_zoom, &self.geometry, source)
    }
}

/// Either kind of region definition.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionDefinition {
    /// A rectangular tile pyramid.
    TilePyramid(TilePyramidRegionDefinition),
    /// A geometry-shaped region.
    Geometry(GeometryRegionDefinition),
}

impl RegionDefinition {
    /// URL of the style the region renders.
    #[must_use]
    pub fn style_url(&self) -> &str {
        match self {
            Self::TilePyramid(definition) => definition.style_url(),
            Self::Geometry(definition) => definition.style_url(),
        }
    }

    /// Lowest declared zoom.
    #[must_use]
    pub const fn min_zoom(&self) -> f64 {
        match self {
            Self::TilePyramid(definition) => definition.min_zoom(),
            Self::Geometry(definition) => definition.min_zoom(),
        }
    }

    /// Highest declared zoom; infinite when unbounded.
    #[must_use]
    pub const fn max_zoom(&self) -> f64 {
        match self {
            Self::TilePyramid(definition) => definition.max_zoom(),
            Self::Geometry(definition) => definition.max_zoom(),
        }
    }

    /// Device pixel ratio the tiles are fetched for.
    #[must_use]
    pub const fn pixel_ratio(&self) -> f32 {
        match self {
            Self::TilePyramid(definition) => definition.pixel_ratio(),
            Self::Geometry(definition) => definition.pixel_ratio(),
        }
    }

    /// Tiles the region needs from `source`, zoom by zoom.
    #[must_use]
    pub fn tile_cover(&self, source: &TileSource) -> Vec<TileId> {
        match self {
            Self::TilePyramid(definition) => definition.tile_cover(source),
            Self::Geometry(definition) => definition.tile_cover(source),
        }
    }

    /// Number of tiles the region needs from `source`.
    #[must_use]
    pub fn tile_count(&self, source: &TileSource) -> u64 {
        match self {
            Self::TilePyramid(definition) => definition.tile_count(source),
            Self::Geometry(definition) => definition.tile_count(source),
        }
    }
}

impl From<TilePyramidRegionDefinition> for RegionDefinition {
    fn from(definition: TilePyramidRegionDefinition) -> Self {
        Self::TilePyramid(definition)
    }
}

impl From<GeometryRegionDefinition> for RegionDefinition {
    fn from(definition: GeometryRegionDefinition) -> Self {
        Self::Geometry(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, point};
    use rstest::{fixture, rstest};

    const STYLE: &str = "mapbox://styles/mapbox/streets-v11";

    #[fixture]
    fn world() -> LatLngBounds {
        LatLngBounds::world()
    }

    #[rstest]
    #[case(0.0, 0.0, 1.0)]
    #[case(0.0, f64::INFINITY, 0.0)]
    #[case(3.5, 3.5, 2.0)]
    fn accepts_valid_levels(
        world: LatLngBounds,
        #[case] min_zoom: f64,
        #[case] max_zoom: f64,
        #[case] pixel_ratio: f32,
    ) {
        let definition =
            TilePyramidRegionDefinition::new(STYLE, world, min_zoom, max_zoom, pixel_ratio)
                .expect("valid definition");
        assert_eq!(definition.max_zoom(), max_zoom);
        assert_eq!(definition.style_url(), STYLE);
    }

    #[rstest]
    #[case(-1.0, 2.0, 1.0, DefinitionError::NegativeMinZoom(-1.0))]
    #[case(f64::INFINITY, f64::INFINITY, 1.0, DefinitionError::NonFiniteMinZoom(f64::INFINITY))]
    #[case(0.0, -2.0, 1.0, DefinitionError::NegativeMaxZoom(-2.0))]
    #[case(0.0, f64::NAN, 1.0, DefinitionError::NanMaxZoom)]
    #[case(5.0, 4.0, 1.0, DefinitionError::MaxBelowMin { min_zoom: 5.0, max_zoom: 4.0 })]
    #[case(0.0, 1.0, -1.0, DefinitionError::NegativePixelRatio(-1.0))]
    #[case(0.0, 1.0, f32::INFINITY, DefinitionError::NonFinitePixelRatio(f32::INFINITY))]
    fn rejects_invalid_levels(
        world: LatLngBounds,
        #[case] min_zoom: f64,
        #[case] max_zoom: f64,
        #[case] pixel_ratio: f32,
        #[case] expected: DefinitionError,
    ) {
        let result =
            TilePyramidRegionDefinition::new(STYLE, world, min_zoom, max_zoom, pixel_ratio);
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    fn rejects_nan_min_zoom() {
        let result =
            TilePyramidRegionDefinition::new(STYLE, LatLngBounds::world(), f64::NAN, 1.0, 1.0);
        assert!(matches!(result, Err(DefinitionError::NonFiniteMinZoom(_))));
    }

    #[rstest]
    fn rejects_latitudes_beyond_the_poles() {
        let bounds = LatLngBounds::hull(Coord { x: 0.0, y: -95.0 }, Coord { x: 10.0, y: 10.0 });
        let result = TilePyramidRegionDefinition::new(STYLE, bounds, 0.0, 1.0, 1.0);
        assert_eq!(result, Err(DefinitionError::LatitudeOutOfRange(-95.0)));
    }

    #[rstest]
    fn accepts_empty_bounds() {
        let definition =
            TilePyramidRegionDefinition::new(STYLE, LatLngBounds::empty(), 0.0, 20.0, 1.0)
                .expect("empty bounds are valid");
        assert!(definition.tile_cover(&TileSource::default()).is_empty());
    }

    #[rstest]
    fn rejects_non_finite_geometry() {
        let geometry = RegionGeometry::from(point!(x: f64::INFINITY, y: 0.0));
        let result = GeometryRegionDefinition::new(STYLE, geometry, 0.0, 1.0, 1.0);
        assert_eq!(result, Err(DefinitionError::NonFiniteCoordinate));
    }

    #[rstest]
    fn region_definition_dispatches_to_each_shape(world: LatLngBounds) {
        let pyramid = RegionDefinition::from(
            TilePyramidRegionDefinition::new(STYLE, world, 0.0, 1.0, 1.0).expect("valid pyramid"),
        );
        let geometry = RegionDefinition::from(
            GeometryRegionDefinition::new(
                STYLE,
                RegionGeometry::from(point!(x: 0.0, y: 0.0)),
                0.0,
                1.0,
                2.0,
            )
            .expect("valid geometry"),
        );
        let source = TileSource::default();
        assert_eq!(pyramid.tile_count(&source), 5);
        assert_eq!(geometry.tile_count(&source), 2);
        assert_eq!(geometry.pixel_ratio(), 2.0);
        assert_eq!(pyramid.style_url(), geometry.style_url());
    }
}
