//! Zoom arithmetic shared by every region definition.
//!
//! A definition declares a fractional zoom interval. Before any tiles can be
//! enumerated that interval is mapped onto integer tile zooms for a concrete
//! source (its kind and tile size) and intersected with the zoom levels the
//! source actually serves.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Highest zoom level whose tile indices fit the 32-bit [`crate::TileId`]
/// columns and rows.
pub const MAX_TILE_ZOOM: u8 = 32;

/// Tile size, in pixels, at which declared zoom levels map one-to-one onto
/// tile zoom levels.
const REFERENCE_TILE_SIZE: f64 = 512.0;

/// The kind of style source a region is being covered for.
///
/// Raster-like sources round fractional zoom levels to the nearest integer;
/// every other kind floors them.
///
/// # Examples
/// ```
/// use offline_regions_core::SourceKind;
///
/// assert_eq!(SourceKind::RasterDem.as_str(), "raster-dem");
/// assert_eq!("vector".parse::<SourceKind>(), Ok(SourceKind::Vector));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Vector tile source.
    Vector,
    /// Raster tile source.
    Raster,
    /// Raster elevation source.
    RasterDem,
    /// Inline or remote GeoJSON source tiled on the client.
    GeoJson,
    /// Video overlay.
    Video,
    /// Static image overlay.
    Image,
    /// Annotation layer tiles.
    Annotations,
    /// Application-provided vector tiles.
    CustomVector,
}

impl SourceKind {
    /// Return the source kind as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::Raster => "raster",
            Self::RasterDem => "raster-dem",
            Self::GeoJson => "geojson",
            Self::Video => "video",
            Self::Image => "image",
            Self::Annotations => "annotations",
            Self::CustomVector => "custom-vector",
        }
    }

    /// Whether fractional zoom levels round to the nearest integer rather
    /// than down.
    #[must_use]
    pub const fn rounds_zoom(self) -> bool {
        matches!(
            self,
            Self::Raster | Self::RasterDem | Self::Video | Self::Image
        )
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vector" => Ok(Self::Vector),
            "raster" => Ok(Self::Raster),
            "raster-dem" => Ok(Self::RasterDem),
            "geojson" => Ok(Self::GeoJson),
            "video" => Ok(Self::Video),
            "image" => Ok(Self::Image),
            "annotations" => Ok(Self::Annotations),
            "custom-vector" => Ok(Self::CustomVector),
            _ => Err(format!("unknown source kind '{s}'")),
        }
    }
}

/// Inclusive range of integer zoom levels a source serves.
///
/// # Examples
/// ```
/// use offline_regions_core::ZoomRange;
///
/// let range = ZoomRange::new(0, 22);
/// assert!(range.contains(14));
/// assert!(!range.contains(23));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoomRange {
    /// Lowest served zoom level.
    pub min: u8,
    /// Highest served zoom level.
    pub max: u8,
}

impl ZoomRange {
    /// Construct a range from its inclusive bounds.
    #[must_use]
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Whether `zoom` lies within the range.
    #[must_use]
    pub const fn contains(self, zoom: u8) -> bool {
        self.min <= zoom && zoom <= self.max
    }
}

impl Default for ZoomRange {
    /// The range served by typical vector tile sets.
    fn default() -> Self {
        Self::new(0, 22)
    }
}

/// Integer zoom levels a definition covers for one particular source.
///
/// Recomputed for every covering query and never persisted. An empty range
/// arises when the definition's zoom interval lies wholly outside the zoom
/// levels the source serves; enumerating it yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClampedZoomRange {
    min: u8,
    max: u8,
}

impl ClampedZoomRange {
    /// The range containing no zoom levels.
    pub const EMPTY: Self = Self {
        min: u8::MAX,
        max: u8::MIN,
    };

    /// Lowest zoom level covered.
    #[must_use]
    pub const fn min(self) -> u8 {
        self.min
    }

    /// Highest zoom level covered.
    #[must_use]
    pub const fn max(self) -> u8 {
        self.max
    }

    /// Whether no zoom level is covered.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.min > self.max
    }

    /// Zoom levels in ascending order.
    #[must_use]
    pub const fn levels(self) -> RangeInclusive<u8> {
        self.min..=self.max
    }
}

/// Map a declared zoom level onto the integer tile zoom a source needs.
///
/// Tiles smaller than 512 pixels need a deeper zoom to render the same
/// detail, so the zoom is shifted by `log2(512 / tile_size)` before being
/// rounded (raster-like sources) or floored (everything else). Infinite
/// input saturates to `i32::MAX`.
///
/// # Examples
/// ```
/// use offline_regions_core::{SourceKind, covering_zoom_level};
///
/// assert_eq!(covering_zoom_level(0.6, SourceKind::Vector, 512), 0);
/// assert_eq!(covering_zoom_level(0.6, SourceKind::Raster, 512), 1);
/// assert_eq!(covering_zoom_level(0.0, SourceKind::Vector, 256), 1);
/// assert_eq!(covering_zoom_level(f64::INFINITY, SourceKind::Vector, 512), i32::MAX);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "zoom adjustment is logarithmic and the saturating cast is intended"
)]
pub fn covering_zoom_level(zoom: f64, kind: SourceKind, tile_size: u16) -> i32 {
    let adjusted = zoom + (REFERENCE_TILE_SIZE / f64::from(tile_size)).log2();
    let level = if kind.rounds_zoom() {
        adjusted.round()
    } else {
        adjusted.floor()
    };
    level as i32
}

/// Intersect a definition's declared zoom interval with a source's range.
///
/// Both declared bounds are first mapped through [`covering_zoom_level`].
/// The upper bound is also capped at [`MAX_TILE_ZOOM`].
///
/// # Examples
/// ```
/// use offline_regions_core::{SourceKind, ZoomRange, clamp_zoom_range};
///
/// let clamped = clamp_zoom_range(0.0, f64::INFINITY, SourceKind::Vector, 512, ZoomRange::new(3, 14));
/// assert_eq!((clamped.min(), clamped.max()), (3, 14));
///
/// let disjoint = clamp_zoom_range(2.0, 2.0, SourceKind::Vector, 512, ZoomRange::new(3, 22));
/// assert!(disjoint.is_empty());
/// ```
#[must_use]
pub fn clamp_zoom_range(
    min_zoom: f64,
    max_zoom: f64,
    kind: SourceKind,
    tile_size: u16,
    source_range: ZoomRange,
) -> ClampedZoomRange {
    let low = covering_zoom_level(min_zoom, kind, tile_size).max(i32::from(source_range.min));
    let high = covering_zoom_level(max_zoom, kind, tile_size)
        .min(i32::from(source_range.max))
        .min(i32::from(MAX_TILE_ZOOM));
    if low > high {
        return ClampedZoomRange::EMPTY;
    }
    match (u8::try_from(low), u8::try_from(high)) {
        (Ok(min), Ok(max)) => ClampedZoomRange { min, max },
        _ => ClampedZoomRange::EMPTY,
    }
}
