//! Turn a declared zoom interval and an area into concrete tiles.

use log::{debug, trace, warn};

use crate::{
    ClampedZoomRange, MAX_TILE_ZOOM, SourceKind, TileCoverage, TileId, ZoomRange,
    clamp_zoom_range,
};

/// The style source a region's tiles are enumerated for.
///
/// # Examples
/// ```
/// use offline_regions_core::{SourceKind, TileSource, ZoomRange};
///
/// let source = TileSource::new(SourceKind::Raster, 256, ZoomRange::new(0, 18));
/// assert_eq!(source.tile_size, 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSource {
    /// Kind of source, which decides how fractional zooms resolve.
    pub kind: SourceKind,
    /// Edge length of one tile in pixels.
    pub tile_size: u16,
    /// Zoom levels the source serves.
    pub zoom_range: ZoomRange,
}

impl TileSource {
    /// Describe a source.
    #[must_use]
    pub const fn new(kind: SourceKind, tile_size: u16, zoom_range: ZoomRange) -> Self {
        Self {
            kind,
            tile_size,
            zoom_range,
        }
    }

    /// Integer zoom levels to enumerate for a declared zoom interval.
    #[must_use]
    pub fn clamp(&self, min_zoom: f64, max_zoom: f64) -> ClampedZoomRange {
        if self.zoom_range.max > MAX_TILE_ZOOM {
            warn!(
                "{} source declares zoom {} but tiles are only enumerated up to zoom {MAX_TILE_ZOOM}",
                self.kind, self.zoom_range.max
            );
        }
        let clamped = clamp_zoom_range(
            min_zoom,
            max_zoom,
            self.kind,
            self.tile_size,
            self.zoom_range,
        );
        debug!(
            "zoom {min_zoom}..={max_zoom} resolves to {}..={} for {} source with {}px tiles",
            clamped.min(),
            clamped.max(),
            self.kind,
            self.tile_size
        );
        clamped
    }
}

impl Default for TileSource {
    /// A 512 pixel vector source serving zooms 0 to 22.
    fn default() -> Self {
        Self::new(SourceKind::Vector, 512, ZoomRange::default())
    }
}

/// Every tile `area` touches between the declared zoom bounds.
///
/// Tiles are grouped by zoom ascending; within a zoom they keep the order
/// the area's [`TileCoverage::cover`] produced. An interval that misses the
/// source's zoom range yields no tiles.
///
/// # Examples
/// ```
/// use offline_regions_core::{LatLngBounds, TileId, TileSource, tile_cover};
///
/// let tiles = tile_cover(0.0, 0.0, &LatLngBounds::world(), &TileSource::default());
/// assert_eq!(tiles, vec![TileId::new(0, 0, 0)]);
/// ```
#[must_use]
pub fn tile_cover<A>(min_zoom: f64, max_zoom: f64, area: &A, source: &TileSource) -> Vec<TileId>
where
    A: TileCoverage + ?Sized,
{
    let zooms = source.clamp(min_zoom, max_zoom);
    let mut tiles = Vec::new();
    for zoom in zooms.levels() {
        let level = area.cover(zoom);
        trace!("zoom {zoom} covers {} tiles", level.len());
        tiles.extend(level);
    }
    tiles
}

/// Number of tiles [`tile_cover`] would return for the same arguments.
#[must_use]
pub fn tile_count<A>(min_zoom: f64, max_zoom: f64, area: &A, source: &TileSource) -> u64
where
    A: TileCoverage + ?Sized,
{
    source
        .clamp(min_zoom, max_zoom)
        .levels()
        .map(|zoom| {
            let count = area.count(zoom);
            trace!("zoom {zoom} counts {count} tiles");
            count
        })
        .fold(0_u64, u64::saturating_add)
}
