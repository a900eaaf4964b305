//! Tile covering for region areas.
//!
//! Each area kind knows how to list, and count, the tiles it touches at a
//! single integer zoom level. The enumerator in [`crate::enumerate`] runs
//! these per-zoom services across a clamped zoom range.

mod bounds;
mod geometry;
mod projection;

pub use projection::LATITUDE_MAX;

use crate::TileId;

/// An area that can be rasterised onto the tile grid.
///
/// Implementations must be deterministic: the same area and zoom always
/// produce the same tiles in the same order.
pub trait TileCoverage {
    /// Tiles touched by the area at `zoom`, each listed once.
    fn cover(&self, zoom: u8) -> Vec<TileId>;

    /// Number of tiles [`TileCoverage::cover`] yields at `zoom`.
    ///
    /// The default materialises the cover; implementations with a closed
    /// form should override it.
    fn count(&self, zoom: u8) -> u64 {
        u64::try_from(self.cover(zoom).len()).unwrap_or(u64::MAX)
    }
}
