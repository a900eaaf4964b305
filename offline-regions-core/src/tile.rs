//! Canonical tile indices produced by the covering services.

use std::fmt;

/// A tile address in the canonical Web Mercator grid.
///
/// Columns are always wrapped into `0..2^z`, so a tile reached by walking
/// across the antimeridian has the same identity as one reached directly.
///
/// # Examples
/// ```
/// use offline_regions_core::TileId;
///
/// let tile = TileId::new(12, 654, 1583);
/// assert_eq!(tile.to_string(), "12/654/1583");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId {
    /// Zoom level.
    pub z: u8,
    /// Column, counted eastwards from the antimeridian.
    pub x: u32,
    /// Row, counted southwards from the northern Mercator limit.
    pub y: u32,
}

impl TileId {
    /// Construct a tile index from its zoom, column and row.
    #[must_use]
    pub const fn new(z: u8, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

impl From<(u8, u32, u32)> for TileId {
    fn from((z, x, y): (u8, u32, u32)) -> Self {
        Self::new(z, x, y)
    }
}
