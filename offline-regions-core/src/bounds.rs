//! Geographic rectangles used by tile-pyramid regions.

use geo::Coord;

/// An axis-aligned latitude/longitude rectangle in degrees.
///
/// Longitudes may lie outside `[-180, 180]` to describe rectangles that
/// cross the antimeridian. Build values with [`LatLngBounds::hull`] so the
/// corners are always normalised.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use offline_regions_core::LatLngBounds;
///
/// let bounds = LatLngBounds::hull(
///     Coord { x: -122.3204, y: 37.8271 },
///     Coord { x: -122.5744, y: 37.6609 },
/// );
/// assert_eq!(bounds.south(), 37.6609);
/// assert_eq!(bounds.west(), -122.5744);
/// assert!(!bounds.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl LatLngBounds {
    /// The smallest rectangle containing both corners.
    ///
    /// Corners use `x` for longitude and `y` for latitude.
    #[must_use]
    pub const fn hull(a: Coord, b: Coord) -> Self {
        Self {
            south: a.y.min(b.y),
            west: a.x.min(b.x),
            north: a.y.max(b.y),
            east: a.x.max(b.x),
        }
    }

    /// A rectangle containing nothing.
    ///
    /// Every side lies beyond the opposite one, so it stays empty until a
    /// point is added.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            south: 90.0,
            west: 180.0,
            north: -90.0,
            east: -180.0,
        }
    }

    /// The rectangle spanning every latitude and longitude.
    #[must_use]
    pub const fn world() -> Self {
        Self {
            south: -90.0,
            west: -180.0,
            north: 90.0,
            east: 180.0,
        }
    }

    /// Whether the rectangle encloses no area at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.south > self.north || self.west > self.east
    }

    /// Southern latitude.
    #[must_use]
    pub const fn south(&self) -> f64 {
        self.south
    }

    /// Western longitude.
    #[must_use]
    pub const fn west(&self) -> f64 {
        self.west
    }

    /// Northern latitude.
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// Eastern longitude.
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.east
    }

    /// South-west corner.
    #[must_use]
    pub const fn southwest(&self) -> Coord {
        Coord {
            x: self.west,
            y: self.south,
        }
    }

    /// North-east corner.
    #[must_use]
    pub const fn northeast(&self) -> Coord {
        Coord {
            x: self.east,
            y: self.north,
        }
    }

    /// The sides in document order: south, west, north, east.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.south, self.west, self.north, self.east]
    }
}
