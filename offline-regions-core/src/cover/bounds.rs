//! Rectangle covering for tile-pyramid regions.

use geo::Coord;

use super::TileCoverage;
use super::projection::{FULL_TURN, LATITUDE_MAX, TileGrid, cell_index, wrap_longitude};
use crate::{LatLngBounds, TileId};

/// Inclusive tile span of a rectangle at one zoom level.
///
/// Columns are unwrapped and may run past the last column by less than a
/// full turn; rows are clamped.
#[derive(Debug, Clone, Copy)]
struct TileSpan {
    grid: TileGrid,
    west: i64,
    east: i64,
    north: i64,
    south: i64,
}

impl TileSpan {
    /// Spans of a full turn or more cover every column; narrower spans are
    /// shifted by whole turns so their western edge is canonical.
    #[expect(
        clippy::float_arithmetic,
        reason = "longitude spans are measured and shifted in degrees"
    )]
    fn of(bounds: &LatLngBounds, zoom: u8) -> Option<Self> {
        if bounds.is_empty() || bounds.south() > LATITUDE_MAX || bounds.north() < -LATITUDE_MAX {
            return None;
        }
        let grid = TileGrid::new(zoom)?;
        let (west_lng, east_lng) = if bounds.east() - bounds.west() < FULL_TURN {
            let offset = bounds.west() - wrap_longitude(bounds.west());
            (bounds.west() - offset, bounds.east() - offset)
        } else {
            (-180.0, 180.0)
        };
        let top_left = grid.project(Coord {
            x: west_lng,
            y: bounds.north(),
        });
        let bottom_right = grid.project(Coord {
            x: east_lng,
            y: bounds.south(),
        });
        let west = cell_index(top_left.x);
        let east = west.max(cell_index(bottom_right.x.ceil()).saturating_sub(1));
        let north = cell_index(top_left.y);
        let south = north.max(cell_index(bottom_right.y.ceil()).saturating_sub(1));
        let last_row = grid.tiles() - 1;
        Some(Self {
            grid,
            west,
            east,
            north: north.clamp(0, last_row),
            south: south.clamp(0, last_row),
        })
    }

    /// Whether the span reaches all the way around the world.
    const fn wraps_fully(&self) -> bool {
        self.east.saturating_sub(self.west).saturating_add(1) >= self.grid.tiles()
    }

    /// Canonical columns, ascending and free of duplicates.
    fn columns(&self) -> Vec<u32> {
        if self.wraps_fully() {
            return (0..self.grid.tiles())
                .map(|column| self.grid.wrap_column(column))
                .collect();
        }
        let mut columns: Vec<u32> = (self.west..=self.east)
            .map(|column| self.grid.wrap_column(column))
            .collect();
        columns.sort_unstable();
        columns
    }

    fn width(&self) -> u64 {
        let width = self
            .east
            .saturating_sub(self.west)
            .saturating_add(1)
            .min(self.grid.tiles());
        u64::try_from(width).unwrap_or(0)
    }

    fn height(&self) -> u64 {
        u64::try_from(self.south.saturating_sub(self.north).saturating_add(1)).unwrap_or(0)
    }
}

impl TileCoverage for LatLngBounds {
    /// Tiles in column-major order: column ascending, then row ascending.
    fn cover(&self, zoom: u8) -> Vec<TileId> {
        let Some(span) = TileSpan::of(self, zoom) else {
            return Vec::new();
        };
        span.columns()
            .into_iter()
            .flat_map(|column| {
                (span.north..=span.south).map(move |row| span.grid.tile(i64::from(column), row))
            })
            .collect()
    }

    fn count(&self, zoom: u8) -> u64 {
        TileSpan::of(self, zoom).map_or(0, |span| span.width().saturating_mul(span.height()))
    }
}
