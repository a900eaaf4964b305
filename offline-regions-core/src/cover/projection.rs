//! Spherical Mercator projection onto the tile grid.

use geo::Coord;

use crate::{MAX_TILE_ZOOM, TileId};

/// Latitude beyond which Web Mercator is undefined, in degrees.
pub const LATITUDE_MAX: f64 = 85.051_128_779_806_604;

/// One full turn of longitude, in degrees.
pub(crate) const FULL_TURN: f64 = 360.0;

/// The square tile grid at one zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TileGrid {
    zoom: u8,
    tiles: i64,
}

impl TileGrid {
    /// The grid at `zoom`, or `None` when its indices would not fit a
    /// [`TileId`].
    pub(crate) const fn new(zoom: u8) -> Option<Self> {
        if zoom > MAX_TILE_ZOOM {
            return None;
        }
        Some(Self {
            zoom,
            tiles: 1_i64 << zoom,
        })
    }

    pub(crate) const fn zoom(self) -> u8 {
        self.zoom
    }

    /// Tiles along each axis.
    pub(crate) const fn tiles(self) -> i64 {
        self.tiles
    }

    /// Tiles along each axis, as a grid distance.
    pub(crate) fn extent(self) -> f64 {
        2_f64.powi(i32::from(self.zoom))
    }

    /// Fractional tile coordinates of a longitude/latitude position.
    ///
    /// Latitudes are clamped to [`LATITUDE_MAX`]. Longitudes are not
    /// wrapped, so positions east of the antimeridian land beyond the last
    /// column.
    #[expect(
        clippy::float_arithmetic,
        reason = "Mercator projection is inherently floating point"
    )]
    pub(crate) fn project(self, coord: Coord) -> Coord {
        let world = self.extent();
        let lat = coord.y.clamp(-LATITUDE_MAX, LATITUDE_MAX);
        let merc_y =
            (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln().to_degrees();
        Coord {
            x: (180.0 + coord.x) / 360.0 * world,
            y: (180.0 - merc_y) / 360.0 * world,
        }
    }

    /// Wrap a column into `0..tiles`.
    pub(crate) fn wrap_column(self, column: i64) -> u32 {
        u32::try_from(column.rem_euclid(self.tiles)).unwrap_or(u32::MAX)
    }

    /// Clamp a row into `0..tiles`.
    pub(crate) fn clamp_row(self, row: i64) -> u32 {
        u32::try_from(row.clamp(0, self.tiles - 1)).unwrap_or(u32::MAX)
    }

    /// The canonical tile for a possibly out-of-range column and row.
    pub(crate) fn tile(self, column: i64, row: i64) -> TileId {
        TileId::new(self.zoom, self.wrap_column(column), self.clamp_row(row))
    }
}

/// Shift a longitude by whole turns into `[-180, 180]`.
///
/// Longitudes already in range come back unchanged. Non-finite input
/// yields NaN.
#[expect(
    clippy::float_arithmetic,
    reason = "wrapping shifts by whole turns of longitude"
)]
pub(crate) fn wrap_longitude(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        lng
    } else {
        (lng + 180.0).rem_euclid(FULL_TURN) - 180.0
    }
}

/// Integer cell containing a fractional grid position.
///
/// The cast saturates: positions beyond the `i64` range clamp to its ends
/// and NaN maps to zero. Callers wrap longitudes first, so covered
/// positions stay within a couple of grid widths.
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating float to integer cast; callers subtract with saturating arithmetic"
)]
pub(crate) const fn cell_index(value: f64) -> i64 {
    value.floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[rstest]
    #[case(-180.0, -180.0)]
    #[case(180.0, 180.0)]
    #[case(190.0, -170.0)]
    #[case(-540.0, -180.0)]
    #[case(725.0, 5.0)]
    fn wrap_longitude_shifts_by_whole_turns(#[case] lng: f64, #[case] expected: f64) {
        assert!(close(wrap_longitude(lng), expected));
    }

    #[rstest]
    #[case(f64::MAX)]
    #[case(f64::MIN)]
    #[case(f64::MAX.next_down())]
    fn wrap_longitude_keeps_extreme_values_in_range(#[case] lng: f64) {
        let wrapped = wrap_longitude(lng);
        assert!((-180.0..=180.0).contains(&wrapped), "{lng} wrapped to {wrapped}");
    }

    #[rstest]
    #[case(0, Coord { x: -180.0, y: 0.0 }, Coord { x: 0.0, y: 0.5 })]
    #[case(1, Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 })]
    #[case(2, Coord { x: 180.0, y: 90.0 }, Coord { x: 4.0, y: 0.0 })]
    #[case(2, Coord { x: 0.0, y: -90.0 }, Coord { x: 2.0, y: 4.0 })]
    fn projects_reference_positions(#[case] zoom: u8, #[case] coord: Coord, #[case] expected: Coord) {
        let grid = TileGrid::new(zoom).expect("zoom within grid limits");
        let projected = grid.project(coord);
        assert!(close(projected.x, expected.x), "x was {}", projected.x);
        assert!(close(projected.y, expected.y), "y was {}", projected.y);
    }

    #[rstest]
    #[case(-1, 3)]
    #[case(4, 0)]
    #[case(9, 1)]
    #[case(2, 2)]
    fn wraps_columns(#[case] column: i64, #[case] expected: u32) {
        let grid = TileGrid::new(2).expect("zoom within grid limits");
        assert_eq!(grid.wrap_column(column), expected);
    }

    #[test]
    fn clamps_rows_into_grid() {
        let grid = TileGrid::new(2).expect("zoom within grid limits");
        assert_eq!(grid.clamp_row(-3), 0);
        assert_eq!(grid.clamp_row(4), 3);
        assert_eq!(grid.tile(5, 4), TileId::new(2, 1, 3));
    }

    #[test]
    fn refuses_zoom_beyond_tile_index_range() {
        assert!(TileGrid::new(MAX_TILE_ZOOM).is_some());
        assert!(TileGrid::new(MAX_TILE_ZOOM + 1).is_none());
    }

    #[test]
    fn cell_index_floors_negative_positions() {
        assert_eq!(cell_index(-0.25), -1);
        assert_eq!(cell_index(3.999), 3);
    }

    #[rstest]
    fn cell_index_saturates_out_of_range_positions() {
        assert_eq!(cell_index(f64::MAX), i64::MAX);
        assert_eq!(cell_index(f64::MIN), i64::MIN);
        assert_eq!(cell_index(f64::NAN), 0);
    }
}
