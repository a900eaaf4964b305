//! Geometry covering for geometry regions.
//!
//! Points land in the tile containing them. Lines are traced through every
//! tile they cross with an incremental grid walk. Polygons trace each ring
//! and then fill, row by row, every tile whose centre lies inside under the
//! even-odd rule, which leaves holes open.

use std::collections::BTreeSet;
use std::iter;

use geo::{Coord, LineString, Polygon};

use super::TileCoverage;
use super::projection::{FULL_TURN, TileGrid, cell_index, wrap_longitude};
use crate::{RegionGeometry, TileId};

impl TileCoverage for RegionGeometry {
    /// Tiles in row-major order: row ascending, then column ascending.
    fn cover(&self, zoom: u8) -> Vec<TileId> {
        let Some(grid) = TileGrid::new(zoom) else {
            return Vec::new();
        };
        let mut cells = CellSet::new(grid);
        match self {
            Self::Point(point) => cells.position(point.0),
            Self::MultiPoint(points) => {
                for point in points {
                    cells.position(point.0);
                }
            }
            Self::LineString(line) => cells.line(line),
            Self::MultiLineString(lines) => {
                for line in lines {
                    cells.line(line);
                }
            }
            Self::Polygon(polygon) => cells.polygon(polygon),
            Self::MultiPolygon(polygons) => {
                for polygon in polygons {
                    cells.polygon(polygon);
                }
            }
        }
        cells.into_tiles()
    }
}

/// Distinct tiles touched so far, keyed by row then column.
struct CellSet {
    grid: TileGrid,
    cells: BTreeSet<(u32, u32)>,
}

/// Progress of a grid walk along one axis.
struct AxisWalk {
    step: i64,
    next_boundary: f64,
    boundary_spacing: f64,
}

impl AxisWalk {
    #[expect(
        clippy::float_arithmetic,
        reason = "boundary distances are fractions of the segment length"
    )]
    fn new(from: f64, to: f64) -> Self {
        let distance = to - from;
        let (step, boundary) = if distance > 0.0 {
            (1, from.floor() + 1.0)
        } else if distance < 0.0 {
            (-1, from.floor())
        } else {
            return Self {
                step: 0,
                next_boundary: f64::INFINITY,
                boundary_spacing: f64::INFINITY,
            };
        };
        Self {
            step,
            next_boundary: (boundary - from) / distance,
            boundary_spacing: (1.0 / distance).abs(),
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the next crossing lies one boundary spacing further on"
    )]
    fn advance(&mut self) {
        self.next_boundary += self.boundary_spacing;
    }
}

impl CellSet {
    const fn new(grid: TileGrid) -> Self {
        Self {
            grid,
            cells: BTreeSet::new(),
        }
    }

    fn insert(&mut self, column: i64, row: i64) {
        let tile = self.grid.tile(column, row);
        self.cells.insert((tile.y, tile.x));
    }

    /// Record columns `first..end` of `row`, or the whole row once that
    /// range spans the grid.
    fn fill_columns(&mut self, row: u32, first: i64, end: i64) {
        let tiles = self.grid.tiles();
        let columns = if end.saturating_sub(first) >= tiles {
            0..tiles
        } else {
            first..end
        };
        for column in columns {
            self.insert(column, i64::from(row));
        }
    }

    /// Record the tile containing a longitude/latitude position.
    fn position(&mut self, coord: Coord) {
        let projected = self.grid.project(Coord {
            x: wrap_longitude(coord.x),
            y: coord.y,
        });
        self.insert(cell_index(projected.x), cell_index(projected.y));
    }

    fn line(&mut self, line: &LineString) {
        if let [only] = line.0.as_slice() {
            self.position(*only);
        }
        self.path(&line.0);
    }

    fn path(&mut self, coords: &[Coord]) {
        for edge in coords.windows(2) {
            if let [start, end] = edge {
                self.edge(*start, *end);
            }
        }
    }

    /// Record every tile an edge between two positions passes through.
    ///
    /// The edge is first shifted by whole turns so that it starts inside
    /// the canonical longitude range. Edges reaching a full turn or more
    /// are covered row by row rather than walked.
    #[expect(
        clippy::float_arithmetic,
        reason = "edges are shifted by whole turns of longitude"
    )]
    fn edge(&mut self, start: Coord, end: Coord) {
        let offset = start.x - wrap_longitude(start.x);
        let from = self.grid.project(Coord {
            x: start.x - offset,
            y: start.y,
        });
        let to = self.grid.project(Coord {
            x: end.x - offset,
            y: end.y,
        });
        if (end.x - start.x).abs() < FULL_TURN {
            self.segment(from, to);
        } else {
            self.winding_segment(from, to);
        }
    }

    /// Record the tiles of an edge that winds at least once around the
    /// world.
    ///
    /// Each row the edge crosses gets the columns between where the edge
    /// enters and leaves that row, or the whole row once they span the grid.
    #[expect(
        clippy::float_arithmetic,
        reason = "row extents interpolate along the edge"
    )]
    fn winding_segment(&mut self, from: Coord, to: Coord) {
        let top = from.y.min(to.y);
        let bottom = from.y.max(to.y);
        let x_at = |y: f64| from.x + (to.x - from.x) * (y - from.y) / (to.y - from.y);
        let first_row = self.grid.clamp_row(cell_index(top));
        let last_row = self.grid.clamp_row(cell_index(bottom));
        for row in first_row..=last_row {
            let upper = x_at(f64::from(row).max(top));
            let lower = x_at((f64::from(row) + 1.0).min(bottom));
            let (left, right) = (upper.min(lower), upper.max(lower));
            if right - left < self.grid.extent() {
                self.fill_columns(row, cell_index(left), cell_index(right).saturating_add(1));
            } else {
                self.fill_columns(row, 0, self.grid.tiles());
            }
        }
    }

    /// Record every tile the segment passes through, endpoints included.
    fn segment(&mut self, start: Coord, end: Coord) {
        let mut column = cell_index(start.x);
        let mut row = cell_index(start.y);
        let end_column = cell_index(end.x);
        let end_row = cell_index(end.y);
        let mut across = AxisWalk::new(start.x, end.x);
        let mut down = AxisWalk::new(start.y, end.y);
        let steps = column
            .abs_diff(end_column)
            .saturating_add(row.abs_diff(end_row));

        self.insert(column, row);
        for _ in 0..steps {
            if column == end_column {
                row += down.step;
            } else if row == end_row {
                column += across.step;
            } else if across.next_boundary < down.next_boundary {
                across.advance();
                column += across.step;
            } else {
                down.advance();
                row += down.step;
            }
            self.insert(column, row);
        }
    }

    /// Trace the rings, then fill their interior in a frame shifted by
    /// whole turns so the exterior starts in the canonical range.
    #[expect(
        clippy::float_arithmetic,
        reason = "rings are shifted by whole turns of longitude"
    )]
    fn polygon(&mut self, polygon: &Polygon) {
        for ring in iter::once(polygon.exterior()).chain(polygon.interiors()) {
            self.path(&ring.0);
        }
        let offset = polygon
            .exterior()
            .0
            .first()
            .map_or(0.0, |first| first.x - wrap_longitude(first.x));
        let rings: Vec<Vec<Coord>> = iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .map(|ring| {
                ring.coords()
                    .map(|coord| {
                        self.grid.project(Coord {
                            x: coord.x - offset,
                            y: coord.y,
                        })
                    })
                    .collect()
            })
            .collect();
        let Some(exterior) = rings.first() else {
            return;
        };
        let top = exterior.iter().map(|coord| coord.y).fold(f64::INFINITY, f64::min);
        let bottom = exterior
            .iter()
            .map(|coord| coord.y)
            .fold(f64::NEG_INFINITY, f64::max);
        if !(top.is_finite() && bottom.is_finite()) {
            return;
        }
        let first_row = self.grid.clamp_row(cell_index(top));
        let last_row = self.grid.clamp_row(cell_index(bottom));
        for row in first_row..=last_row {
            self.fill_row(&rings, row);
        }
    }

    /// Fill the tiles of `row` whose centres fall inside the rings.
    #[expect(
        clippy::float_arithmetic,
        reason = "scanline crossings interpolate along ring edges"
    )]
    fn fill_row(&mut self, rings: &[Vec<Coord>], row: u32) {
        let centre = f64::from(row) + 0.5;
        let mut crossings: Vec<f64> = rings
            .iter()
            .flat_map(|ring| ring.windows(2))
            .filter_map(|edge| match edge {
                [a, b] if (a.y > centre) != (b.y > centre) => {
                    Some(a.x + (centre - a.y) * (b.x - a.x) / (b.y - a.y))
                }
                _ => None,
            })
            .collect();
        crossings.sort_by(f64::total_cmp);
        for span in crossings.chunks_exact(2) {
            if let [entry, exit] = span {
                let first = cell_index((entry - 0.5).ceil());
                let last = cell_index((exit - 0.5).ceil());
                self.fill_columns(row, first, last);
            }
        }
    }

    fn into_tiles(self) -> Vec<TileId> {
        let zoom = self.grid.zoom();
        self.cells
            .into_iter()
            .map(|(row, column)| TileId::new(zoom, column, row))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, point, polygon};
    use rstest::rstest;

    #[rstest]
    #[case(point!(x: 0.0, y: 90.0), 2, TileId::new(2, 2, 0))]
    #[case(point!(x: 180.0, y: 0.0), 1, TileId::new(1, 0, 1))]
    #[case(point!(x: -122.5744, y: 37.6609), 2, TileId::new(2, 0, 1))]
    fn point_covers_its_containing_tile(
        #[case] point: geo::Point,
        #[case] zoom: u8,
        #[case] expected: TileId,
    ) {
        assert_eq!(RegionGeometry::from(point).cover(zoom), vec![expected]);
    }

    #[rstest]
    fn single_coordinate_line_covers_its_point() {
        let line = RegionGeometry::from(line_string![(x: -122.5744, y: 37.6609)]);
        assert_eq!(line.cover(2), vec![TileId::new(2, 0, 1)]);
    }

    #[rstest]
    fn line_across_antimeridian_wraps() {
        let line = RegionGeometry::from(line_string![(x: 170.0, y: 10.0), (x: 190.0, y: 10.0)]);
        assert_eq!(line.cover(3), vec![TileId::new(3, 0, 3), TileId::new(3, 7, 3)]);
    }

    #[rstest]
    #[case(f64::MIN, 0.0, 0.0, 3, 4)]
    #[case(-1000.0, 1000.0, 10.0, 3, 3)]
    #[case(0.0, f64::MAX, 0.0, 4, 8)]
    #[case(f64::MAX, -f64::MAX, 0.0, 2, 2)]
    fn line_winding_past_a_full_turn_covers_its_whole_row(
        #[case] from: f64,
        #[case] to: f64,
        #[case] lat: f64,
        #[case] zoom: u8,
        #[case] row: u32,
    ) {
        let line = RegionGeometry::from(line_string![(x: from, y: lat), (x: to, y: lat)]);
        let expected: Vec<TileId> = (0..1_u32 << zoom).map(|x| TileId::new(zoom, x, row)).collect();
        assert_eq!(line.cover(zoom), expected);
        assert_eq!(line.count(zoom), u64::try_from(expected.len()).expect("small"));
    }

    #[rstest]
    fn steep_line_winding_many_turns_fills_each_row_it_crosses() {
        let line = RegionGeometry::from(line_string![(x: 0.0, y: -60.0), (x: 1440.0, y: 60.0)]);
        let expected: Vec<TileId> = (1..=2_u32)
            .flat_map(|y| (0..4_u32).map(move |x| TileId::new(2, x, y)))
            .collect();
        assert_eq!(line.cover(2), expected);
    }

    #[rstest]
    fn line_shifted_by_whole_turns_matches_its_canonical_twin() {
        let canonical =
            RegionGeometry::from(line_string![(x: -170.0, y: -60.0), (x: 170.0, y: 60.0)]);
        let shifted =
            RegionGeometry::from(line_string![(x: 550.0, y: -60.0), (x: 890.0, y: 60.0)]);
        assert_eq!(shifted.cover(2), canonical.cover(2));
    }

    #[rstest]
    fn polygon_with_extreme_longitude_stays_bounded() {
        let sliver = RegionGeometry::from(polygon![
            (x: 0.0, y: -40.0),
            (x: f64::MAX, y: -40.0),
            (x: f64::MAX, y: 40.0),
            (x: 0.0, y: 40.0),
        ]);
        let cover = sliver.cover(3);
        assert_eq!(
            cover,
            (3..=4_u32)
                .flat_map(|y| (0..8_u32).map(move |x| TileId::new(3, x, y)))
                .collect::<Vec<_>>()
        );
    }

    #[rstest]
    fn diagonal_line_walks_through_shared_corners() {
        let line = RegionGeometry::from(line_string![(x: -170.0, y: -60.0), (x: 170.0, y: 60.0)]);
        assert_eq!(
            line.cover(2),
            vec![
                TileId::new(2, 2, 1),
                TileId::new(2, 3, 1),
                TileId::new(2, 0, 2),
                TileId::new(2, 1, 2),
                TileId::new(2, 2, 2),
            ]
        );
    }

    #[rstest]
    fn polygon_fills_its_interior() {
        let square = RegionGeometry::from(polygon![
            (x: -60.0, y: -40.0),
            (x: 60.0, y: -40.0),
            (x: 60.0, y: 40.0),
            (x: -60.0, y: 40.0),
        ]);
        assert_eq!(
            square.cover(2),
            vec![
                TileId::new(2, 1, 1),
                TileId::new(2, 2, 1),
                TileId::new(2, 1, 2),
                TileId::new(2, 2, 2),
            ]
        );
    }

    #[rstest]
    fn holes_leave_interior_tiles_uncovered() {
        let outer = line_string![
            (x: -60.0, y: -40.0),
            (x: 60.0, y: -40.0),
            (x: 60.0, y: 40.0),
            (x: -60.0, y: 40.0),
        ];
        let hole = line_string![
            (x: -10.0, y: -10.0),
            (x: 10.0, y: -10.0),
            (x: 10.0, y: 10.0),
            (x: -10.0, y: 10.0),
        ];
        let solid = RegionGeometry::from(Polygon::new(outer.clone(), Vec::new())).cover(6);
        let holed = RegionGeometry::from(Polygon::new(outer, vec![hole])).cover(6);
        assert_eq!(solid.len(), 352);
        assert_eq!(holed.len(), 348);
        let missing: Vec<TileId> = solid.into_iter().filter(|tile| !holed.contains(tile)).collect();
        assert_eq!(
            missing,
            vec![
                TileId::new(6, 31, 31),
                TileId::new(6, 32, 31),
                TileId::new(6, 31, 32),
                TileId::new(6, 32, 32),
            ]
        );
    }

    #[rstest]
    fn empty_line_covers_nothing() {
        let line = RegionGeometry::from(LineString::new(Vec::new()));
        assert!(line.cover(4).is_empty());
        assert_eq!(line.count(4), 0);
    }
}
