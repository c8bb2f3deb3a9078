//! Fixed-size grid of objects with a per-color price index
//!
//! The cell array and the color index are built together in `Grid::new` and
//! never change afterwards, so every query is a plain read.

use crate::error::{Axis, GridError, IndexKind, InvalidGridReason};
use crate::index::{ColorIndex, Coord};
use crate::object::Object;
use crate::search::{diamond_ring, max_radius};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Vec<Object>>,
    rows: usize,
    cols: usize,
    index: ColorIndex,
}

impl Grid {
    /// Takes ownership of a rectangular cell array and indexes it by color
    /// and price. Rows are walked top to bottom, cells left to right; when two
    /// cells share a (color, price) pair the later one stays indexed.
    pub fn new(cells: Vec<Vec<Object>>) -> Result<Self, GridError> {
        let (rows, cols) = Self::validate_shape(&cells)?;

        let mut index = ColorIndex::new();
        for (row, line) in cells.iter().enumerate() {
            for (col, object) in line.iter().enumerate() {
                index.insert(object.color(), object.price(), Coord::new(row, col));
            }
        }

        debug!(
            rows,
            cols,
            colors = index.color_count(),
            keys = index.entry_count(),
            "color index built"
        );

        Ok(Self {
            cells,
            rows,
            cols,
            index,
        })
    }

    fn validate_shape(cells: &[Vec<Object>]) -> Result<(usize, usize), GridError> {
        let first = cells
            .first()
            .ok_or(GridError::InvalidGrid(InvalidGridReason::NoRows))?;
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::InvalidGrid(InvalidGridReason::EmptyRow { row: 0 }));
        }

        for (row, line) in cells.iter().enumerate().skip(1) {
            if line.is_empty() {
                return Err(GridError::InvalidGrid(InvalidGridReason::EmptyRow { row }));
            }
            if line.len() != cols {
                return Err(GridError::InvalidGrid(InvalidGridReason::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                }));
            }
        }

        Ok((cells.len(), cols))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Object]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Distinct colors present in the grid, unordered
    pub fn colors(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.colors()
    }

    pub fn contains_color(&self, color: &str) -> bool {
        self.index.contains(color)
    }

    #[inline]
    fn cell(&self, coord: Coord) -> &Object {
        &self.cells[coord.row][coord.col]
    }

    fn checked_coord(&self, (row, col): (isize, isize)) -> Option<Coord> {
        let row = usize::try_from(row).ok().filter(|r| *r < self.rows)?;
        let col = usize::try_from(col).ok().filter(|c| *c < self.cols)?;
        Some(Coord::new(row, col))
    }

    /// Object at a 1-based (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<&Object, GridError> {
        if row == 0 || row > self.rows {
            return Err(GridError::OutOfRange {
                axis: Axis::Row,
                kind: IndexKind::Index,
                value: row,
                min: 1,
                max: self.rows,
            });
        }
        if col == 0 || col > self.cols {
            return Err(GridError::OutOfRange {
                axis: Axis::Column,
                kind: IndexKind::Index,
                value: col,
                min: 1,
                max: self.cols,
            });
        }
        Ok(self.cell(Coord::new(row - 1, col - 1)))
    }

    /// Converts offsets from the bottom-right corner to a cell position.
    /// Offsets run from 0 to dimension - 1; an offset equal to the dimension
    /// would address one past the top/left edge and is rejected.
    fn offset_to_coord(&self, row_offset: usize, col_offset: usize) -> Result<Coord, GridError> {
        if row_offset >= self.rows {
            return Err(GridError::OutOfRange {
                axis: Axis::Row,
                kind: IndexKind::Offset,
                value: row_offset,
                min: 0,
                max: self.rows - 1,
            });
        }
        if col_offset >= self.cols {
            return Err(GridError::OutOfRange {
                axis: Axis::Column,
                kind: IndexKind::Offset,
                value: col_offset,
                min: 0,
                max: self.cols - 1,
            });
        }
        Ok(Coord::new(
            self.rows - row_offset - 1,
            self.cols - col_offset - 1,
        ))
    }

    /// Object at the given distance from the bottom-right corner
    pub fn get_by_offset(&self, row_offset: usize, col_offset: usize) -> Result<&Object, GridError> {
        let coord = self.offset_to_coord(row_offset, col_offset)?;
        Ok(self.cell(coord))
    }

    /// Nearest object of `color` to the offset-addressed cell, by Manhattan
    /// distance. Equidistant matches are resolved by the ring order documented
    /// in [`crate::search`].
    pub fn get_closest_color(
        &self,
        color: &str,
        row_offset: usize,
        col_offset: usize,
    ) -> Result<&Object, GridError> {
        let origin = self.offset_to_coord(row_offset, col_offset)?;
        if !self.index.contains(color) {
            return Err(GridError::ColorNotFound(color.to_owned()));
        }

        let here = self.cell(origin);
        if here.color() == color {
            return Ok(here);
        }

        let max_radius = max_radius(self.rows, self.cols);
        for radius in 1..=max_radius {
            trace!(color, radius, "scanning ring");
            let hit = diamond_ring(origin, radius)
                .filter_map(|pos| self.checked_coord(pos))
                .find(|coord| self.cell(*coord).color() == color);

            if let Some(coord) = hit {
                debug!(
                    color,
                    distance = origin.manhattan(coord),
                    row = coord.row,
                    col = coord.col,
                    "closest color found"
                );
                return Ok(self.cell(coord));
            }
        }

        warn!(color, max_radius, "color indexed but not found in cells");
        Err(GridError::SearchExhausted {
            color: color.to_owned(),
            max_radius,
        })
    }

    pub fn get_by_color_price(&self, color: &str, price: i32) -> Result<&Object, GridError> {
        let coord = self
            .index
            .prices(color)?
            .exact(price)
            .ok_or_else(|| GridError::PriceNotFound {
                color: color.to_owned(),
                price,
            })?;
        Ok(self.cell(coord))
    }

    pub fn get_by_color_lowest_price(&self, color: &str) -> Result<&Object, GridError> {
        let (_, coord) = self
            .index
            .prices(color)?
            .lowest()
            .ok_or_else(|| GridError::ColorNotFound(color.to_owned()))?;
        Ok(self.cell(coord))
    }

    /// Single object chosen from the price bounds of `color`.
    ///
    /// Returns the cheapest object priced at or above `min_price` whenever one
    /// exists, even if it is above `max_price`. Only when nothing reaches
    /// `min_price` does it fall back to the cheapest object priced above
    /// `max_price`, which can only happen when `max_price < min_price`.
    pub fn get_by_color_price_range(
        &self,
        color: &str,
        min_price: i32,
        max_price: i32,
    ) -> Result<&Object, GridError> {
        if min_price < 0 {
            return Err(GridError::InvalidRange { min_price });
        }

        let levels = self.index.prices(color)?;
        let lower = levels.lower_bound(min_price);
        let upper = levels.upper_bound(max_price);

        match lower.or(upper) {
            Some((_, coord)) => Ok(self.cell(coord)),
            None => Err(GridError::NotFoundInRange {
                color: color.to_owned(),
                min_price,
                max_price,
            }),
        }
    }
}

impl TryFrom<Vec<Vec<Object>>> for Grid {
    type Error = GridError;

    fn try_from(cells: Vec<Vec<Object>>) -> Result<Self, Self::Error> {
        Self::new(cells)
    }
}
