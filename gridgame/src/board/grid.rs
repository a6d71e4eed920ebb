//! Defines the grid itself: a rows x cols arena of optional markers with a
//! capacity-tracking fill counter.

use std::{borrow::Borrow, fmt, ops::Index};

use crate::board::{CannotPlaceReason, Dimensions, Location, OutOfBounds, PlaceError};

/// Outcome of successfully placing a marker in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlaceOutcome {
    /// The marker was placed and the grid has vacant cells left.
    Added,
    /// The marker was placed and the grid is now at capacity.
    Full,
}

/// A grid of cells holding optional markers, the base for any game played on
/// a rectangular board.
///
/// Cells are stored in a flat buffer in row-major order and are vacant until
/// written. Every write goes through [`place`][Grid::place], which is what
/// keeps the fill counter accurate: `0 <= filled <= capacity` always holds.
/// Grids are never resized in place; a board of a different size is a new
/// grid.
#[derive(Debug)]
pub struct Grid<M> {
    /// Dimensions of this grid.
    dim: Dimensions,
    /// Cells that make up this grid, linearized by `dim`.
    cells: Box<[Option<M>]>,
    /// Number of occupied cells.
    filled: usize,
}

impl<M> Grid<M> {
    /// Construct an empty grid with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| None).collect();
        Self {
            dim,
            cells,
            filled: 0,
        }
    }

    /// Get the [`Dimensions`] of this [`Grid`].
    pub fn dimensions(&self) -> Dimensions {
        self.dim
    }

    /// Get the number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.dim.rows()
    }

    /// Get the number of columns in the grid.
    pub fn cols(&self) -> usize {
        self.dim.cols()
    }

    /// Get the total number of cells in the grid.
    pub fn capacity(&self) -> usize {
        self.dim.total_size()
    }

    /// Get the number of occupied cells.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Returns true if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.filled >= self.capacity()
    }

    /// Get the marker at the given [`Location`], if any.
    ///
    /// Returns an [`OutOfBounds`] error if the location is not within the
    /// grid; `Ok(None)` means the cell is in bounds but vacant.
    pub fn get(&self, loc: Location) -> Result<Option<&M>, OutOfBounds> {
        match self.dim.try_linearize(loc) {
            Some(idx) => Ok(self.cells[idx].as_ref()),
            None => Err(OutOfBounds::new(loc, self.dim)),
        }
    }

    /// Place a marker in the cell at the given [`Location`].
    ///
    /// Fails with reason [`OutOfBounds`][CannotPlaceReason::OutOfBounds] if
    /// the location is not within the grid and
    /// [`AlreadyOccupied`][CannotPlaceReason::AlreadyOccupied] if the cell
    /// holds a marker; in both cases nothing changes and the error returns
    /// the rejected marker. On success the fill counter increments and the
    /// outcome is [`Full`][PlaceOutcome::Full] exactly when the write brings
    /// the grid to capacity.
    pub fn place(&mut self, marker: M, loc: Location) -> Result<PlaceOutcome, PlaceError<M>> {
        let idx = match self.dim.try_linearize(loc) {
            Some(idx) => idx,
            None => return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, marker, loc)),
        };
        let cell = &mut self.cells[idx];
        if cell.is_some() {
            return Err(PlaceError::new(
                CannotPlaceReason::AlreadyOccupied,
                marker,
                loc,
            ));
        }
        *cell = Some(marker);
        self.filled += 1;
        Ok(if self.filled >= self.dim.total_size() {
            PlaceOutcome::Full
        } else {
            PlaceOutcome::Added
        })
    }

    /// Get an iterator over the rows of the grid. Each row is an iterator
    /// over the cells of that row, in row-major order.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Option<&'a M>>> {
        let dim = self.dim;
        self.dim
            .iter_locations()
            .map(move |row| row.map(move |loc| self.cells[dim.linearize(loc)].as_ref()))
    }

    /// Get an iterator over the locations of all vacant cells, in row-major
    /// order.
    pub fn iter_vacant<'a>(&'a self) -> impl 'a + Iterator<Item = Location> {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| match cell {
                None => Some(dim.un_linearize(idx)),
                Some(_) => None,
            })
    }
}

impl<M, B: Borrow<Location>> Index<B> for Grid<M> {
    type Output = Option<M>;

    /// Read access for locations already known to be valid. Panics if the
    /// location is out of bounds; use [`get`][Grid::get] for checked reads.
    fn index(&self, loc: B) -> &Self::Output {
        &self.cells[self.dim.linearize(*loc.borrow())]
    }
}

impl<M: fmt::Display> fmt::Display for Grid<M> {
    /// Render the grid row-major: cells space-separated within a row, each
    /// row terminated by a newline, vacant cells as `-`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.iter_rows() {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                match cell {
                    Some(marker) => write!(f, "{}", marker)?,
                    None => f.write_str("-")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_vacant() {
        let grid: Grid<i32> = Grid::new(Dimensions::new(2, 3));
        assert_eq!(grid.filled(), 0);
        assert_eq!(grid.capacity(), 6);
        for row in grid.iter_rows() {
            for cell in row {
                assert_eq!(cell, None);
            }
        }
    }

    #[test]
    fn place_then_get() {
        let mut grid = Grid::new(Dimensions::new(2, 2));
        assert_eq!(
            grid.place(5, Location::new(1, 0)).unwrap(),
            PlaceOutcome::Added
        );
        assert_eq!(grid.get(Location::new(1, 0)), Ok(Some(&5)));
        assert_eq!(grid.filled(), 1);
    }

    #[test]
    fn index_reads_prevalidated_cells() {
        let mut grid = Grid::new(Dimensions::new(2, 2));
        grid.place(9, Location::new(0, 1)).unwrap();
        assert_eq!(grid[Location::new(0, 1)], Some(9));
        assert_eq!(grid[&Location::new(1, 1)], None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_out_of_bounds() {
        let grid: Grid<i32> = Grid::new(Dimensions::new(2, 2));
        let _ = grid[Location::new(2, 0)];
    }

    #[test]
    fn display_renders_rows() {
        let mut grid = Grid::new(Dimensions::new(2, 3));
        grid.place(1, Location::new(0, 0)).unwrap();
        grid.place(2, Location::new(1, 2)).unwrap();
        assert_eq!(grid.to_string(), "1 - -\n- - 2\n");
    }

    #[test]
    fn iter_vacant_skips_occupied() {
        let mut grid = Grid::new(Dimensions::new(2, 2));
        grid.place('x', Location::new(0, 0)).unwrap();
        grid.place('o', Location::new(1, 1)).unwrap();
        let vacant: Vec<Location> = grid.iter_vacant().collect();
        assert_eq!(vacant, vec![Location::new(0, 1), Location::new(1, 0)]);
    }
}
