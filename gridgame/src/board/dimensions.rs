//! Rectangular extent of a grid and the rules for addressing its cells.

use crate::board::Location;

/// Dimensions of a grid: a fixed number of rows and columns.
///
/// Implements the methods the grid needs to check bounds and convert a
/// [`Location`] to an index in the flat cell buffer (`row * cols + col`).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of rows in the grid. This corresponds to the `row` of a [`Location`].
    rows: usize,
    /// Number of columns in the grid. This corresponds to the `col` of a [`Location`].
    cols: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified rows and columns.
    /// Panics if `rows * cols` exceeds `usize::max_value()` or if `rows` or
    /// `cols` is 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Some(dim) => dim,
            None => {
                if rows == 0 || cols == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", rows, cols);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        rows,
                        cols,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified rows and columns.
    /// Returns `None` if `rows * cols` exceeds `usize::max_value()` or if
    /// `rows` or `cols` is 0.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            None
        } else {
            rows.checked_mul(cols).map(|_| Self { rows, cols })
        }
    }

    /// Create square [`Dimensions`] of the given size. Panics if `size` is 0
    /// or `size * size` overflows.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Get the number of rows of these [`Dimensions`].
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns of these [`Dimensions`].
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Compute the total number of cells. Used to allocate storage for the
    /// grid; equals the grid's capacity.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Convert a location to a linear index within these dimensions.
    /// Panics if the location is out of range for the dimensions.
    pub fn linearize(&self, loc: Location) -> usize {
        match self.try_linearize(loc) {
            Some(v) => v,
            None => panic!("{:?} is out of bounds for {:?}", loc, self),
        }
    }

    /// Convert a location to a linear index within these dimensions.
    /// Returns `None` if the location is out of bounds for the dimensions.
    pub fn try_linearize(&self, loc: Location) -> Option<usize> {
        self.check_bounds(loc).map(|loc| loc.row * self.cols + loc.col)
    }

    /// Get back a location from a linearized index. The result is
    /// meaningless if `idx >= total_size`.
    pub fn un_linearize(&self, idx: usize) -> Location {
        Location {
            row: idx / self.cols,
            col: idx % self.cols,
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over
    /// the locations of that row, in row-major order.
    pub fn iter_locations(&self) -> impl Iterator<Item = impl Iterator<Item = Location>> {
        let cols = self.cols;
        (0..self.rows).map(move |row| (0..cols).map(move |col| Location { row, col }))
    }

    /// Check if the given [`Location`] is in bounds for these [`Dimensions`].
    /// If so, return it, otherwise return `None`.
    #[inline]
    fn check_bounds(&self, loc: Location) -> Option<Location> {
        if loc.row < self.rows && loc.col < self.cols {
            Some(loc)
        } else {
            None
        }
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, the classic 3x3 board.
    fn default() -> Self {
        Self { rows: 3, cols: 3 }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, 0, Some(0); "origin is first cell")]
    #[test_case(0, 3, Some(3); "end of first row")]
    #[test_case(1, 0, Some(4); "start of second row")]
    #[test_case(2, 3, Some(11); "last cell")]
    #[test_case(3, 0, None; "row out of bounds")]
    #[test_case(0, 4, None; "col out of bounds")]
    #[test_case(3, 4, None; "both out of bounds")]
    fn linearize_3x4(row: usize, col: usize, expected: Option<usize>) {
        let dim = Dimensions::new(3, 4);
        assert_eq!(dim.try_linearize(Location::new(row, col)), expected);
    }

    #[test]
    fn un_linearize_inverts_linearize() {
        let dim = Dimensions::new(3, 4);
        for idx in 0..dim.total_size() {
            let loc = dim.un_linearize(idx);
            assert_eq!(dim.try_linearize(loc), Some(idx));
        }
    }

    #[test_case(0, 1; "zero rows")]
    #[test_case(1, 0; "zero cols")]
    #[test_case(0, 0; "zero both")]
    #[test_case(usize::max_value(), 2; "overflowing product")]
    fn try_new_rejects(rows: usize, cols: usize) {
        assert_eq!(Dimensions::try_new(rows, cols), None);
    }

    #[test]
    #[should_panic(expected = "Dimensions must be nonzero")]
    fn new_panics_on_zero() {
        Dimensions::new(0, 3);
    }

    #[test]
    fn iteration_is_row_major() {
        let dim = Dimensions::new(2, 2);
        let locs: Vec<Location> = dim.iter_locations().flatten().collect();
        assert_eq!(
            locs,
            vec![
                Location::new(0, 0),
                Location::new(0, 1),
                Location::new(1, 0),
                Location::new(1, 1),
            ]
        );
    }

    #[test]
    fn default_is_three_by_three() {
        let dim = Dimensions::default();
        assert_eq!((dim.rows(), dim.cols()), (3, 3));
        assert_eq!(dim.total_size(), 9);
    }
}
