/// The coordinates of a single cell in a [`Grid`][crate::board::Grid].
///
/// `(0, 0)` is the upper left corner of the board. Rows grow downward and
/// columns grow rightward. Equality is structural; locations have no
/// ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Location {
    /// Vertical position of the cell.
    pub row: usize,
    /// Horizontal position of the cell.
    pub col: usize,
}

impl Location {
    /// Construct a [`Location`] from the given `row` and `col`.
    ///
    /// No validation is performed here; whether the location is in bounds
    /// depends on the grid it is used with.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Location {
    /// Construct a [`Location`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Location> for (usize, usize) {
    /// Convert the [`Location`] into a `(row, col)` pair.
    fn from(loc: Location) -> Self {
        (loc.row, loc.col)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::Location;

    #[test_case(0, 0, 0, 0, true; "origin equals origin")]
    #[test_case(2, 5, 2, 5, true; "same row and col are equal")]
    #[test_case(2, 5, 5, 2, false; "swapped row and col differ")]
    #[test_case(1, 1, 1, 2, false; "differing col differs")]
    #[test_case(1, 1, 2, 1, false; "differing row differs")]
    fn equality(r1: usize, c1: usize, r2: usize, c2: usize, expected: bool) {
        assert_eq!(Location::new(r1, c1) == Location::new(r2, c2), expected);
    }

    #[test]
    fn tuple_round_trip() {
        let loc = Location::from((3, 7));
        assert_eq!(loc, Location::new(3, 7));
        assert_eq!(<(usize, usize)>::from(loc), (3, 7));
    }
}
