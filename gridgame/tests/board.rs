//! Integration tests for the game-agnostic grid: bounds checking, placement
//! outcomes, and the guarantee that rejected operations leave the grid
//! untouched.

use gridgame::board::{CannotPlaceReason, Dimensions, Grid, Location, PlaceOutcome};

/// Every in-bounds cell of a fresh grid is vacant and the counters agree.
#[test]
fn fresh_grid_is_empty() {
    let grid: Grid<u32> = Grid::new(Dimensions::new(2, 3));
    assert_eq!(grid.capacity(), 6);
    assert_eq!(grid.filled(), 0);
    assert!(!grid.is_full());
    for row in 0..2 {
        for col in 0..3 {
            assert_eq!(grid.get(Location::new(row, col)), Ok(None));
        }
    }
}

/// Reads outside the grid fail and report both the location and the bounds.
#[test]
fn out_of_bounds_get_reports_the_bounds() {
    let grid: Grid<u32> = Grid::new(Dimensions::new(3, 3));
    let err = grid.get(Location::new(4, 0)).unwrap_err();
    assert_eq!(err.location(), Location::new(4, 0));
    assert_eq!(err.dimensions(), Dimensions::new(3, 3));
}

/// On a one-cell grid both axes are bounds checked independently.
#[test]
fn single_cell_grid_rejects_both_axes() {
    let grid: Grid<u32> = Grid::new(Dimensions::new(1, 1));
    assert_eq!(grid.get(Location::new(0, 0)), Ok(None));
    assert!(grid.get(Location::new(1, 0)).is_err());
    assert!(grid.get(Location::new(0, 1)).is_err());
}

/// Filling a 3x3 grid reports `Added` eight times and `Full` on the ninth.
#[test]
fn ninth_placement_fills_a_3x3_grid() {
    let mut grid = Grid::new(Dimensions::square(3));
    let mut placed = 0;
    for row in 0..3 {
        for col in 0..3 {
            placed += 1;
            let outcome = grid.place(placed, Location::new(row, col)).unwrap();
            if placed < 9 {
                assert_eq!(outcome, PlaceOutcome::Added);
                assert!(!grid.is_full());
            } else {
                assert_eq!(outcome, PlaceOutcome::Full);
                assert!(grid.is_full());
            }
            assert_eq!(grid.filled(), placed);
        }
    }
}

/// A placement out of bounds hands the marker back and changes nothing.
#[test]
fn rejected_placement_returns_the_marker() {
    let mut grid: Grid<String> = Grid::new(Dimensions::square(2));
    let err = grid.place("pawn".to_owned(), Location::new(2, 0)).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    assert_eq!(err.location(), Location::new(2, 0));
    assert_eq!(err.into_marker(), "pawn");
    assert_eq!(grid.filled(), 0);
}

/// Occupied cells stay as they are; the second placement is refused.
#[test]
fn occupied_cell_is_never_overwritten() {
    let mut grid = Grid::new(Dimensions::square(2));
    grid.place(1, Location::new(0, 1)).unwrap();
    let err = grid.place(2, Location::new(0, 1)).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
    assert_eq!(err.marker(), &2);
    assert_eq!(grid.get(Location::new(0, 1)), Ok(Some(&1)));
    assert_eq!(grid.filled(), 1);
}

/// Distinct cells of a non-square grid do not alias each other.
#[test]
fn non_square_grids_address_cells_row_major() {
    let mut grid = Grid::new(Dimensions::new(2, 4));
    grid.place('a', Location::new(0, 1)).unwrap();
    grid.place('b', Location::new(1, 0)).unwrap();
    assert_eq!(grid.get(Location::new(0, 1)), Ok(Some(&'a')));
    assert_eq!(grid.get(Location::new(1, 0)), Ok(Some(&'b')));
    assert_eq!(grid.get(Location::new(0, 0)), Ok(None));
}

/// Locations are plain values: equal when both coordinates are equal.
#[test]
fn locations_compare_by_coordinates() {
    assert_eq!(Location::new(1, 2), Location::from((1, 2)));
    assert_ne!(Location::new(1, 2), Location::new(2, 1));
}

/// The text rendering shows one row per line with `-` for vacant cells.
#[test]
fn display_matches_the_grid_layout() {
    let mut grid = Grid::new(Dimensions::new(2, 3));
    grid.place(7, Location::new(0, 0)).unwrap();
    grid.place(8, Location::new(1, 2)).unwrap();
    assert_eq!(grid.to_string(), "7 - -\n- - 8\n");
}
