//! Implementation of tic-tac-toe on a square board of any size: two marks,
//! alternating turns starting with X, and a win for the first mark to own a
//! full row, full column, or either main diagonal. A full board with no
//! winning line is a draw.

use std::fmt;

use thiserror::Error;

use crate::board::{CannotPlaceReason, Dimensions, Grid, Location, PlaceOutcome};

#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    seq::IteratorRandom,
    Rng,
};

/// Marker for the game. Either `X` or `O`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opponent of this mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Mark> for Standard {
    /// Choose `X` or `O` with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Mark {
        if rng.gen::<bool>() {
            Mark::X
        } else {
            Mark::O
        }
    }
}

/// Status of the game. Returned by [`Game::status`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Status {
    /// The game is still being played.
    InProgress,
    /// The board filled up with no winning line.
    Drawn,
    /// The given mark completed a line.
    Won(Mark),
}

/// Outcome of a successfully played move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveOutcome {
    /// The mark was placed and the turn passed to the opponent.
    Placed,
    /// The mark was placed, filling the board with no winner.
    Drawn,
    /// The mark was placed, completing a line and winning the game.
    Won(Mark),
}

/// Reason why a move could not be played.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlayReason {
    /// The game is already over.
    #[error("the game is already over")]
    GameOver,
    /// The target location is out of bounds for the board.
    #[error("the target location is out of bounds")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[error("the target cell is already occupied")]
    AlreadyOccupied,
}

/// A game of tic-tac-toe on a `size` x `size` board.
///
/// The game owns its grid exclusively; views read board state through
/// [`grid`][Game::grid] or [`iter_board`][Game::iter_board] and never mutate
/// it directly. Resizing is not supported in place: a board of a different
/// size is a brand-new game, discarding prior moves.
pub struct Game {
    /// Grid of placed marks.
    grid: Grid<Mark>,
    /// The mark whose turn it is. Stays on the winner once the game is won.
    current: Mark,
    /// Current status; moves are only accepted while `InProgress`.
    status: Status,
}

impl Game {
    /// Start a game on a `size` x `size` board with X to move. Panics if
    /// `size` is 0.
    pub fn new(size: usize) -> Self {
        Self::with_first(size, Mark::X)
    }

    /// Start a game with the given mark moving first. Panics if `size` is 0.
    pub fn with_first(size: usize, first: Mark) -> Self {
        Self {
            grid: Grid::new(Dimensions::square(size)),
            current: first,
            status: Status::InProgress,
        }
    }

    /// Get the size of the board. The board is always square.
    pub fn size(&self) -> usize {
        self.grid.rows()
    }

    /// Get the mark whose turn it currently is.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Get the status of the game.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Get the winning mark. Returns `None` while the game is in progress
    /// and on a draw.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            Status::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Get read access to the underlying grid.
    pub fn grid(&self) -> &Grid<Mark> {
        &self.grid
    }

    /// Get an iterator over the rows of the board. Each row is an iterator
    /// over the cells of that row.
    pub fn iter_board<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Option<Mark>>> {
        self.grid.iter_rows().map(|row| row.map(|cell| cell.copied()))
    }

    /// Get an iterator over the locations still open for a move.
    pub fn vacant<'a>(&'a self) -> impl 'a + Iterator<Item = Location> {
        self.grid.iter_vacant()
    }

    /// Play the current mark at the given location.
    ///
    /// Fails without changing anything if the game is over, the location is
    /// out of bounds, or the cell is occupied. Otherwise the mark is placed
    /// and the outcome reports whether the move won the game, drew it by
    /// filling the board, or passed the turn to the opponent.
    pub fn play(&mut self, loc: Location) -> Result<MoveOutcome, CannotPlayReason> {
        if self.status != Status::InProgress {
            return Err(CannotPlayReason::GameOver);
        }
        let mark = self.current;
        let outcome = self
            .grid
            .place(mark, loc)
            .map_err(|err| match err.reason() {
                CannotPlaceReason::OutOfBounds => CannotPlayReason::OutOfBounds,
                CannotPlaceReason::AlreadyOccupied => CannotPlayReason::AlreadyOccupied,
            })?;
        Ok(if self.completes_line(mark, loc) {
            self.status = Status::Won(mark);
            MoveOutcome::Won(mark)
        } else if outcome == PlaceOutcome::Full {
            self.status = Status::Drawn;
            MoveOutcome::Drawn
        } else {
            self.current = mark.opponent();
            MoveOutcome::Placed
        })
    }

    /// Choose a vacant cell uniformly at random, or `None` if the board is
    /// full. This is the whole of the computer opponent: a move picker, not
    /// a strategist.
    #[cfg(feature = "rng_gen")]
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Location> {
        self.grid.iter_vacant().choose(rng)
    }

    /// Check whether the mark just placed at `loc` completed a row, column,
    /// or main diagonal. Only lines through `loc` need checking.
    fn completes_line(&self, mark: Mark, loc: Location) -> bool {
        let n = self.size();
        let owns = |l: Location| self.grid[l] == Some(mark);
        if (0..n).all(|col| owns(Location::new(loc.row, col))) {
            return true;
        }
        if (0..n).all(|row| owns(Location::new(row, loc.col))) {
            return true;
        }
        if loc.row == loc.col && (0..n).all(|i| owns(Location::new(i, i))) {
            return true;
        }
        loc.row + loc.col == n - 1 && (0..n).all(|i| owns(Location::new(i, n - 1 - i)))
    }
}
