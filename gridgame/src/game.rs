//! Rules layers built on top of the board. Each module here is one concrete
//! game; the grid in [`board`][crate::board] stays game-agnostic so other
//! grid games (checkers, gomoku, ...) can share it.
//!
//! [`tictactoe`] provides the classic game on a square board of any size:
//! two marks, alternating turns, N-in-a-row wins.

pub mod tictactoe;
