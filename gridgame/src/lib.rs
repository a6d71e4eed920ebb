//! Grid-board game model with bounds-checked cells and a tic-tac-toe rules
//! layer, generic over the marker type.
//!
//! The [`board`] module provides the game-agnostic pieces: [`Location`] and
//! [`Dimensions`] for addressing, and [`Grid`] for storage. A grid cell is
//! either vacant or holds one marker, markers are never overwritten or
//! removed, and every access is bounds checked and reports failure through
//! `Result` rather than by panicking.
//!
//! The [`game`] module builds concrete rules on top of that storage.
//! [`game::tictactoe`] is the classic game generalized to any square board:
//! alternate turns, N-in-a-row wins.
//!
//! [`Location`]: board::Location
//! [`Dimensions`]: board::Dimensions
//! [`Grid`]: board::Grid

pub mod board;
pub mod game;
