//! Types that make up the game board.

pub use self::{
    dimensions::Dimensions,
    errors::{CannotPlaceReason, OutOfBounds, PlaceError},
    grid::{Grid, PlaceOutcome},
    location::Location,
};

mod dimensions;
mod errors;
mod grid;
mod location;
