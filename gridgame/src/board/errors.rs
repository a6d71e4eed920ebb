//! Errors used by the [`Grid`][crate::board::Grid].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::{Dimensions, Location};

/// Error returned when reading a cell at a location outside the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("location {loc:?} is out of bounds for {dim:?}")]
pub struct OutOfBounds {
    /// The location that was requested.
    loc: Location,
    /// The dimensions of the grid the location was checked against.
    dim: Dimensions,
}

impl OutOfBounds {
    /// Create an [`OutOfBounds`] error for the given location and dimensions.
    pub(super) fn new(loc: Location, dim: Dimensions) -> Self {
        Self { loc, dim }
    }

    /// Get the location of the failed read.
    pub fn location(&self) -> Location {
        self.loc
    }

    /// Get the dimensions of the grid the read was attempted on.
    pub fn dimensions(&self) -> Dimensions {
        self.dim
    }
}

/// Reason why a marker could not be placed in a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The requested location was not within the bounds of the grid.
    #[error("the requested location is out of bounds")]
    OutOfBounds,
    /// The requested cell already held a marker. Overwriting is not
    /// permitted; the previous marker is left in place.
    #[error("the requested cell was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a marker in an invalid cell.
///
/// Carries the rejected marker so the caller can recover it.
#[derive(Error)]
#[error("could not place marker at {loc:?}: {reason:?}")]
pub struct PlaceError<M> {
    #[source]
    reason: CannotPlaceReason,
    marker: M,
    loc: Location,
}

impl<M> PlaceError<M> {
    /// Construct a placement error from a reason, marker, and location.
    pub(super) fn new(reason: CannotPlaceReason, marker: M, loc: Location) -> Self {
        Self { reason, marker, loc }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the location where placement was attempted.
    pub fn location(&self) -> Location {
        self.loc
    }

    /// Get a reference to the marker that was not placed.
    pub fn marker(&self) -> &M {
        &self.marker
    }

    /// Extract the rejected marker from this error.
    pub fn into_marker(self) -> M {
        self.marker
    }
}

impl<M> Debug for PlaceError<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reports_both_sides() {
        let err = OutOfBounds::new(Location::new(4, 0), Dimensions::new(3, 3));
        let msg = err.to_string();
        assert!(msg.contains("row: 4"));
        assert!(msg.contains("rows: 3"));
    }

    #[test]
    fn place_error_returns_the_marker() {
        let err = PlaceError::new(CannotPlaceReason::AlreadyOccupied, 7, Location::new(1, 1));
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(err.location(), Location::new(1, 1));
        assert_eq!(err.into_marker(), 7);
    }
}
