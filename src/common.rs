//! Common types for battleships: probe outcomes and board errors.

use core::fmt;

/// Result of probing a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Probe landed on open water.
    Miss,
    /// Probe struck a ship that still has unhit cells.
    Hit,
    /// Probe struck the last unhit cell of a ship.
    Sunk,
    /// Cell was probed before and already marked as a hit.
    AlreadyHit,
    /// Cell was probed before and already marked as a miss.
    AlreadyMiss,
}

impl Outcome {
    /// `true` for the two outcomes that newly damage the fleet.
    pub fn is_effective_hit(self) -> bool {
        matches!(self, Outcome::Hit | Outcome::Sunk)
    }
}

/// Errors returned by board and fleet operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Requested board size falls outside the supported range.
    InvalidBoardSize(usize),
    /// Ship placement would extend past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps a previously placed ship.
    ShipOverlaps,
    /// Random placement exhausted its attempt cap without finding a free spot.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidBoardSize(size) => {
                write!(f, "Board size {} is outside the supported range", size)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

impl std::error::Error for BoardError {}
