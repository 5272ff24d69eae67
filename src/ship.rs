//! Ship classes and placed-ship state.

use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship committed to the board, occupying a contiguous run of cells
/// from its origin along its orientation axis. `remaining_hits` starts at
/// the class length and reaches zero exactly when every cell has been hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    row: usize,
    col: usize,
    remaining_hits: usize,
}

impl Ship {
    /// Place a ship at (`row`, `col`) with `orientation`, verifying that it
    /// fits entirely on a `board_size` x `board_size` grid.
    pub fn new(
        class: ShipClass,
        orientation: Orientation,
        row: usize,
        col: usize,
        board_size: usize,
    ) -> Result<Self, BoardError> {
        let len = class.length();
        let fits = match orientation {
            Orientation::Horizontal => row < board_size && col + len <= board_size,
            Orientation::Vertical => col < board_size && row + len <= board_size,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            class,
            orientation,
            row,
            col,
            remaining_hits: len,
        })
    }

    /// Iterate over the cells this ship occupies, origin first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.class.length()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Whether this ship occupies (`row`, `col`).
    pub fn occupies(&self, row: usize, col: usize) -> bool {
        let len = self.class.length();
        match self.orientation {
            Orientation::Horizontal => {
                row == self.row && col >= self.col && col < self.col + len
            }
            Orientation::Vertical => {
                col == self.col && row >= self.row && row < self.row + len
            }
        }
    }

    /// Record one hit on this ship. Returns `true` when the hit sank it.
    /// Must only be called once per occupied cell; the resolver's
    /// already-probed check enforces that.
    pub(crate) fn register_hit(&mut self) -> bool {
        debug_assert!(self.remaining_hits > 0);
        self.remaining_hits -= 1;
        self.remaining_hits == 0
    }

    /// Check if the ship is sunk (all cells hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    /// Ship's class.
    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hits still needed to sink the ship.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }
}
