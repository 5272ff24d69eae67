//! Hit resolution and the single-session game wrapper.

use rand::Rng;

use crate::board::{Board, TileContent};
use crate::common::{BoardError, Outcome};
use crate::fleet::Fleet;

/// Resolve a probe at (`row`, `col`) against the board and fleet.
///
/// Already-probed tiles report `AlreadyHit`/`AlreadyMiss` without mutating
/// anything. Otherwise the tile is marked, and on a hit the owning ship's
/// remaining-hits counter drops, yielding `Sunk` exactly when it reaches
/// zero. Coordinates must already be bounds-checked by the caller; this is
/// the sole mutator of tile content and ship counters during play.
pub fn resolve(board: &mut Board, fleet: &mut Fleet, row: usize, col: usize) -> Outcome {
    debug_assert!(row < board.size() && col < board.size());
    match board.tile(row, col).content {
        TileContent::Hit => return Outcome::AlreadyHit,
        TileContent::Miss => return Outcome::AlreadyMiss,
        TileContent::Empty => {}
    }
    if !board.has_ship(row, col) {
        board.tile_mut(row, col).content = TileContent::Miss;
        return Outcome::Miss;
    }
    board.tile_mut(row, col).content = TileContent::Hit;
    match fleet.ship_at_mut(row, col) {
        Some(ship) => {
            if ship.register_hit() {
                Outcome::Sunk
            } else {
                Outcome::Hit
            }
        }
        None => {
            // unreachable while the occupancy flags match the fleet
            debug_assert!(false, "tile flagged has_ship with no owning ship");
            Outcome::Hit
        }
    }
}

/// One game session: a board, its hidden fleet, and the running count of
/// effective hits.
pub struct Game {
    board: Board,
    fleet: Fleet,
    hits_landed: usize,
}

impl Game {
    /// Build a board of `size` and scatter the fleet across it.
    pub fn new<R: Rng>(size: usize, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Board::new(size)?;
        let fleet = Fleet::place_random(&mut board, rng)?;
        Ok(Game {
            board,
            fleet,
            hits_landed: 0,
        })
    }

    /// Probe one cell and report the outcome, tracking effective hits.
    pub fn probe(&mut self, row: usize, col: usize) -> Outcome {
        let outcome = resolve(&mut self.board, &mut self.fleet, row, col);
        if outcome.is_effective_hit() {
            self.hits_landed += 1;
        }
        outcome
    }

    /// `true` once every fleet cell has been hit.
    pub fn is_over(&self) -> bool {
        self.hits_landed >= self.fleet.total_cells()
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Immutable view of the fleet.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Effective hits landed so far.
    pub fn hits_landed(&self) -> usize {
        self.hits_landed
    }
}
